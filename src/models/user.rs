use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Gender {
    #[default]
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    pub const ALL: [Gender; 4] = [
        Gender::Male,
        Gender::Female,
        Gender::Other,
        Gender::PreferNotToSay,
    ];

    /// Value used in storage and as the `<option>` value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Other => "other",
            Gender::PreferNotToSay => "prefer-not-to-say",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Other => "Other",
            Gender::PreferNotToSay => "Prefer not to say",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Gender::ALL
            .iter()
            .copied()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| UnknownGender(s.to_string()))
    }
}

/// A registered account. `email` identifies the record and never changes.
///
/// Fields this type does not know about are kept in `extra` so rewriting a
/// stored record does not drop them.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct User {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub gender: Gender,
    #[serde(flatten, default, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl User {
    pub fn new(email: &str, name: &str, phone: &str, gender: Gender) -> Self {
        Self {
            email: email.to_string(),
            name: name.to_string(),
            phone: phone.to_string(),
            gender,
            extra: Map::new(),
        }
    }

    pub fn profile(&self) -> ProfileForm {
        ProfileForm {
            name: self.name.clone(),
            phone: self.phone.clone(),
            gender: self.gender,
        }
    }

    /// Copy of `self` with the editable fields taken from `form`.
    pub fn with_profile(&self, form: &ProfileForm) -> Self {
        let mut user = self.clone();
        user.apply(form);
        user
    }

    pub fn apply(&mut self, form: &ProfileForm) {
        self.name = form.name.clone();
        self.phone = form.phone.clone();
        self.gender = form.gender;
    }
}

/// The editable subset of a [`User`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub phone: String,
    pub gender: Gender,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_uses_kebab_case() {
        let json = serde_json::to_string(&Gender::PreferNotToSay).unwrap();
        assert_eq!(json, "\"prefer-not-to-say\"");
        assert_eq!("prefer-not-to-say".parse::<Gender>(), Ok(Gender::PreferNotToSay));
        assert_eq!(
            "robot".parse::<Gender>(),
            Err(UnknownGender("robot".into()))
        );
    }

    #[test]
    fn unknown_fields_survive_a_rewrite() {
        let raw = r#"{"email":"a@x.com","name":"A","phone":"1","gender":"male","password":"hunter2"}"#;
        let user: User = serde_json::from_str(raw).unwrap();
        assert_eq!(user.extra.get("password"), Some(&Value::from("hunter2")));

        let edited = user.with_profile(&ProfileForm {
            name: "B".into(),
            phone: "2".into(),
            gender: Gender::Other,
        });
        let back: Value = serde_json::to_value(&edited).unwrap();
        assert_eq!(back["password"], "hunter2");
        assert_eq!(back["name"], "B");
        assert_eq!(back["email"], "a@x.com");
    }

    #[test]
    fn plain_user_has_no_extra_keys() {
        let user = User::new("a@x.com", "A", "1", Gender::Female);
        let back = serde_json::to_value(&user).unwrap();
        assert_eq!(back.as_object().map(|o| o.len()), Some(4));
    }
}
