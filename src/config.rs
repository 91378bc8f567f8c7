//! Application settings. Everything has a compiled-in default; there is no
//! environment to read from inside the browser.

pub const USERS_KEY: &str = "mylogn_users";
pub const CURRENT_USER_KEY: &str = "mylogn_current_user";

/// What a profile save does when the signed-in email has no stored record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingRecordPolicy {
    /// Leave the record list alone; only the session copy changes.
    #[default]
    Ignore,
    /// Append the edited user to the record list.
    Create,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub users: String,
    pub current_user: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            users: USERS_KEY.to_string(),
            current_user: CURRENT_USER_KEY.to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub keys: StorageKeys,
    pub missing_record: MissingRecordPolicy,
}
