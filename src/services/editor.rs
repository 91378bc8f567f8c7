//! Profile edit state behind the dashboard.

use crate::config::MissingRecordPolicy;
use crate::error::Result;
use crate::models::{Gender, ProfileForm, User};
use crate::services::record_store::{RecordStore, SaveOutcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditMode {
    Viewing,
    Editing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Phone,
    Gender,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileEditor {
    mode: EditMode,
    form: ProfileForm,
}

impl ProfileEditor {
    pub fn new(user: &User) -> Self {
        Self {
            mode: EditMode::Viewing,
            form: user.profile(),
        }
    }

    pub fn mode(&self) -> EditMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == EditMode::Editing
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn enter_edit(&mut self) {
        self.mode = EditMode::Editing;
    }

    /// Returns whether the form changed. Inputs are read-only while viewing,
    /// and a gender outside the known set is dropped.
    pub fn set_field(&mut self, field: Field, value: String) -> bool {
        if !self.is_editing() {
            return false;
        }
        match field {
            Field::Name => self.form.name = value,
            Field::Phone => self.form.phone = value,
            Field::Gender => match value.parse::<Gender>() {
                Ok(gender) => self.form.gender = gender,
                Err(e) => {
                    log::warn!("ignoring unknown gender {:?}", e.0);
                    return false;
                }
            },
        }
        true
    }

    /// Discard edits and go back to viewing `user`.
    pub fn cancel(&mut self, user: &User) {
        self.form = user.profile();
        self.mode = EditMode::Viewing;
    }

    /// Re-read the form from `user` unless an edit is in progress.
    pub fn sync(&mut self, user: &User) -> bool {
        if self.is_editing() {
            return false;
        }
        self.form = user.profile();
        true
    }

    /// Write the form into the stored record for `user.email` and return the
    /// merged user for the session. `None` when not editing.
    ///
    /// A missing record is left missing under [`MissingRecordPolicy::Ignore`],
    /// so the returned user and the record list diverge.
    pub fn save(
        &mut self,
        user: &User,
        store: &RecordStore,
        policy: MissingRecordPolicy,
    ) -> Result<Option<User>> {
        if !self.is_editing() {
            return Ok(None);
        }
        let merged = user.with_profile(&self.form);
        let outcome = match policy {
            MissingRecordPolicy::Ignore => store.apply_profile(&user.email, &self.form)?,
            MissingRecordPolicy::Create => store.upsert(&merged)?,
        };
        match outcome {
            SaveOutcome::Missing => {
                log::warn!("no stored record for {}, session only", user.email)
            }
            SaveOutcome::Created => log::debug!("created record for {}", user.email),
            SaveOutcome::Updated => log::debug!("updated record for {}", user.email),
        }
        self.mode = EditMode::Viewing;
        Ok(Some(merged))
    }
}
