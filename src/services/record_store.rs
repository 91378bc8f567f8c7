//! Durable user records.
//!
//! Two JSON blobs live in the backend: the list of every registered [`User`]
//! and a copy of the one currently signed in. Reads treat anything missing or
//! unparsable as "no data"; writes report backend failures to the caller.

use std::fmt;
use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::config::StorageKeys;
use crate::error::{Result, StoreError};
use crate::models::{ProfileForm, User};
use crate::services::storage::KeyValueStore;

/// What a keyed write did to the record list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Updated,
    Created,
    /// No record had the email; the list was left untouched.
    Missing,
}

#[derive(Clone)]
pub struct RecordStore {
    backend: Rc<dyn KeyValueStore>,
    keys: StorageKeys,
}

impl RecordStore {
    pub fn new(backend: Rc<dyn KeyValueStore>, keys: StorageKeys) -> Self {
        Self { backend, keys }
    }

    pub fn load_all(&self) -> Vec<User> {
        self.read(&self.keys.users).unwrap_or_default()
    }

    pub fn save_all(&self, records: &[User]) -> Result<()> {
        let raw = serde_json::to_string(records)?;
        self.backend.set(&self.keys.users, &raw)
    }

    pub fn load_current(&self) -> Option<User> {
        self.read(&self.keys.current_user)
    }

    pub fn save_current(&self, user: &User) -> Result<()> {
        let raw = serde_json::to_string(user)?;
        self.backend.set(&self.keys.current_user, &raw)
    }

    pub fn clear_current(&self) -> Result<()> {
        self.backend.remove(&self.keys.current_user)
    }

    pub fn find_by_email(&self, email: &str) -> Option<User> {
        self.load_all().into_iter().find(|u| u.email == email)
    }

    /// Append a new record. Emails are unique.
    ///
    /// An unreadable record list counts as empty, so it is replaced.
    pub fn insert(&self, user: &User) -> Result<()> {
        let mut records = self.load_for_write();
        if records.iter().any(|u| u.email == user.email) {
            return Err(StoreError::EmailTaken);
        }
        records.push(user.clone());
        self.save_all(&records)
    }

    /// Overwrite the editable fields of the first record matching `email`.
    pub fn apply_profile(&self, email: &str, form: &ProfileForm) -> Result<SaveOutcome> {
        let mut records = self.load_all();
        match records.iter_mut().find(|u| u.email == email) {
            Some(record) => {
                record.apply(form);
                self.save_all(&records)?;
                Ok(SaveOutcome::Updated)
            }
            None => Ok(SaveOutcome::Missing),
        }
    }

    /// Replace the record with `user.email`, or append `user` if there is none.
    pub fn upsert(&self, user: &User) -> Result<SaveOutcome> {
        let mut records = self.load_for_write();
        let outcome = match records.iter_mut().find(|u| u.email == user.email) {
            Some(record) => {
                record.apply(&user.profile());
                SaveOutcome::Updated
            }
            None => {
                records.push(user.clone());
                SaveOutcome::Created
            }
        };
        self.save_all(&records)?;
        Ok(outcome)
    }

    /// Like [`Self::load_all`], but warns when an unreadable list is about
    /// to be written over.
    fn load_for_write(&self) -> Vec<User> {
        if let Some(records) = self.read(&self.keys.users) {
            return records;
        }
        if let Ok(Some(_)) = self.backend.get(&self.keys.users) {
            log::warn!("overwriting unreadable {}", self.keys.users);
        }
        Vec::new()
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get(key) {
            Ok(raw) => raw?,
            Err(e) => {
                log::warn!("reading {}: {}", key, e);
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::warn!("ignoring malformed {}: {}", key, e);
                None
            }
        }
    }
}

impl PartialEq for RecordStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.backend, &other.backend) && self.keys == other.keys
    }
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("keys", &self.keys)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gender;
    use crate::services::storage::MemoryStorage;

    fn store() -> (Rc<MemoryStorage>, RecordStore) {
        let backend = Rc::new(MemoryStorage::new());
        let store = RecordStore::new(backend.clone(), StorageKeys::default());
        (backend, store)
    }

    fn alice() -> User {
        User::new("a@x.com", "A", "1", Gender::Male)
    }

    #[test]
    fn empty_backend_reads_as_no_data() {
        let (_, store) = store();
        assert!(store.load_all().is_empty());
        assert_eq!(store.load_current(), None);
    }

    #[test]
    fn malformed_blobs_read_as_no_data() {
        let (backend, store) = store();
        backend.set("mylogn_users", "[{\"email\":").unwrap();
        backend.set("mylogn_current_user", "not json").unwrap();
        assert!(store.load_all().is_empty());
        assert_eq!(store.load_current(), None);
    }

    #[test]
    fn one_bad_record_fails_the_whole_list() {
        let (backend, store) = store();
        backend
            .set(
                "mylogn_users",
                r#"[{"email":"a@x.com","name":"A","phone":"1","gender":"male"},{"email":"b@x.com"}]"#,
            )
            .unwrap();
        assert!(store.load_all().is_empty());
    }

    #[test]
    fn insert_replaces_an_unreadable_list() {
        let (backend, store) = store();
        backend.set("mylogn_users", "{broken").unwrap();

        store.insert(&alice()).unwrap();

        assert_eq!(store.load_all(), vec![alice()]);
    }

    #[test]
    fn current_user_round_trip_and_clear() {
        let (_, store) = store();
        store.save_current(&alice()).unwrap();
        assert_eq!(store.load_current(), Some(alice()));

        store.clear_current().unwrap();
        assert_eq!(store.load_current(), None);
    }

    #[test]
    fn insert_rejects_duplicate_email() {
        let (_, store) = store();
        store.insert(&alice()).unwrap();
        let again = User::new("a@x.com", "Other", "9", Gender::Female);
        assert!(matches!(store.insert(&again), Err(StoreError::EmailTaken)));
        assert_eq!(store.load_all(), vec![alice()]);
    }

    #[test]
    fn apply_profile_changes_only_the_matching_record() {
        let (_, store) = store();
        let bob = User::new("b@x.com", "B", "5", Gender::Other);
        store.save_all(&[alice(), bob.clone()]).unwrap();

        let mut form = alice().profile();
        form.phone = "2".into();
        let outcome = store.apply_profile("a@x.com", &form).unwrap();

        assert_eq!(outcome, SaveOutcome::Updated);
        assert_eq!(
            store.load_all(),
            vec![User::new("a@x.com", "A", "2", Gender::Male), bob]
        );
    }

    #[test]
    fn apply_profile_on_missing_email_leaves_list_alone() {
        let (backend, store) = store();
        store.save_all(&[alice()]).unwrap();
        let before = backend.get("mylogn_users").unwrap();

        let form = ProfileForm {
            name: "Z".into(),
            phone: "0".into(),
            gender: Gender::Female,
        };
        let outcome = store.apply_profile("nobody@x.com", &form).unwrap();

        assert_eq!(outcome, SaveOutcome::Missing);
        assert_eq!(backend.get("mylogn_users").unwrap(), before);
    }

    #[test]
    fn upsert_creates_then_updates() {
        let (_, store) = store();
        assert_eq!(store.upsert(&alice()).unwrap(), SaveOutcome::Created);

        let renamed = User::new("a@x.com", "Alice", "1", Gender::Male);
        assert_eq!(store.upsert(&renamed).unwrap(), SaveOutcome::Updated);
        assert_eq!(store.load_all(), vec![renamed]);
    }

    #[test]
    fn apply_profile_keeps_unknown_fields() {
        let (backend, store) = store();
        backend
            .set(
                "mylogn_users",
                r#"[{"email":"a@x.com","name":"A","phone":"1","gender":"male","password":"pw"}]"#,
            )
            .unwrap();

        let mut form = alice().profile();
        form.name = "Alice".into();
        store.apply_profile("a@x.com", &form).unwrap();

        let raw = backend.get("mylogn_users").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["password"], "pw");
        assert_eq!(value[0]["name"], "Alice");
    }

    #[test]
    fn stores_share_a_backend_compare_equal() {
        let (backend, a) = store();
        let b = RecordStore::new(backend, StorageKeys::default());
        let (_, c) = store();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
