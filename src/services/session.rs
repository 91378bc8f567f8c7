//! The signed-in user for the lifetime of the page.

use crate::models::User;
use crate::services::record_store::RecordStore;

/// Which top-level view the app shows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Screen<'a> {
    Auth,
    Dashboard(&'a User),
}

/// Owns "current user, or none" and mirrors it into the record store.
///
/// Persistence failures are logged; the in-memory state changes regardless.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    store: RecordStore,
    current: Option<User>,
}

impl Session {
    /// Pick up whoever was signed in when the page was last open.
    pub fn restore(store: RecordStore) -> Self {
        let current = store.load_current();
        match &current {
            Some(user) => log::debug!("restored session for {}", user.email),
            None => log::debug!("no stored session"),
        }
        Self { store, current }
    }

    pub fn current(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn screen(&self) -> Screen<'_> {
        match &self.current {
            Some(user) => Screen::Dashboard(user),
            None => Screen::Auth,
        }
    }

    pub fn login(&mut self, user: User) {
        log::debug!("signed in as {}", user.email);
        self.persist(&user);
        self.current = Some(user);
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.current.take() {
            log::debug!("signed out {}", user.email);
        }
        if let Err(e) = self.store.clear_current() {
            log::error!("failed to clear session: {}", e);
        }
    }

    pub fn update_user(&mut self, user: User) {
        self.persist(&user);
        self.current = Some(user);
    }

    fn persist(&self, user: &User) {
        if let Err(e) = self.store.save_current(user) {
            log::error!("failed to persist session for {}: {}", user.email, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;
    use crate::config::StorageKeys;
    use crate::models::Gender;
    use crate::services::storage::{MemoryStorage, ReadOnlyStorage};

    fn store() -> RecordStore {
        RecordStore::new(Rc::new(MemoryStorage::new()), StorageKeys::default())
    }

    fn alice() -> User {
        User::new("a@x.com", "A", "1", Gender::Male)
    }

    #[test]
    fn fresh_page_shows_auth() {
        let session = Session::restore(store());
        assert_eq!(session.screen(), Screen::Auth);
        assert_eq!(session.current(), None);
    }

    #[test]
    fn login_survives_reload() {
        let store = store();
        let mut session = Session::restore(store.clone());
        session.login(alice());
        assert_eq!(session.screen(), Screen::Dashboard(&alice()));

        let reloaded = Session::restore(store);
        assert_eq!(reloaded.screen(), Screen::Dashboard(&alice()));
    }

    #[test]
    fn logout_then_reload_shows_auth() {
        let store = store();
        let mut session = Session::restore(store.clone());
        session.login(alice());
        session.logout();
        assert_eq!(session.screen(), Screen::Auth);

        let reloaded = Session::restore(store);
        assert_eq!(reloaded.screen(), Screen::Auth);
    }

    #[test]
    fn update_user_is_persisted() {
        let store = store();
        let mut session = Session::restore(store.clone());
        session.login(alice());

        let edited = User::new("a@x.com", "A", "2", Gender::Male);
        session.update_user(edited.clone());

        assert_eq!(session.current(), Some(&edited));
        assert_eq!(store.load_current(), Some(edited));
    }

    #[test]
    fn failed_persist_still_changes_session() {
        let store = RecordStore::new(Rc::new(ReadOnlyStorage::default()), StorageKeys::default());
        let mut session = Session::restore(store.clone());

        session.login(alice());
        assert_eq!(session.current(), Some(&alice()));
        assert_eq!(store.load_current(), None);

        let edited = User::new("a@x.com", "A", "2", Gender::Male);
        session.update_user(edited.clone());
        assert_eq!(session.current(), Some(&edited));

        session.logout();
        assert_eq!(session.current(), None);
    }
}
