//! Sign-in and registration against the local record list.
//!
//! Only presence is checked; there is no password and nothing leaves the
//! browser.

use crate::error::AuthError;
use crate::models::{Gender, User};
use crate::services::record_store::RecordStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
    SignIn,
    Register,
}

/// Raw values from the auth form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub gender: Option<Gender>,
}

fn required(value: &str, field: &'static str) -> Result<String, AuthError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AuthError::MissingField(field));
    }
    Ok(value.to_string())
}

pub fn authenticate(
    store: &RecordStore,
    mode: AuthMode,
    credentials: &Credentials,
) -> Result<User, AuthError> {
    match mode {
        AuthMode::SignIn => sign_in(store, credentials),
        AuthMode::Register => register(store, credentials),
    }
}

pub fn sign_in(store: &RecordStore, credentials: &Credentials) -> Result<User, AuthError> {
    let email = required(&credentials.email, "Email")?;
    store
        .find_by_email(&email)
        .ok_or(AuthError::UnknownAccount)
}

pub fn register(store: &RecordStore, credentials: &Credentials) -> Result<User, AuthError> {
    let email = required(&credentials.email, "Email")?;
    let name = required(&credentials.name, "Full name")?;
    let phone = required(&credentials.phone, "Phone number")?;
    let gender = credentials.gender.ok_or(AuthError::MissingField("Gender"))?;

    let user = User::new(&email, &name, &phone, gender);
    store.insert(&user)?;
    log::debug!("registered {}", user.email);
    Ok(user)
}
