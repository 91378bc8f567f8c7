pub mod user;

pub use user::{Gender, ProfileForm, User};
