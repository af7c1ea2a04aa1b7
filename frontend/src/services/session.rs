//! Logged-in user persisted in browser local storage.
//!
//! The record is read back without validation beyond the JSON parse; a
//! missing or unreadable record simply means nobody is logged in.

use gloo::storage::{LocalStorage, Storage};
use shared::User;

const USER_KEY: &str = "user";

pub fn current_user() -> Option<User> {
    LocalStorage::get(USER_KEY).ok()
}

pub fn save_user(user: &User) {
    let _ = LocalStorage::set(USER_KEY, user);
}

pub fn clear_user() {
    LocalStorage::delete(USER_KEY);
}
