//! Shared controller helpers.

pub mod current_user;
