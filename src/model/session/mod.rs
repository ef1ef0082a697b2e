//! Session data models and utilities.
//!
//! Type-safe wrappers for session data storage and retrieval using
//! tower-sessions. The session stores a single tagged [`principal::Principal`]
//! value; there is no separate user-type discriminator.

pub mod principal;
