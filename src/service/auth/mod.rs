//! Authentication services: signup, login, and password hashing.

pub mod login;
pub mod password;
pub mod signup;
