//! Tests for signup, login, logout, and the current-user endpoint.

mod login;
mod logout;
mod user;
