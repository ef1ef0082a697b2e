//! Tests for HTTP controller endpoints.
//!
//! Handlers are called directly with a test session and an in-memory SQLite
//! database, asserting on the status codes and redirect targets of their
//! responses.

mod auth;
mod dashboard;
mod reservation;
mod room;
