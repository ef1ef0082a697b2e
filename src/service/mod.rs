//! Service layer for business logic and orchestration.
//!
//! Services coordinate between repositories and the session store:
//! authentication (signup, login, password hashing) and booking (reservation
//! and payment rules).

pub mod auth;
pub mod booking;
