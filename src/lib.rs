//! Veranda server application core modules.
//!
//! This crate contains all server-side functionality for the Veranda hotel
//! management application: HTTP routing, authentication and role-based
//! authorization, session handling, and database access for rooms,
//! reservations, payments, promotions, and reviews.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
