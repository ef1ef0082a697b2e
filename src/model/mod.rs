//! Server application models and type definitions.
//!
//! Application state, API data-transfer objects, staff role definitions, and
//! the session principal model live here. These types bridge database
//! entities, HTTP handlers, and the session store.

pub mod api;
pub mod app;
pub mod auth;
pub mod session;
