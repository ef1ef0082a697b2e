//! HTTP controller endpoints for the Veranda web application.
//!
//! Axum handlers for authentication, dashboards, static pages, and the JSON
//! API over rooms, reservations, and reviews. Controllers validate inputs,
//! call services or repositories, and map results to HTTP responses. API
//! endpoints carry utoipa annotations for the OpenAPI document.

pub mod auth;
pub mod dashboard;
pub mod pages;
pub mod reservation;
pub mod review;
pub mod room;
pub mod util;
