//! Data access layer repositories.
//!
//! Repositories provide an abstraction layer over database operations,
//! organized by domain: accounts (customers, staff), the room catalog, and
//! bookings (reservations, payments, reviews).

pub mod customer;
pub mod reservation;
pub mod review;
pub mod room;
pub mod room_type;
pub mod staff;
