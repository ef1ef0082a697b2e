//! Database entities for the Veranda hotel management application.

pub mod customer;
pub mod make_room;
pub mod payment;
pub mod prelude;
pub mod promo;
pub mod reservation;
pub mod review;
pub mod room;
pub mod room_availability;
pub mod room_image;
pub mod staff;
