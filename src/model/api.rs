//! API data-transfer objects.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::model::auth::StaffRole;

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The currently authenticated principal, as reported by `/api/auth/user`.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PrincipalDto {
    /// Principal ID within its own table (customer or staff).
    pub id: i32,
    /// Display name: the customer's full name or the staff username.
    pub name: String,
    /// Staff role; `None` for customers.
    pub role: Option<StaffRole>,
}

/// A room type with its physical units, thumbnail, and running promotions.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoomTypeDto {
    /// Room type ID.
    pub id: i32,
    /// Marketing title.
    pub title: String,
    /// Longer description, when present.
    pub description: Option<String>,
    /// Nightly rate before promotions.
    pub price_per_night: f64,
    /// Adult capacity, when recorded.
    pub adult_capacity: Option<i32>,
    /// Child capacity, when recorded.
    pub child_capacity: Option<i32>,
    /// Path of the thumbnail image, when one is flagged.
    pub thumbnail: Option<String>,
    /// Physical units of this type.
    pub rooms: Vec<RoomUnitDto>,
    /// Promotions active today.
    pub promos: Vec<PromoDto>,
}

/// A physical room unit.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RoomUnitDto {
    /// Room unit ID.
    pub id: i32,
    /// Door number.
    pub room_number: String,
    /// "available" or "occupied".
    pub status: String,
}

/// A discount campaign.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PromoDto {
    /// Promo ID.
    pub id: i32,
    /// Campaign title.
    pub title: Option<String>,
    /// Discount applied to the nightly rate.
    pub discount: Option<f64>,
    /// First day the promo applies.
    pub date_start: Option<NaiveDate>,
    /// Last day the promo applies.
    pub date_end: Option<NaiveDate>,
}

/// A reservation with its payments.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReservationDto {
    /// Reservation ID.
    pub id: i32,
    /// Reserved room unit, when one was assigned.
    pub room_id: Option<i32>,
    /// Arrival date.
    pub check_in: NaiveDate,
    /// Departure date.
    pub check_out: NaiveDate,
    /// Payments recorded against this reservation.
    pub payments: Vec<PaymentDto>,
}

/// A payment transaction.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct PaymentDto {
    /// Payment ID.
    pub id: i32,
    /// Amount paid.
    pub amount: f64,
    /// Payment method, e.g. "credit card".
    pub payment_method: Option<String>,
    /// Processor transaction reference.
    pub transaction_id: Option<String>,
    /// "success", "failed", or "refunded".
    pub status: Option<String>,
    /// When the payment was recorded.
    pub payment_date: NaiveDateTime,
}

/// A customer review.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReviewDto {
    /// Review ID.
    pub id: i32,
    /// Star rating.
    pub rating: i32,
    /// Free-form comment.
    pub comment: Option<String>,
    /// When the review was left.
    pub review_date: NaiveDateTime,
}
