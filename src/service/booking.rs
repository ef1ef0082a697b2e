//! Reservation and payment rules.

use chrono::NaiveDate;
use sea_orm::DatabaseConnection;

use crate::{
    data::{
        reservation::{NewPayment, ReservationRepository},
        room::RoomRepository,
    },
    error::{booking::BookingError, Error},
};

/// Service enforcing booking rules on top of the reservation repository.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    /// Creates a new instance of [`BookingService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a room for a customer.
    ///
    /// Rejects a stay whose check-out is not after its check-in, a room that
    /// does not exist, and a stay overlapping an existing reservation for the
    /// same room. A reservation without a room skips the room checks; the
    /// schema keeps the room optional for walk-in bookings assigned later.
    pub async fn create_reservation(
        &self,
        customer_id: i32,
        room_id: Option<i32>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<entity::reservation::Model, Error> {
        if check_in >= check_out {
            return Err(BookingError::InvalidDateRange.into());
        }

        let reservation_repository = ReservationRepository::new(self.db);

        if let Some(room_id) = room_id {
            let room = RoomRepository::new(self.db).get_by_id(room_id).await?;

            if room.is_none() {
                return Err(BookingError::RoomNotFound(room_id).into());
            }

            let conflict = reservation_repository
                .find_overlapping(room_id, check_in, check_out)
                .await?;

            if conflict.is_some() {
                return Err(BookingError::RoomAlreadyReserved(room_id).into());
            }
        }

        let reservation = reservation_repository
            .create(customer_id, room_id, check_in, check_out)
            .await?;

        tracing::info!(
            reservation_id = %reservation.id,
            customer_id = %customer_id,
            "reservation created"
        );

        Ok(reservation)
    }

    /// Records a payment against one of the customer's reservations.
    ///
    /// A reservation that does not exist or belongs to another customer is
    /// reported as not found; the caller learns nothing about other
    /// customers' bookings.
    pub async fn record_payment(
        &self,
        customer_id: i32,
        reservation_id: i32,
        new: NewPayment,
    ) -> Result<entity::payment::Model, Error> {
        let reservation_repository = ReservationRepository::new(self.db);

        let owned = reservation_repository
            .get_by_id(reservation_id)
            .await?
            .filter(|r| r.customer_id == customer_id);

        if owned.is_none() {
            return Err(BookingError::ReservationNotFound(reservation_id).into());
        }

        let payment = reservation_repository
            .add_payment(reservation_id, new)
            .await?;

        Ok(payment)
    }
}
