//! Reservation and payment repository.

use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use entity::{payment, reservation};

/// Fields for recording a payment against a reservation.
pub struct NewPayment {
    /// Amount paid.
    pub amount: f64,
    /// Payment method, e.g. "credit card".
    pub payment_method: Option<String>,
    /// Processor transaction reference.
    pub transaction_id: Option<String>,
    /// "success", "failed", or "refunded".
    pub status: Option<String>,
}

/// Repository for reservations and their payments.
pub struct ReservationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReservationRepository<'a> {
    /// Creates a new instance of [`ReservationRepository`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a reservation for a customer, optionally against a room unit
    pub async fn create(
        &self,
        customer_id: i32,
        room_id: Option<i32>,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<reservation::Model, DbErr> {
        let row = reservation::ActiveModel {
            customer_id: ActiveValue::Set(customer_id),
            room_id: ActiveValue::Set(room_id),
            check_in: ActiveValue::Set(check_in),
            check_out: ActiveValue::Set(check_out),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Fetches a reservation by primary key
    pub async fn get_by_id(&self, id: i32) -> Result<Option<reservation::Model>, DbErr> {
        entity::prelude::Reservation::find_by_id(id)
            .one(self.db)
            .await
    }

    /// Lists a customer's reservations, most recent check-in first
    pub async fn list_for_customer(
        &self,
        customer_id: i32,
    ) -> Result<Vec<reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(reservation::Column::CustomerId.eq(customer_id))
            .order_by_desc(reservation::Column::CheckIn)
            .all(self.db)
            .await
    }

    /// Finds a reservation for the room whose stay overlaps `[check_in, check_out)`.
    ///
    /// Two stays overlap when each begins before the other ends; a stay whose
    /// check-out equals another's check-in does not overlap (the room turns
    /// over that day).
    pub async fn find_overlapping(
        &self,
        room_id: i32,
        check_in: NaiveDate,
        check_out: NaiveDate,
    ) -> Result<Option<reservation::Model>, DbErr> {
        entity::prelude::Reservation::find()
            .filter(reservation::Column::RoomId.eq(room_id))
            .filter(reservation::Column::CheckIn.lt(check_out))
            .filter(reservation::Column::CheckOut.gt(check_in))
            .one(self.db)
            .await
    }

    /// Records a payment against a reservation, stamped with the current time
    pub async fn add_payment(
        &self,
        reservation_id: i32,
        new: NewPayment,
    ) -> Result<payment::Model, DbErr> {
        let row = payment::ActiveModel {
            reservation_id: ActiveValue::Set(reservation_id),
            payment_date: ActiveValue::Set(Utc::now().naive_utc()),
            amount: ActiveValue::Set(new.amount),
            payment_method: ActiveValue::Set(new.payment_method),
            transaction_id: ActiveValue::Set(new.transaction_id),
            status: ActiveValue::Set(new.status),
            ..Default::default()
        };

        row.insert(self.db).await
    }

    /// Payments recorded against a reservation, oldest first
    pub async fn payments(&self, reservation_id: i32) -> Result<Vec<payment::Model>, DbErr> {
        entity::prelude::Payment::find()
            .filter(payment::Column::ReservationId.eq(reservation_id))
            .order_by_asc(payment::Column::PaymentDate)
            .all(self.db)
            .await
    }
}
