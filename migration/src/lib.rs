pub use sea_orm_migration::prelude::*;

mod m20250901_000001_makeroom;
mod m20250901_000002_rooms;
mod m20250901_000003_room_availability;
mod m20250901_000004_promo;
mod m20250901_000005_room_images;
mod m20250901_000006_customers;
mod m20250901_000007_staff;
mod m20250901_000008_reservations;
mod m20250901_000009_payments;
mod m20250901_000010_reviews;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250901_000001_makeroom::Migration),
            Box::new(m20250901_000002_rooms::Migration),
            Box::new(m20250901_000003_room_availability::Migration),
            Box::new(m20250901_000004_promo::Migration),
            Box::new(m20250901_000005_room_images::Migration),
            Box::new(m20250901_000006_customers::Migration),
            Box::new(m20250901_000007_staff::Migration),
            Box::new(m20250901_000008_reservations::Migration),
            Box::new(m20250901_000009_payments::Migration),
            Box::new(m20250901_000010_reviews::Migration),
        ]
    }
}
