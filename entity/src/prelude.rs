pub use super::customer::Entity as Customer;
pub use super::make_room::Entity as MakeRoom;
pub use super::payment::Entity as Payment;
pub use super::promo::Entity as Promo;
pub use super::reservation::Entity as Reservation;
pub use super::review::Entity as Review;
pub use super::room::Entity as Room;
pub use super::room_availability::Entity as RoomAvailability;
pub use super::room_image::Entity as RoomImage;
pub use super::staff::Entity as Staff;
