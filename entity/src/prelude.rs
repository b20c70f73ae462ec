pub use super::class::Entity as Class;
pub use super::payment::Entity as Payment;
pub use super::payment_item::Entity as PaymentItem;
pub use super::reservation::Entity as Reservation;
pub use super::user::Entity as User;
