//! SeaORM entity definitions for the enrollment database.

pub mod prelude;

pub mod class;
pub mod payment;
pub mod payment_item;
pub mod reservation;
pub mod user;
