//! Request and response DTOs shared by the HTTP API.

pub mod api;
pub mod class;
pub mod payment;
pub mod reservation;
pub mod user;
