//! HTTP request handlers.
//!
//! Each handler authorizes the request with `AuthGuard` first, converts DTOs to
//! parameters, calls a service and converts the domain result back to a DTO.

pub mod auth;
pub mod class;
pub mod param;
pub mod payment;
pub mod reservation;
pub mod user;
