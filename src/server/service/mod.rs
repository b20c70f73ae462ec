//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Settlement runs as a single database transaction

pub mod class;
pub mod payment;
pub mod payment_intent;
pub mod reservation;
pub mod settlement;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
