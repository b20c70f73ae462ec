//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to the service layer. Repositories are generic over `ConnectionTrait` so
//! the same operations run against the connection pool or inside a `DatabaseTransaction`.

pub mod class;
pub mod payment;
pub mod reservation;
pub mod user;

#[cfg(test)]
mod test;
