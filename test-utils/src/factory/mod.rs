//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has its own factory module with both a
//! `Factory` struct for customization and a `create_*` convenience function for quick
//! default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let student = factory::create_user(&db).await?;
//! let (instructor, class) = factory::helpers::create_class_with_instructor(&db).await?;
//! let reservation = factory::create_reservation(&db, &student.email, &class).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let class = factory::class::ClassFactory::new(&db)
//!     .instructor_email("instructor@example.com")
//!     .capacity(1)
//!     .price(500)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities with a role
//! - `class` - Create class entities with capacity and price
//! - `reservation` - Create reservations with a price snapshot
//! - `helpers` - Unique id generation and creation with dependencies

pub mod class;
pub mod helpers;
pub mod reservation;
pub mod user;

pub use class::create_class;
pub use reservation::create_reservation;
pub use user::create_user;
