//! User domain models and parameters.
//!
//! Provides the email-keyed user record with its role, the verified `Identity` carried by
//! identity tokens, and parameter types for sign-in, listing and role elevation.

use chrono::{DateTime, Utc};
use std::fmt;

use crate::{
    model::user::{PaginatedUsersDto, UserDto},
    server::error::{internal::InternalError, AppError},
};

/// A principal whose email has been proven by a verified identity token.
///
/// Only the token service constructs identities from requests; handlers never build one
/// from a caller-supplied parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

impl Identity {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

/// Role held by a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    None,
    Instructor,
    Admin,
}

impl Role {
    /// Value stored in the `role` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Instructor => "instructor",
            Self::Admin => "admin",
        }
    }

    /// Parses a stored role value, `None` if it is not a known role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "none" => Some(Self::None),
            "instructor" => Some(Self::Instructor),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User record keyed by email.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            name: self.name,
            role: self.role.as_str().to_string(),
            created_at: self.created_at,
        }
    }

    /// Converts an entity model to a user domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(User)` - The converted user domain model
    /// - `Err(AppError::InternalErr(UnknownRole))` - The stored role is not a known role
    pub fn from_entity(entity: entity::user::Model) -> Result<Self, AppError> {
        let Some(role) = Role::parse(&entity.role) else {
            return Err(InternalError::UnknownRole {
                email: entity.email,
                role: entity.role,
            }
            .into());
        };

        Ok(Self {
            id: entity.id,
            email: entity.email,
            name: entity.name,
            role,
            created_at: entity.created_at,
        })
    }
}

/// Parameters for the idempotent first sign-in insert.
#[derive(Debug, Clone)]
pub struct SignInParam {
    pub email: String,
    pub name: Option<String>,
}

/// Paginated collection of users with metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedUsers {
    pub users: Vec<User>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

impl PaginatedUsers {
    pub fn into_dto(self) -> PaginatedUsersDto {
        PaginatedUsersDto {
            users: self.users.into_iter().map(|u| u.into_dto()).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
            total_pages: self.total_pages,
        }
    }
}

/// Parameters for paginated user queries.
#[derive(Debug, Clone)]
pub struct GetAllUsersParam {
    /// Zero-indexed page number.
    pub page: u64,
    /// Number of users to return per page.
    pub per_page: u64,
}

/// Parameters for changing a user's role.
#[derive(Debug, Clone)]
pub struct SetRoleParam {
    pub user_id: i32,
    pub role: Role,
}
