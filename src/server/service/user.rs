//! User service for business logic.
//!
//! This module provides the `UserService` for sign-in, the admin user listing, role
//! queries and role elevation. It works with domain models rather than DTOs.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::{GetAllUsersParam, PaginatedUsers, Role, SetRoleParam, SignInParam, User},
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records the first sign-in of an identity.
    ///
    /// # Returns
    /// - `Ok((User, true))` - A new user record was inserted
    /// - `Ok((User, false))` - The user already existed and was left unchanged
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn sign_in(&self, param: SignInParam) -> Result<(User, bool), AppError> {
        let (user, created) = UserRepository::new(self.db).sign_in(param).await?;

        if created {
            tracing::info!("Registered user {}", user.email);
        }

        Ok((user, created))
    }

    /// Retrieves all users with pagination.
    ///
    /// Calculates total pages based on the per_page parameter and total user count.
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::BadRequest)` - `per_page` is zero
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn get_all_users(&self, param: GetAllUsersParam) -> Result<PaginatedUsers, AppError> {
        if param.per_page == 0 {
            return Err(AppError::BadRequest(
                "entries must be greater than zero".to_string(),
            ));
        }

        let (users, total) = UserRepository::new(self.db)
            .get_all_paginated(param.page, param.per_page)
            .await?;

        let total_pages = total.div_ceil(param.per_page);

        Ok(PaginatedUsers {
            users,
            total,
            page: param.page,
            per_page: param.per_page,
            total_pages,
        })
    }

    /// Checks whether the user with `email` holds `role`.
    ///
    /// An email without a user record holds no role.
    pub async fn has_role(&self, email: &str, role: Role) -> Result<bool, AppError> {
        let user = UserRepository::new(self.db).find_by_email(email).await?;

        Ok(user.is_some_and(|u| u.role == role))
    }

    /// Changes the role of a user.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn set_role(&self, param: SetRoleParam) -> Result<User, AppError> {
        let repo = UserRepository::new(self.db);

        if !repo.set_role(param.user_id, param.role).await? {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                param.user_id
            )));
        }

        let Some(user) = repo.find_by_id(param.user_id).await? else {
            return Err(AppError::NotFound(format!(
                "User {} not found",
                param.user_id
            )));
        };

        tracing::info!("Set role of {} to {}", user.email, user.role);

        Ok(user)
    }
}
