//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles the idempotent sign-in insert, lookups by email or id, pagination and role
//! changes, converting entity models into domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, ConnectionTrait, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::user::{Role, SignInParam, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or transaction
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a user on first sign-in, returning the existing record otherwise.
    ///
    /// New users start without a role. An existing record is never modified, so repeated
    /// sign-ins cannot reset a granted role. A concurrent insert for the same email is
    /// absorbed by the conflict clause on the unique email column.
    ///
    /// # Arguments
    /// - `param` - Email and optional display name
    ///
    /// # Returns
    /// - `Ok((User, true))` - The user was created
    /// - `Ok((User, false))` - The user already existed
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn sign_in(&self, param: SignInParam) -> Result<(User, bool), AppError> {
        if let Some(existing) = self.find_by_email(&param.email).await? {
            return Ok((existing, false));
        }

        let entity = entity::prelude::User::insert(entity::user::ActiveModel {
            email: ActiveValue::Set(param.email),
            name: ActiveValue::Set(param.name),
            role: ActiveValue::Set(Role::None.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::user::Column::Email)
                .update_column(entity::user::Column::Email)
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok((User::from_entity(entity)?, true))
    }

    /// Finds a user by email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that email
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        entity.map(User::from_entity).transpose()
    }

    /// Finds a user by primary key.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        entity.map(User::from_entity).transpose()
    }

    /// Gets all users with pagination, ordered by email.
    ///
    /// # Arguments
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of users to return per page
    ///
    /// # Returns
    /// - `Ok((users, total))` - Users for the requested page and total user count
    /// - `Err(AppError)` - Database error or unknown stored role
    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<User>, u64), AppError> {
        let paginator = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Email)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;
        let users = entities
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Sets the role of a user.
    ///
    /// # Returns
    /// - `Ok(true)` - Role updated
    /// - `Ok(false)` - No user with that id
    /// - `Err(AppError::DbErr)` - Database error during update
    pub async fn set_role(&self, id: i32, role: Role) -> Result<bool, AppError> {
        let result = entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::Role,
                sea_orm::sea_query::Expr::value(role.as_str()),
            )
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
