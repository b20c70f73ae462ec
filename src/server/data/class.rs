//! Class data repository and the seat inventory ledger.
//!
//! `take_seat` is the only write to `available_seats`. It is a conditional update so two
//! settlements racing for the last seat cannot both succeed, and it is called only by the
//! settlement engine inside its transaction.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::class::{Class, CreateClassParam, SeatDecrement};

pub struct ClassRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ClassRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a class with every seat available.
    pub async fn create(&self, param: CreateClassParam) -> Result<Class, DbErr> {
        let entity = entity::class::ActiveModel {
            instructor_email: ActiveValue::Set(param.instructor_email),
            instructor_name: ActiveValue::Set(param.instructor_name),
            title: ActiveValue::Set(param.title),
            capacity: ActiveValue::Set(param.capacity),
            available_seats: ActiveValue::Set(param.capacity),
            price: ActiveValue::Set(param.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Class::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Class>, DbErr> {
        let entity = entity::prelude::Class::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Class::from_entity))
    }

    /// Gets the classes owned by an instructor, newest first.
    pub async fn get_by_instructor(&self, email: &str) -> Result<Vec<Class>, DbErr> {
        let entities = entity::prelude::Class::find()
            .filter(entity::class::Column::InstructorEmail.eq(email))
            .order_by_desc(entity::class::Column::CreatedAt)
            .order_by_desc(entity::class::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Class::from_entity).collect())
    }

    /// Deletes a class; its open reservations cascade.
    ///
    /// # Returns
    /// - `Ok(true)` - Class deleted
    /// - `Ok(false)` - No class with that id
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Class::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Consumes one seat of a class if any is left.
    ///
    /// Runs `available_seats = available_seats - 1 WHERE available_seats > 0` as a single
    /// statement; the counter is never read and written back separately.
    ///
    /// # Returns
    /// - `Ok(SeatDecrement::Taken)` - One seat consumed
    /// - `Ok(SeatDecrement::SoldOut)` - No seat left, nothing changed
    /// - `Ok(SeatDecrement::Missing)` - Class does not exist
    /// - `Err(DbErr)` - Database error during update
    pub async fn take_seat(&self, class_id: i32) -> Result<SeatDecrement, DbErr> {
        let result = entity::prelude::Class::update_many()
            .col_expr(
                entity::class::Column::AvailableSeats,
                Expr::col(entity::class::Column::AvailableSeats).sub(1),
            )
            .filter(entity::class::Column::Id.eq(class_id))
            .filter(entity::class::Column::AvailableSeats.gt(0))
            .exec(self.db)
            .await?;

        if result.rows_affected > 0 {
            return Ok(SeatDecrement::Taken);
        }

        match self.find_by_id(class_id).await? {
            Some(_) => Ok(SeatDecrement::SoldOut),
            None => Ok(SeatDecrement::Missing),
        }
    }
}
