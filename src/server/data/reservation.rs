//! Reservation data repository for selected-but-unpaid classes.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::reservation::{CreateReservationParam, Reservation};

pub struct ReservationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReservationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateReservationParam) -> Result<Reservation, DbErr> {
        let entity = entity::reservation::ActiveModel {
            student_email: ActiveValue::Set(param.student_email),
            class_id: ActiveValue::Set(param.class_id),
            class_title: ActiveValue::Set(param.class_title),
            price: ActiveValue::Set(param.price),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Reservation::from_entity(entity))
    }

    /// Gets the reservations whose ids are in `ids`; missing ids are simply absent.
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<Reservation>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::Id.is_in(ids.to_vec()))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    /// Gets a student's reservations in selection order.
    pub async fn find_by_student(&self, email: &str) -> Result<Vec<Reservation>, DbErr> {
        let entities = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::StudentEmail.eq(email))
            .order_by_asc(entity::reservation::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Reservation::from_entity).collect())
    }

    pub async fn find_by_student_and_class(
        &self,
        email: &str,
        class_id: i32,
    ) -> Result<Option<Reservation>, DbErr> {
        let entity = entity::prelude::Reservation::find()
            .filter(entity::reservation::Column::StudentEmail.eq(email))
            .filter(entity::reservation::Column::ClassId.eq(class_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Reservation::from_entity))
    }

    /// Deletes a reservation only if it belongs to `email`.
    ///
    /// # Returns
    /// - `Ok(true)` - Reservation deleted
    /// - `Ok(false)` - No reservation with that id owned by `email`
    pub async fn delete_owned(&self, id: i32, email: &str) -> Result<bool, DbErr> {
        let result = entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::Id.eq(id))
            .filter(entity::reservation::Column::StudentEmail.eq(email))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes the given reservations, returning how many rows were removed.
    pub async fn delete_many(&self, ids: &[i32]) -> Result<u64, DbErr> {
        if ids.is_empty() {
            return Ok(0);
        }

        let result = entity::prelude::Reservation::delete_many()
            .filter(entity::reservation::Column::Id.is_in(ids.to_vec()))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
