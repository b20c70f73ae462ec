//! Payment data repository: the settled payment audit trail.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::model::{
    payment::{CreatePaymentParam, Payment},
    reservation::Reservation,
};

pub struct PaymentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> PaymentRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a payment and one item row per consumed reservation.
    ///
    /// Must run inside the settlement transaction. The unique `reservation_id` column makes
    /// the insert fail if any reservation was already settled.
    pub async fn create(
        &self,
        param: CreatePaymentParam,
        consumed: &[Reservation],
    ) -> Result<Payment, DbErr> {
        let payment = entity::payment::ActiveModel {
            student_email: ActiveValue::Set(param.student_email),
            amount: ActiveValue::Set(param.amount),
            currency: ActiveValue::Set(param.currency),
            transaction_id: ActiveValue::Set(param.transaction_id),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let mut items = Vec::with_capacity(consumed.len());
        for reservation in consumed {
            let item = entity::payment_item::ActiveModel {
                payment_id: ActiveValue::Set(payment.id),
                reservation_id: ActiveValue::Set(reservation.id),
                class_id: ActiveValue::Set(reservation.class_id),
                price: ActiveValue::Set(reservation.price),
                ..Default::default()
            }
            .insert(self.db)
            .await?;
            items.push(item);
        }

        Ok(Payment::from_entity(payment, items))
    }

    /// Gets a student's payments, newest first.
    pub async fn get_by_student(&self, email: &str) -> Result<Vec<Payment>, DbErr> {
        let rows = entity::prelude::Payment::find()
            .filter(entity::payment::Column::StudentEmail.eq(email))
            .order_by_desc(entity::payment::Column::CreatedAt)
            .order_by_desc(entity::payment::Column::Id)
            .find_with_related(entity::prelude::PaymentItem)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(payment, items)| Payment::from_entity(payment, items))
            .collect())
    }
}
