use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000004_create_payment_table::Payment;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PaymentItem::Table)
                    .if_not_exists()
                    .col(pk_auto(PaymentItem::Id))
                    .col(integer(PaymentItem::PaymentId))
                    // A reservation is consumed by at most one payment
                    .col(integer_uniq(PaymentItem::ReservationId))
                    .col(integer(PaymentItem::ClassId))
                    .col(big_integer(PaymentItem::Price))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_payment_item_payment_id")
                            .from(PaymentItem::Table, PaymentItem::PaymentId)
                            .to(Payment::Table, Payment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PaymentItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PaymentItem {
    Table,
    Id,
    PaymentId,
    ReservationId,
    ClassId,
    Price,
}
