use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000002_create_class_table::Class;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(string(Reservation::StudentEmail))
                    .col(integer(Reservation::ClassId))
                    .col(string(Reservation::ClassTitle))
                    .col(big_integer(Reservation::Price))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_class_id")
                            .from(Reservation::Table, Reservation::ClassId)
                            .to(Class::Table, Class::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One open reservation per student and class
        manager
            .create_index(
                Index::create()
                    .name("idx_reservation_student_class")
                    .table(Reservation::Table)
                    .col(Reservation::StudentEmail)
                    .col(Reservation::ClassId)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    StudentEmail,
    ClassId,
    ClassTitle,
    Price,
    CreatedAt,
}
