use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Class::Table)
                    .if_not_exists()
                    .col(pk_auto(Class::Id))
                    .col(string(Class::InstructorEmail))
                    .col(string_null(Class::InstructorName))
                    .col(string(Class::Title))
                    .col(integer(Class::Capacity))
                    .col(integer(Class::AvailableSeats))
                    .col(big_integer(Class::Price))
                    .col(
                        timestamp_with_time_zone(Class::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_class_instructor_email")
                    .table(Class::Table)
                    .col(Class::InstructorEmail)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Class::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Class {
    Table,
    Id,
    InstructorEmail,
    InstructorName,
    Title,
    Capacity,
    AvailableSeats,
    Price,
    CreatedAt,
}
