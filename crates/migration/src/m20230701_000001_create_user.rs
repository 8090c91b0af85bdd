//! Create `user` table.
//!
//! Profile fields are optional; credentials are stored as an argon2 hash only.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(uuid(User::Id).primary_key())
                    .col(string_len(User::Username, 150).unique_key().not_null())
                    .col(string_len_null(User::Email, 254))
                    .col(string_len_null(User::Firstname, 100))
                    .col(string_len_null(User::Lastname, 100))
                    .col(string_len_null(User::About, 1000))
                    .col(string_len_null(User::PhoneNumber, 50))
                    .col(string_len(User::PasswordHash, 255).not_null())
                    .col(timestamp_with_time_zone(User::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(User::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(User::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum User {
    Table,
    Id,
    Username,
    Email,
    Firstname,
    Lastname,
    About,
    PhoneNumber,
    PasswordHash,
    CreatedAt,
    UpdatedAt,
}
