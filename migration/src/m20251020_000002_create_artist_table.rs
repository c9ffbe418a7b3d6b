use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Artist::Table)
                    .if_not_exists()
                    .col(pk_auto(Artist::Id))
                    .col(string(Artist::Name))
                    .col(string(Artist::City))
                    .col(string(Artist::State))
                    .col(string_null(Artist::Phone))
                    .col(string_null(Artist::Website))
                    .col(string_null(Artist::FacebookLink))
                    .col(string_null(Artist::ImageLink))
                    .col(json(Artist::Genres))
                    .col(boolean(Artist::SeekingVenue).default(false))
                    .col(text_null(Artist::SeekingDescription))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Artist::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Artist {
    Table,
    Id,
    Name,
    City,
    State,
    Phone,
    Website,
    FacebookLink,
    ImageLink,
    Genres,
    SeekingVenue,
    SeekingDescription,
}
