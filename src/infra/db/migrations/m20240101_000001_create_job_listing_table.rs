//! Migration: Create the job_listing table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(JobListing::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(JobListing::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(JobListing::JobName).text().not_null())
                    .col(ColumnDef::new(JobListing::Description).text().not_null())
                    .col(ColumnDef::new(JobListing::Location).text().not_null())
                    .col(ColumnDef::new(JobListing::Busy).string_len(256).not_null())
                    .col(
                        ColumnDef::new(JobListing::TimePublication)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(JobListing::HowManyPeople)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(JobListing::Salary).text().not_null())
                    .col(ColumnDef::new(JobListing::Favorites).text().not_null())
                    .col(ColumnDef::new(JobListing::Question).text().not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(JobListing::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum JobListing {
    Table,
    Id,
    JobName,
    Description,
    Location,
    Busy,
    TimePublication,
    HowManyPeople,
    Salary,
    Favorites,
    Question,
}
