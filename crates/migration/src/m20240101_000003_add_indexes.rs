use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Service: lookups by owning company
        manager
            .create_index(
                Index::create()
                    .name("idx_service_company")
                    .table(Service::Table)
                    .col(Service::CompanyId)
                    .to_owned(),
            )
            .await?;

        // Company: newest-first listing
        manager
            .create_index(
                Index::create()
                    .name("idx_company_created_at")
                    .table(Company::Table)
                    .col(Company::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_service_company").table(Service::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_company_created_at").table(Company::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Service { Table, CompanyId }

#[derive(DeriveIden)]
enum Company { Table, CreatedAt }
