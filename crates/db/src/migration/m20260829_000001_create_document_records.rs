//! Creates the unified document/audit record table.

use sea_orm_migration::prelude::*;

/// Migration creating the default `document_records` table.
///
/// Deployments overriding the configured table name must provision the
/// same `(pk, sk, payload)` shape under that name.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Records::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Records::Pk).string().not_null())
                    .col(ColumnDef::new(Records::Sk).string().not_null())
                    .col(ColumnDef::new(Records::Payload).json_binary().not_null())
                    .primary_key(Index::create().col(Records::Pk).col(Records::Sk))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Records::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Records {
    #[sea_orm(iden = "document_records")]
    Table,
    Pk,
    Sk,
    Payload,
}
