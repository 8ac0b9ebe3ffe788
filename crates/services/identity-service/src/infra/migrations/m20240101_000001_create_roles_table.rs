//! Migration: Create roles table and seed the built-in roles.

use sea_orm_migration::prelude::*;

use domain::SEEDED_ROLES;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Roles::Name).string_len(50).not_null().unique_key())
                    .to_owned(),
            )
            .await?;

        let mut seed = Query::insert();
        seed.into_table(Roles::Table).columns([Roles::Name]);
        for name in SEEDED_ROLES {
            seed.values([(*name).into()])
                .map_err(|e| DbErr::Migration(e.to_string()))?;
        }

        manager.exec_stmt(seed).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
pub enum Roles {
    Table,
    Id,
    Name,
}
