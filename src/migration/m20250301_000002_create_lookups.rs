use sea_orm_migration::prelude::*;

use super::idens::{Categories, Marketplaces, Profiles, Reputations, Statuses};
use super::named_table;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let tables = [
            named_table(Categories::Table, Categories::Id, Categories::Name, true),
            named_table(Marketplaces::Table, Marketplaces::Id, Marketplaces::Name, true),
            named_table(Statuses::Table, Statuses::Id, Statuses::Name, true),
            named_table(Reputations::Table, Reputations::Id, Reputations::Name, true),
            named_table(Profiles::Table, Profiles::Id, Profiles::Name, true),
        ];
        for table in tables {
            manager.create_table(table).await?;
        }
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Reputations::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Statuses::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Marketplaces::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await
    }
}
