use sea_orm_migration::prelude::*;

use super::idens::{Cities, Countries, Departments};
use super::named_table;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                named_table(Countries::Table, Countries::Id, Countries::Name, true),
            )
            .await?;

        manager
            .create_table(
                named_table(Departments::Table, Departments::Id, Departments::Name, false)
                    .col(ColumnDef::new(Departments::CountryId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_departments_country")
                            .from(Departments::Table, Departments::CountryId)
                            .to(Countries::Table, Countries::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_departments_country_name")
                    .table(Departments::Table)
                    .col(Departments::CountryId)
                    .col(Departments::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                named_table(Cities::Table, Cities::Id, Cities::Name, false)
                    .col(ColumnDef::new(Cities::DepartmentId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cities_department")
                            .from(Cities::Table, Cities::DepartmentId)
                            .to(Departments::Table, Departments::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cities_department_name")
                    .table(Cities::Table)
                    .col(Cities::DepartmentId)
                    .col(Cities::Name)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cities::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Departments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Countries::Table).to_owned())
            .await
    }
}
