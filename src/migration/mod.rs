use sea_orm_migration::prelude::*;

mod idens;
mod m20250301_000001_create_locations;
mod m20250301_000002_create_lookups;
mod m20250301_000003_create_users;
mod m20250301_000004_create_catalog;
mod m20250301_000005_create_interactions;
mod m20250301_000006_create_generated_videos;
mod m20250301_000007_create_audit_logs;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_locations::Migration),
            Box::new(m20250301_000002_create_lookups::Migration),
            Box::new(m20250301_000003_create_users::Migration),
            Box::new(m20250301_000004_create_catalog::Migration),
            Box::new(m20250301_000005_create_interactions::Migration),
            Box::new(m20250301_000006_create_generated_videos::Migration),
            Box::new(m20250301_000007_create_audit_logs::Migration),
        ]
    }
}

/// `id` auto-increment key plus a required `name`, the shape shared by every lookup table.
fn named_table(
    table: impl IntoIden + 'static,
    id: impl IntoIden + 'static,
    name: impl IntoIden + 'static,
    unique_name: bool,
) -> TableCreateStatement {
    let mut name_col = ColumnDef::new(name);
    name_col.string_len(100).not_null();
    if unique_name {
        name_col.unique_key();
    }

    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(&mut name_col)
        .to_owned()
}
