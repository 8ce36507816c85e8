use sea_orm_migration::prelude::*;

use super::idens::{GeneratedVideos, Users};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GeneratedVideos::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GeneratedVideos::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GeneratedVideos::UserId).uuid().not_null())
                    .col(ColumnDef::new(GeneratedVideos::ExternalVideoId).string().null())
                    .col(ColumnDef::new(GeneratedVideos::Script).text().not_null())
                    .col(ColumnDef::new(GeneratedVideos::AvatarId).string().not_null())
                    .col(ColumnDef::new(GeneratedVideos::VoiceId).string().not_null())
                    .col(
                        ColumnDef::new(GeneratedVideos::Status)
                            .string_len(30)
                            .not_null(),
                    )
                    .col(ColumnDef::new(GeneratedVideos::VideoUrl).string().null())
                    .col(ColumnDef::new(GeneratedVideos::Error).text().null())
                    .col(
                        ColumnDef::new(GeneratedVideos::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GeneratedVideos::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_generated_videos_user")
                            .from(GeneratedVideos::Table, GeneratedVideos::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GeneratedVideos::Table).to_owned())
            .await
    }
}
