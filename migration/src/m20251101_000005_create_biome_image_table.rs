use sea_orm_migration::{prelude::*, schema::*};

use super::m20251101_000002_create_biome_table::Biome;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BiomeImage::Table)
                    .if_not_exists()
                    .col(pk_uuid(BiomeImage::Id))
                    .col(string(BiomeImage::Filename))
                    .col(text_null(BiomeImage::Description))
                    .col(uuid(BiomeImage::BiomeId))
                    .col(
                        timestamp_with_time_zone(BiomeImage::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_biome_image_biome_id")
                            .from(BiomeImage::Table, BiomeImage::BiomeId)
                            .to(Biome::Table, Biome::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BiomeImage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BiomeImage {
    Table,
    Id,
    Filename,
    Description,
    BiomeId,
    CreatedAt,
}
