use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Biome::Table)
                    .if_not_exists()
                    .col(pk_uuid(Biome::Id))
                    .col(string_uniq(Biome::Name))
                    .col(text(Biome::Introduction))
                    .col(text(Biome::GeneralCharacteristics))
                    .col(text(Biome::NaturalResources))
                    .col(text(Biome::EnvironmentalProblems))
                    .col(text(Biome::Conservation))
                    .col(
                        timestamp_with_time_zone(Biome::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Biome::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Biome {
    Table,
    Id,
    Name,
    Introduction,
    GeneralCharacteristics,
    NaturalResources,
    EnvironmentalProblems,
    Conservation,
    CreatedAt,
}
