use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "biome_image")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Server-generated name of the stored file, never a client path.
    pub filename: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    #[sea_orm(indexed)]
    pub biome_id: Uuid,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::biome::Entity",
        from = "Column::BiomeId",
        to = "super::biome::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Biome,
}

impl Related<super::biome::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Biome.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
