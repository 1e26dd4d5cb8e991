use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "biome")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub introduction: String,
    #[sea_orm(column_type = "Text")]
    pub general_characteristics: String,
    #[sea_orm(column_type = "Text")]
    pub natural_resources: String,
    #[sea_orm(column_type = "Text")]
    pub environmental_problems: String,
    #[sea_orm(column_type = "Text")]
    pub conservation: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::post::Entity")]
    Post,
    #[sea_orm(has_many = "super::biome_image::Entity")]
    BiomeImage,
}

impl Related<super::post::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Post.def()
    }
}

impl Related<super::biome_image::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BiomeImage.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
