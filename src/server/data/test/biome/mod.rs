use crate::server::{
    data::biome::BiomeRepository,
    model::biome::{CreateBiomeParams, UpdateBiomeParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod name_taken;
mod search_by_name;
mod update;
mod with_content;

fn biome_params(name: &str) -> CreateBiomeParams {
    CreateBiomeParams {
        name: name.to_string(),
        introduction: "Introdução".to_string(),
        general_characteristics: "Características".to_string(),
        natural_resources: "Recursos".to_string(),
        environmental_problems: "Problemas".to_string(),
        conservation: "Conservação".to_string(),
    }
}
