use crate::server::{data::biome_image::BiomeImageRepository, model::biome_image::BiomeImageChanges};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod get_all_with_biome;
mod get_with_biome;
mod update;
