use crate::server::{data::post::PostRepository, model::post::CreatePostParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod get_all;
mod get_by_biome_ids;
mod load_details;
mod update;
