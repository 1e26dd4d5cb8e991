use crate::server::{
    data::user::UserRepository,
    model::user::{NewUser, UserChanges},
};
use sea_orm::{DbErr, EntityTrait, SqlErr};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod create;
mod delete;
mod email_taken;
mod set_profile_image;
mod update;
mod with_activity;

fn new_user(email: &str) -> NewUser {
    NewUser {
        name: "Maria".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
        is_admin: false,
    }
}
