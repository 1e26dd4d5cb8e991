use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
};
use test_utils::{builder::TestBuilder, factory};
use uuid::Uuid;

mod require;
