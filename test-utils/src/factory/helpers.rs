//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including unique value generation and convenience methods for creating
//! entities with their dependencies.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
///
/// Each factory-created entity takes a value from this counter to build unique
/// names and emails, and to spread creation timestamps apart.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Returns a creation timestamp that is strictly later than every timestamp
/// handed out before it.
///
/// Rows created back to back in a test can otherwise share the same clock
/// reading, which makes ordering assertions flaky.
///
/// # Arguments
/// - `seq` - Value previously obtained from `next_id()`
///
/// # Returns
/// - `DateTime<Utc>` - Timestamp offset from a fixed base by `seq` seconds
pub fn timestamp_for(seq: u64) -> DateTime<Utc> {
    let base = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).unwrap_or_else(Utc::now);
    base + Duration::seconds(seq as i64)
}

/// Creates a post together with its author and biome.
///
/// This is a convenience method that creates:
/// 1. User (as post author)
/// 2. Biome
/// 3. Post linked to both
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((author, biome, post))` - Tuple of all created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_post_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::biome::Model,
        entity::post::Model,
    ),
    DbErr,
> {
    let author = crate::factory::user::create_user(db).await?;
    let biome = crate::factory::biome::create_biome(db).await?;
    let post = crate::factory::post::PostFactory::new(db, author.id)
        .biome(biome.id)
        .build()
        .await?;

    Ok((author, biome, post))
}

/// Creates a top-level comment together with the post it belongs to.
///
/// The comment author is a separate user from the post author.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((commenter, post, comment))` - Tuple of the comment author, the post and the comment
/// - `Err(DbErr)` - Database error during creation
pub async fn create_comment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::post::Model,
        entity::comment::Model,
    ),
    DbErr,
> {
    let (_, _, post) = create_post_with_dependencies(db).await?;
    let commenter = crate::factory::user::create_user(db).await?;
    let comment = crate::factory::comment::create_comment(db, post.id, commenter.id).await?;

    Ok((commenter, post, comment))
}
