//! Repository for the `posts` table
//!
//! Each function is a single store round trip; the store assigns
//! `id` and `created_at` on insert.

use serde::Serialize;
use uuid::Uuid;

use crate::db::PostgrestClient;
use crate::error::{AppError, Result};
use crate::models::Post;

const TABLE: &str = "posts";

/// Client-provided columns, shared by insert and update
#[derive(Debug, Serialize)]
struct PostFields<'a> {
    caption: &'a str,
    image_url: &'a str,
}

/// Fetch all posts, newest first
pub async fn list_posts(store: &PostgrestClient) -> Result<Vec<Post>> {
    store
        .select(
            TABLE,
            &[
                ("select", "*".to_string()),
                ("order", "created_at.desc".to_string()),
            ],
        )
        .await
}

/// Find a post by ID
pub async fn find_post_by_id(store: &PostgrestClient, post_id: Uuid) -> Result<Option<Post>> {
    let rows: Vec<Post> = store
        .select(
            TABLE,
            &[
                ("select", "*".to_string()),
                ("id", format!("eq.{}", post_id)),
                ("limit", "1".to_string()),
            ],
        )
        .await?;

    Ok(rows.into_iter().next())
}

/// Create a new post and return the stored row
pub async fn create_post(
    store: &PostgrestClient,
    caption: &str,
    image_url: &str,
) -> Result<Post> {
    let rows: Vec<Post> = store
        .insert(TABLE, &PostFields { caption, image_url })
        .await?;

    rows.into_iter()
        .next()
        .ok_or_else(|| AppError::Store("insert returned no rows".to_string()))
}

/// Overwrite caption and image URL on the matching post
///
/// Returns `None` when no row matched the identifier.
pub async fn update_post(
    store: &PostgrestClient,
    post_id: Uuid,
    caption: &str,
    image_url: &str,
) -> Result<Option<Post>> {
    let rows: Vec<Post> = store
        .update(
            TABLE,
            &[("id", format!("eq.{}", post_id))],
            &PostFields { caption, image_url },
        )
        .await?;

    Ok(rows.into_iter().next())
}

/// Delete the matching post; idempotent at the store level
pub async fn delete_post(store: &PostgrestClient, post_id: Uuid) -> Result<()> {
    store
        .delete(TABLE, &[("id", format!("eq.{}", post_id))])
        .await
}

/// Count all posts
pub async fn count_posts(store: &PostgrestClient) -> Result<i64> {
    store.count(TABLE).await
}
