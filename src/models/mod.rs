//! Data models for the posts service

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A published post: an image reference with a caption.
///
/// Rows live in the hosted store; `id` and `created_at` are assigned
/// by column defaults on insert and never change afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub caption: String,
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}
