//! HTTP handlers for the posts API
//!
//! This module contains handlers for:
//! - Posts: Create, read, update, delete posts
//! - Health: root greeting and the store connectivity probe
pub mod health;
pub mod posts;

// Re-export handler functions at module level
pub use health::{index, test_db};
pub use posts::{create_post, delete_post, get_post, list_posts, update_post};
