//! Database access layer
//!
//! This module provides:
//! - The PostgREST client for the hosted store
//! - The repository for the `posts` table
pub mod post_repo;
pub mod postgrest;

pub use postgrest::PostgrestClient;
