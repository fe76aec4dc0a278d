//! Posts Service Library
//!
//! A minimal REST facade over a hosted Postgres reached through its
//! PostgREST layer. The service exposes CRUD endpoints for a single
//! `posts` table; every handler is one verb translated onto one
//! remote table query.
//!
//! # Modules
//!
//! - `handlers`: HTTP request handlers for posts and health probes
//! - `models`: The `Post` entity
//! - `db`: Store client and the posts repository
//! - `routes`: Route table
//! - `error`: Error types and the status/envelope mapping
//! - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;

pub use config::Config;
pub use error::{AppError, Result};
