//! Health endpoints

use actix_web::{web, HttpResponse};

use crate::db::{post_repo, PostgrestClient};
use crate::error::Result;

/// Root greeting, also used by container healthchecks
pub async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "message": "Posts API is running"
    }))
}

/// Round-trip the hosted store and report the posts row count
pub async fn test_db(store: web::Data<PostgrestClient>) -> Result<HttpResponse> {
    let posts_count = post_repo::count_posts(&store).await?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Database connection successful",
        "posts_count": posts_count,
    })))
}
