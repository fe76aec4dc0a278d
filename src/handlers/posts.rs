//! Post handlers - HTTP endpoints for post operations

use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::db::{post_repo, PostgrestClient};
use crate::error::{AppError, Result};
use crate::models::Post;

#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub caption: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePostRequest {
    pub caption: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PostEnvelope {
    pub success: bool,
    pub post: Post,
}

#[derive(Debug, Serialize)]
pub struct PostListEnvelope {
    pub success: bool,
    pub posts: Vec<Post>,
}

#[derive(Debug, Serialize)]
pub struct DeletedEnvelope {
    pub success: bool,
    pub message: String,
}

/// Presence check for a required field; empty counts as missing
fn required<'a>(field: &'a Option<String>, name: &str) -> Result<&'a str> {
    match field.as_deref() {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(AppError::Validation(format!("{} is required", name))),
    }
}

/// List all posts, newest first
pub async fn list_posts(store: web::Data<PostgrestClient>) -> Result<HttpResponse> {
    let posts = post_repo::list_posts(&store).await?;

    Ok(HttpResponse::Ok().json(PostListEnvelope {
        success: true,
        posts,
    }))
}

/// Get a post by ID
pub async fn get_post(
    store: web::Data<PostgrestClient>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    match post_repo::find_post_by_id(&store, *post_id).await? {
        Some(post) => Ok(HttpResponse::Ok().json(PostEnvelope {
            success: true,
            post,
        })),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// Create a new post
pub async fn create_post(
    store: web::Data<PostgrestClient>,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    let caption = required(&req.caption, "caption")?;
    let image_url = required(&req.image_url, "image_url")?;

    let post = post_repo::create_post(&store, caption, image_url).await?;

    Ok(HttpResponse::Created().json(PostEnvelope {
        success: true,
        post,
    }))
}

/// Overwrite caption and image URL on an existing post
pub async fn update_post(
    store: web::Data<PostgrestClient>,
    post_id: web::Path<Uuid>,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    let caption = required(&req.caption, "caption")?;
    let image_url = required(&req.image_url, "image_url")?;

    match post_repo::update_post(&store, *post_id, caption, image_url).await? {
        Some(post) => Ok(HttpResponse::Ok().json(PostEnvelope {
            success: true,
            post,
        })),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// Delete a post
///
/// Existence is checked with a separate read so a missing identifier
/// reports 404; the read and the delete are two store round trips.
pub async fn delete_post(
    store: web::Data<PostgrestClient>,
    post_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    if post_repo::find_post_by_id(&store, *post_id).await?.is_none() {
        return Err(AppError::NotFound("Post not found".to_string()));
    }

    post_repo::delete_post(&store, *post_id).await?;

    Ok(HttpResponse::Ok().json(DeletedEnvelope {
        success: true,
        message: "Post deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_accepts_present_fields() {
        let field = Some("hello".to_string());
        assert_eq!(required(&field, "caption").unwrap(), "hello");
    }

    #[test]
    fn required_rejects_missing_and_empty_fields() {
        assert!(matches!(
            required(&None, "caption"),
            Err(AppError::Validation(_))
        ));
        assert!(matches!(
            required(&Some(String::new()), "image_url"),
            Err(AppError::Validation(_))
        ));
    }
}
