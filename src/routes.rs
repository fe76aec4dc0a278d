//! Route table
//!
//! API Endpoints:
//! - `GET    /`            greeting
//! - `GET    /test-db`     store connectivity probe
//! - `GET    /posts`       list posts, newest first
//! - `POST   /posts`       create a post
//! - `GET    /posts/{id}`  fetch one post
//! - `PUT    /posts/{id}`  overwrite caption and image URL
//! - `DELETE /posts/{id}`  delete a post

use actix_web::web;

use crate::handlers;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::index))
        .route("/test-db", web::get().to(handlers::test_db))
        .service(
            web::scope("/posts")
                .service(
                    web::resource("")
                        .route(web::get().to(handlers::list_posts))
                        .route(web::post().to(handlers::create_post)),
                )
                .service(
                    web::resource("/{post_id}")
                        .route(web::get().to(handlers::get_post))
                        .route(web::put().to(handlers::update_post))
                        .route(web::delete().to(handlers::delete_post)),
                ),
        );
}
