//! HTTP handlers and route configuration.

mod category;
mod comment;
mod health;
mod post;
mod user_profile;


use actix_web::web;

use crate::middleware::error::{json_error, path_error};

/// Configure all application routes.
///
/// Fixed segments are registered before `{id}` captures that share a prefix.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .app_data(web::PathConfig::default().error_handler(path_error))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                .service(
                    web::scope("/post")
                        .route("", web::get().to(post::list))
                        .route("", web::post().to(post::create))
                        .route("/getbyuser/{id}", web::get().to(post::list_by_user))
                        .route("/getallcategories", web::get().to(post::categories))
                        .route("/addreaction", web::post().to(post::add_reaction))
                        .route("/{id}", web::get().to(post::get_by_id))
                        .route("/{id}", web::put().to(post::update))
                        .route("/{id}", web::delete().to(post::delete)),
                )
                .service(
                    web::scope("/userprofile")
                        .route("", web::get().to(user_profile::list_active))
                        .route("", web::post().to(user_profile::register))
                        .route("/inactive", web::get().to(user_profile::list_inactive))
                        .route(
                            "/{external_id}",
                            web::get().to(user_profile::get_by_external_id),
                        )
                        .route("/{id}", web::put().to(user_profile::activate))
                        .route("/{id}", web::delete().to(user_profile::deactivate)),
                )
                .service(
                    web::scope("/category")
                        .route("", web::get().to(category::list))
                        .route("", web::post().to(category::create))
                        .route("", web::put().to(category::rename))
                        .route("/{id}/activate", web::put().to(category::activate))
                        .route("/{id}", web::put().to(category::deactivate)),
                )
                .service(
                    web::scope("/comment")
                        .route("", web::post().to(comment::add))
                        .route("/bypost/{post_id}", web::get().to(comment::list_for_post))
                        .route("/{id}", web::put().to(comment::update))
                        .route("/{id}", web::delete().to(comment::delete)),
                ),
        );
}
