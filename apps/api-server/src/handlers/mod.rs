//! HTTP handlers and route configuration.

mod health;
mod posts;


use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health::health_check))
        .service(
            web::resource("/blogs")
                .route(web::post().to(posts::create_post))
                .route(web::get().to(posts::list_posts))
                .route(web::delete().to(posts::delete_posts)),
        )
        .service(
            web::resource("/blogs/{id}")
                .route(web::put().to(posts::update_post))
                .route(web::delete().to(posts::delete_post)),
        );
}
