//! HTTP handlers and route configuration.

mod blogs;
mod health;

use actix_web::web;

/// Upper bound for request bodies. Create/update bodies are buffered
/// before the JSON-or-multipart dispatch, so this must comfortably
/// exceed typical image uploads; actix's 256 KB default does not.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::PayloadConfig::new(MAX_BODY_BYTES)).service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Blog routes
            .service(
                web::scope("/blogs")
                    .route("", web::post().to(blogs::create))
                    .route("", web::get().to(blogs::list))
                    .route("/{id}", web::get().to(blogs::get))
                    .route("/{id}", web::patch().to(blogs::update))
                    .route("/{id}", web::delete().to(blogs::remove)),
            ),
    );
}
