use crate::handlers;
use actix_web::{web, Scope};

pub fn config() -> Scope {
    web::scope("/api")
        .app_data(handlers::api_query_config())
        .route("/health", web::get().to(handlers::health_check))
        .route("/search", web::get().to(handlers::api_search))
}
