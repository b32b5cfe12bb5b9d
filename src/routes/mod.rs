pub mod api;

use actix_web::web;

use crate::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .app_data(handlers::page_query_config())
            .route(web::get().to(handlers::search_page)),
    )
    .service(api::config());
}
