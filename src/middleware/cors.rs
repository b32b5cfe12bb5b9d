use actix_cors::Cors;

use crate::config::SecurityConfig;

/// CORS policy for the JSON endpoints. `*` in the origin list opens them to any origin.
pub fn cors(settings: &SecurityConfig) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allow_any_header()
        .max_age(3600);

    if settings.allowed_origins.iter().any(|origin| origin == "*") {
        return cors.allow_any_origin();
    }

    settings
        .allowed_origins
        .iter()
        .fold(cors, |cors, origin| cors.allowed_origin(origin))
}
