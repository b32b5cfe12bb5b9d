use actix_web::{error::InternalError, http::StatusCode, web, HttpResponse, Result};
use chrono::Utc;

use crate::models::{ErrorResponse, SearchQuery, SearchResponse};
use crate::services::SearchError;
use crate::templates::pages::{ErrorPage, SearchPage, SearchResults};
use crate::templates::RenderPage;
use crate::AppState;

/// Runs one query. A provider refusal is folded into the results so it can be shown
/// next to an empty list; any other failure aborts the interaction.
async fn dispatch(state: &AppState, query: &str) -> std::result::Result<SearchResults, SearchError> {
    match state.search_service.search(query).await {
        Ok(items) => Ok(SearchResults { items, error: None }),
        Err(err @ SearchError::Provider { .. }) => Ok(SearchResults {
            items: Vec::new(),
            error: Some(err.to_string()),
        }),
        Err(err) => Err(err),
    }
}

/// Unparseable query strings on the page get the HTML error page.
pub fn page_query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        tracing::warn!("Rejected page query: {}", err);
        let response = RenderPage(ErrorPage).with_status(StatusCode::BAD_REQUEST);
        InternalError::from_response(err, response).into()
    })
}

pub fn api_query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        tracing::warn!("Rejected api query: {}", err);
        let response = HttpResponse::BadRequest().json(ErrorResponse::with_details(
            "Invalid query string",
            err.to_string(),
        ));
        InternalError::from_response(err, response).into()
    })
}

pub async fn search_page(
    state: web::Data<AppState>,
    params: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let Some(query) = params.into_inner().q else {
        let page = SearchPage {
            query: state.config.search.default_query.clone(),
            results: None,
        };
        return Ok(RenderPage(page).with_status(StatusCode::OK));
    };

    match dispatch(&state, &query).await {
        Ok(results) => {
            let page = SearchPage {
                query,
                results: Some(results),
            };
            Ok(RenderPage(page).with_status(StatusCode::OK))
        }
        Err(e) => {
            tracing::error!("Search error: {:?}", e);
            Ok(RenderPage(ErrorPage).with_status(StatusCode::BAD_GATEWAY))
        }
    }
}

pub async fn api_search(
    state: web::Data<AppState>,
    params: web::Query<SearchQuery>,
) -> Result<HttpResponse> {
    let query = params.into_inner().q.unwrap_or_default();

    match dispatch(&state, &query).await {
        Ok(results) => Ok(HttpResponse::Ok().json(SearchResponse {
            query,
            items: results.items,
            error: results.error,
            timestamp: Utc::now(),
        })),
        Err(e) => {
            tracing::error!("Search error: {:?}", e);
            Ok(HttpResponse::BadGateway().json(ErrorResponse::with_details(
                "Failed to process search request",
                e.to_string(),
            )))
        }
    }
}
