//! # Insight Service Module
//!
//! Aggregates the API endpoints backing the insights dashboard. Every route
//! under `/api/insight` is a thin proxy onto the upstream fact-sheet
//! service: list routes clamp pagination and normalize the upstream
//! envelope, the fact-sheet-value routes forward writes. One contract, no
//! stub or mock variants.
//!
//! ## Registered routes
//!
//! *   **`GET /data-group`** — paged group listing as
//!     `{data, total, offset, limit, hasNext}`.
//! *   **`GET /fact-sheet`** — with `?id=` a single sheet, otherwise a flat
//!     array filtered by `data_group_id`.
//! *   **`GET /data-group-field`** — flat field listing for a group.
//! *   **`POST /fact-sheet-value`**, **`PUT /fact-sheet-value/{id}`**,
//!     **`DELETE /fact-sheet-value/{id}`** — write proxies; the UI refetches
//!     the owning sheet after each call.

mod data_group;
mod data_group_field;
mod fact_sheet;
mod fact_sheet_value;

use actix_web::web::{delete, get, post, put, scope};
use actix_web::{HttpResponse, Scope};
use log::warn;
use serde_json::json;

use crate::upstream::UpstreamError;

/// The base path for all insight API endpoints.
const API_PATH: &str = "/api/insight";

/// Configures and returns the Actix `Scope` for the insight routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/data-group", get().to(data_group::process))
        .route("/data-group-field", get().to(data_group_field::process))
        .route("/fact-sheet", get().to(fact_sheet::process))
        .route("/fact-sheet-value", post().to(fact_sheet_value::create))
        .route("/fact-sheet-value/{id}", put().to(fact_sheet_value::update))
        .route(
            "/fact-sheet-value/{id}",
            delete().to(fact_sheet_value::remove),
        )
}

/// Maps an upstream failure to the response the browser sees: `502` with a
/// JSON `{message}` carrying the upstream status/message. The UI renders it
/// as a retryable error; nothing is retried here.
pub(crate) fn upstream_error(context: &str, err: UpstreamError) -> HttpResponse {
    warn!("{context}: {err}");
    HttpResponse::BadGateway().json(json!({ "message": err.to_string() }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::upstream::UpstreamClient;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};

    #[test]
    fn error_response_is_a_json_message() {
        let resp = upstream_error(
            "listing data groups",
            UpstreamError::Api {
                status: 500,
                message: "ouch".to_string(),
            },
        );
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    fn test_config() -> AppConfig {
        AppConfig {
            upstream_base_url: "http://127.0.0.1:9".to_string(),
            bind_host: "127.0.0.1".to_string(),
            bind_port: 0,
            default_user_id: 1,
        }
    }

    // Port 9 (discard) has no listener, so the proxy call fails fast; the
    // interesting part is that clamped garbage pagination still reaches the
    // handler and the failure surfaces as a 502, not a panic or a 500.
    #[actix_web::test]
    async fn upstream_failure_surfaces_as_bad_gateway() {
        let config = test_config();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UpstreamClient::new(
                    config.upstream_base_url.clone(),
                )))
                .app_data(web::Data::new(config))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/insight/data-group?offset=-5&limit=500")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
    }

    #[actix_web::test]
    async fn unknown_insight_route_is_not_found() {
        let config = test_config();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(UpstreamClient::new(
                    config.upstream_base_url.clone(),
                )))
                .app_data(web::Data::new(config))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/insight/nope")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
