//! `GET /api/insight/fact-sheet` — fact sheet retrieval.
//!
//! With an `id` parameter the route returns that single sheet; without one
//! it returns a flat array, optionally scoped to a `data_group_id`. The flat
//! shape (rather than a page envelope) is the listing contract the detail
//! pages consume; pagination still applies and is clamped the same way as
//! the group listing.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::services::insight::upstream_error;
use crate::upstream::pagination::{parse_limit, parse_offset, DEFAULT_LIMIT};
use crate::upstream::{UpstreamClient, UpstreamError};

#[derive(Deserialize)]
pub struct SheetQuery {
    id: Option<i64>,
    offset: Option<String>,
    limit: Option<String>,
    user_id: Option<u32>,
    data_group_id: Option<i64>,
}

pub async fn process(
    query: web::Query<SheetQuery>,
    upstream: web::Data<UpstreamClient>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let user_id = query.user_id.unwrap_or(config.default_user_id);

    if let Some(id) = query.id {
        return match upstream.get_fact_sheet(id, user_id).await {
            Ok(sheet) => HttpResponse::Ok().json(sheet),
            // Absence is an expected outcome for the UI, not a proxy fault.
            Err(UpstreamError::Api { status: 404, .. }) => HttpResponse::NotFound()
                .json(serde_json::json!({ "message": format!("fact sheet {id} not found") })),
            Err(e) => upstream_error("fetching fact sheet", e),
        };
    }

    let offset = parse_offset(query.offset.as_deref());
    let limit = parse_limit(query.limit.as_deref(), DEFAULT_LIMIT);

    match upstream
        .list_fact_sheets(offset, limit, user_id, query.data_group_id)
        .await
    {
        Ok(sheets) => HttpResponse::Ok().json(sheets),
        Err(e) => upstream_error("listing fact sheets", e),
    }
}
