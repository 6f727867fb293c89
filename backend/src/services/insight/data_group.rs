//! `GET /api/insight/data-group` — paged data-group listing.
//!
//! Clamps the client-supplied pagination, forwards to the upstream
//! `/data_group/` endpoint, and answers with the normalized page envelope.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::services::insight::upstream_error;
use crate::upstream::pagination::{parse_limit, parse_offset, DEFAULT_LIMIT};
use crate::upstream::UpstreamClient;

#[derive(Deserialize)]
pub struct ListQuery {
    offset: Option<String>,
    limit: Option<String>,
    user_id: Option<u32>,
}

pub async fn process(
    query: web::Query<ListQuery>,
    upstream: web::Data<UpstreamClient>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let offset = parse_offset(query.offset.as_deref());
    let limit = parse_limit(query.limit.as_deref(), DEFAULT_LIMIT);
    let user_id = query.user_id.unwrap_or(config.default_user_id);

    match upstream.list_data_groups(offset, limit, user_id).await {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(e) => upstream_error("listing data groups", e),
    }
}
