//! `GET /api/insight/data-group-field` — flat field listing for a group.

use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;

use crate::config::AppConfig;
use crate::services::insight::upstream_error;
use crate::upstream::pagination::{parse_limit, parse_offset, DEFAULT_LIMIT};
use crate::upstream::UpstreamClient;

#[derive(Deserialize)]
pub struct FieldQuery {
    offset: Option<String>,
    limit: Option<String>,
    user_id: Option<u32>,
    data_group_id: Option<i64>,
}

pub async fn process(
    query: web::Query<FieldQuery>,
    upstream: web::Data<UpstreamClient>,
    config: web::Data<AppConfig>,
) -> impl Responder {
    let offset = parse_offset(query.offset.as_deref());
    let limit = parse_limit(query.limit.as_deref(), DEFAULT_LIMIT);
    let user_id = query.user_id.unwrap_or(config.default_user_id);

    match upstream
        .list_data_group_fields(offset, limit, user_id, query.data_group_id)
        .await
    {
        Ok(fields) => HttpResponse::Ok().json(fields),
        Err(e) => upstream_error("listing data group fields", e),
    }
}
