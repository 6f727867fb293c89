//! Write proxies for fact-sheet values.
//!
//! The dashboard's add/edit/delete affordances land here and are forwarded
//! to the upstream `/fact_sheet_value/` resource. Success is `204 No
//! Content`; the UI refetches the owning sheet afterwards, so no body is
//! echoed back.

use actix_web::{web, HttpResponse, Responder};

use crate::services::insight::upstream_error;
use crate::upstream::UpstreamClient;
use common::model::fact_sheet_value::{FactSheetValuePatch, NewFactSheetValue};

pub async fn create(
    payload: web::Json<NewFactSheetValue>,
    upstream: web::Data<UpstreamClient>,
) -> impl Responder {
    match upstream.create_fact_sheet_value(&payload).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => upstream_error("creating fact sheet value", e),
    }
}

pub async fn update(
    id: web::Path<i64>,
    payload: web::Json<FactSheetValuePatch>,
    upstream: web::Data<UpstreamClient>,
) -> impl Responder {
    match upstream
        .update_fact_sheet_value(id.into_inner(), &payload)
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => upstream_error("updating fact sheet value", e),
    }
}

pub async fn remove(id: web::Path<i64>, upstream: web::Data<UpstreamClient>) -> impl Responder {
    match upstream.delete_fact_sheet_value(id.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => upstream_error("deleting fact sheet value", e),
    }
}
