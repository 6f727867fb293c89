//! Requests against this application's own backend routes.
//!
//! Every function is a single attempt returning `Result<T, String>`; the
//! error string carries the HTTP status and body so the page can show it in
//! its error state. No call retries or times out on its own — a failed
//! fetch becomes a visible Retry affordance, nothing more.

use gloo_net::http::{Request, Response};

use common::model::data_group::DataGroup;
use common::model::fact_sheet::FactSheet;
use common::model::fact_sheet_value::{FactSheetValuePatch, NewFactSheetValue};
use common::model::page::Page;

async fn error_from(resp: Response) -> String {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    format!("HTTP {status}: {body}")
}

async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, String> {
    let resp = Request::get(url).send().await.map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

pub async fn list_data_groups(offset: u32, limit: u32) -> Result<Page<DataGroup>, String> {
    get_json(&format!(
        "/api/insight/data-group?offset={offset}&limit={limit}"
    ))
    .await
}

pub async fn list_fact_sheets(data_group_id: i64, limit: u32) -> Result<Vec<FactSheet>, String> {
    get_json(&format!(
        "/api/insight/fact-sheet?offset=0&limit={limit}&data_group_id={data_group_id}"
    ))
    .await
}

/// Item count for a group's list/count card refinement. The server clamps
/// page size at 100, so that is as far as the count can see.
pub async fn fact_sheet_count(data_group_id: i64) -> Result<u32, String> {
    let sheets = list_fact_sheets(data_group_id, 100).await?;
    Ok(sheets.len() as u32)
}

/// `Ok(None)` is the explicit not-found outcome; callers render it as a
/// view, not an error.
pub async fn get_fact_sheet(id: i64) -> Result<Option<FactSheet>, String> {
    let url = format!("/api/insight/fact-sheet?id={id}");
    let resp = Request::get(&url).send().await.map_err(|e| e.to_string())?;
    if resp.status() == 404 {
        return Ok(None);
    }
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    resp.json::<FactSheet>()
        .await
        .map(Some)
        .map_err(|e| e.to_string())
}

pub async fn create_value(payload: &NewFactSheetValue) -> Result<(), String> {
    let resp = Request::post("/api/insight/fact-sheet-value")
        .json(payload)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    Ok(())
}

pub async fn update_value(id: i64, patch: &FactSheetValuePatch) -> Result<(), String> {
    let resp = Request::put(&format!("/api/insight/fact-sheet-value/{id}"))
        .json(patch)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    Ok(())
}

pub async fn delete_value(id: i64) -> Result<(), String> {
    let resp = Request::delete(&format!("/api/insight/fact-sheet-value/{id}"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(error_from(resp).await);
    }
    Ok(())
}
