//! Client for the upstream fact-sheet REST service.
//!
//! Thin proxy layer: every method issues one request, checks the status,
//! and normalizes the body. List endpoints go through the envelope parser
//! in [`envelope`] so the three upstream response shapes collapse into one;
//! nothing here retries, caches, or paginates on its own.

pub mod envelope;
pub mod error;
mod http;
pub mod pagination;

use serde_json::Value;

pub use error::UpstreamError;

use crate::upstream::http::check_response;
use common::model::data_group::DataGroup;
use common::model::data_group_field::DataGroupField;
use common::model::fact_sheet::FactSheet;
use common::model::fact_sheet_value::{FactSheetValuePatch, NewFactSheetValue};
use common::model::page::Page;

#[derive(Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// `GET /data_group/` — paged listing, normalized to `Page`.
    pub async fn list_data_groups(
        &self,
        offset: u32,
        limit: u32,
        user_id: u32,
    ) -> Result<Page<DataGroup>, UpstreamError> {
        let url = format!(
            "{}/data_group/?offset={offset}&limit={limit}&user_id={user_id}",
            self.base_url
        );
        let body: Value = check_response(self.http.get(&url).send().await?)
            .await?
            .json()
            .await?;
        Ok(envelope::parse_list(body)?.into_page(offset, limit))
    }

    /// `GET /fact_sheet/` — flat listing, optionally filtered by group.
    pub async fn list_fact_sheets(
        &self,
        offset: u32,
        limit: u32,
        user_id: u32,
        data_group_id: Option<i64>,
    ) -> Result<Vec<FactSheet>, UpstreamError> {
        let mut url = format!(
            "{}/fact_sheet/?offset={offset}&limit={limit}&user_id={user_id}",
            self.base_url
        );
        if let Some(group_id) = data_group_id {
            url.push_str(&format!("&data_group_id={group_id}"));
        }
        let body: Value = check_response(self.http.get(&url).send().await?)
            .await?
            .json()
            .await?;
        let (items, _) = envelope::parse_list(body)?.into_items();
        Ok(items)
    }

    /// `GET /fact_sheet/{id}` — single record.
    pub async fn get_fact_sheet(
        &self,
        id: i64,
        user_id: u32,
    ) -> Result<FactSheet, UpstreamError> {
        let url = format!("{}/fact_sheet/{id}?user_id={user_id}", self.base_url);
        let sheet = check_response(self.http.get(&url).send().await?)
            .await?
            .json()
            .await?;
        Ok(sheet)
    }

    /// `GET /data_group_field/` — flat listing, optionally filtered by group.
    pub async fn list_data_group_fields(
        &self,
        offset: u32,
        limit: u32,
        user_id: u32,
        data_group_id: Option<i64>,
    ) -> Result<Vec<DataGroupField>, UpstreamError> {
        let mut url = format!(
            "{}/data_group_field/?offset={offset}&limit={limit}&user_id={user_id}",
            self.base_url
        );
        if let Some(group_id) = data_group_id {
            url.push_str(&format!("&data_group_id={group_id}"));
        }
        let body: Value = check_response(self.http.get(&url).send().await?)
            .await?
            .json()
            .await?;
        let (items, _) = envelope::parse_list(body)?.into_items();
        Ok(items)
    }

    /// `POST /fact_sheet_value/` — create a value. The response body is not
    /// relied upon; callers refetch the owning sheet to observe the write.
    pub async fn create_fact_sheet_value(
        &self,
        payload: &NewFactSheetValue,
    ) -> Result<(), UpstreamError> {
        let url = format!("{}/fact_sheet_value/", self.base_url);
        check_response(self.http.post(&url).json(payload).send().await?).await?;
        Ok(())
    }

    /// `PUT /fact_sheet_value/{id}` — update title/text in place.
    pub async fn update_fact_sheet_value(
        &self,
        id: i64,
        patch: &FactSheetValuePatch,
    ) -> Result<(), UpstreamError> {
        let url = format!("{}/fact_sheet_value/{id}", self.base_url);
        check_response(self.http.put(&url).json(patch).send().await?).await?;
        Ok(())
    }

    /// `DELETE /fact_sheet_value/{id}`.
    pub async fn delete_fact_sheet_value(&self, id: i64) -> Result<(), UpstreamError> {
        let url = format!("{}/fact_sheet_value/{id}", self.base_url);
        check_response(self.http.delete(&url).send().await?).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const GROUPS_FIXTURE: &str = r#"{
        "results": [
            {
                "id": 1,
                "name": "Customer Research",
                "description": "Customer insights and behavior analysis",
                "image_path": "list|5|/research.png",
                "creation_date": "2024-01-15T10:00:00Z",
                "creator_id": 1,
                "data_files": []
            },
            {
                "id": 2,
                "name": "Market Analysis",
                "creation_date": "2024-01-20T14:30:00Z",
                "creator_id": 1
            }
        ],
        "count": 2
    }"#;

    #[test]
    fn parses_group_listing_fixture() {
        let body: Value = serde_json::from_str(GROUPS_FIXTURE).unwrap();
        let page = envelope::parse_list::<DataGroup>(body)
            .unwrap()
            .into_page(0, 10);

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].name, "Customer Research");
        // Optional fields absent upstream default cleanly.
        assert_eq!(page.data[1].description, None);
        assert!(page.data[1].data_files.is_empty());
        assert_eq!(page.total, Some(2));
        assert!(!page.has_next);
    }

    #[test]
    fn parses_sheet_without_values_key() {
        let sheet: FactSheet = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "Secondary Persona",
                "data_group_id": 1,
                "creation_date": "2024-01-18T15:30:00Z"
            }"#,
        )
        .unwrap();
        assert!(sheet.values.is_empty());
        assert_eq!(sheet.creator_id, 0);
    }
}
