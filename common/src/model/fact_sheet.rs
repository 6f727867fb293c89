use serde::{Deserialize, Serialize};

use crate::model::fact_sheet_value::FactSheetValue;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSheet {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    pub data_group_id: i64,
    pub creation_date: String,
    #[serde(default)]
    pub creator_id: i64,
    /// Answered fields. Upstream sometimes returns sheets without the key;
    /// an absent or empty list renders as an empty detail page.
    #[serde(default)]
    pub values: Vec<FactSheetValue>,
}
