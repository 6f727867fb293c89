use serde::{Deserialize, Serialize};

use crate::model::data_group_field::DataGroupField;

/// One answered field on one fact sheet.
///
/// `data_group_field_id` always matches the embedded `data_group_field.id`;
/// the embedded copy is what the grouping logic reads so a value can be
/// bucketed without a second lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSheetValue {
    pub id: i64,
    pub name: String,
    pub value: String,
    pub ai_generated: bool,
    pub data_group_field_id: i64,
    pub fact_sheet_id: i64,
    #[serde(default)]
    pub sources: Vec<Source>,
    pub data_group_field: DataGroupField,
}

/// Opaque provenance reference attached to a value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    #[serde(default)]
    pub name: String,
}

/// Payload for creating a value through the write proxy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewFactSheetValue {
    pub name: String,
    pub value: String,
    pub ai_generated: bool,
    pub data_group_field_id: i64,
    pub fact_sheet_id: i64,
}

/// Payload for editing a value's title and text in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSheetValuePatch {
    pub name: String,
    pub value: String,
}
