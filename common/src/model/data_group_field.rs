use serde::{Deserialize, Serialize};

/// A question slot defined on a data group. Every `FactSheetValue` answers
/// exactly one field; the field's `name` is what the detail view groups by.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataGroupField {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub prompt: String,
    pub field_type: String,
    pub data_group_id: i64,
}
