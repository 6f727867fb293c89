//! Buckets a fact sheet's flat value list into the named sections shown on
//! the detail page, and splits those sections into the two-column layout.

use serde::{Deserialize, Serialize};

use crate::model::fact_sheet_value::FactSheetValue;

/// One rendered section: all values answering fields that share a name.
///
/// Section identity follows the first value seen for the name; if two
/// distinct fields share a name their values conflate into one section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSection {
    pub field_id: i64,
    pub field_name: String,
    pub field_description: String,
    pub fact_sheet_id: i64,
    pub values: Vec<FactSheetValue>,
}

/// Groups values by `data_group_field.name` in first-occurrence order.
/// Within a section, values keep their original relative order.
pub fn group_values(values: &[FactSheetValue]) -> Vec<FieldSection> {
    let mut sections: Vec<FieldSection> = Vec::new();
    for value in values {
        let name = &value.data_group_field.name;
        match sections.iter_mut().find(|s| &s.field_name == name) {
            Some(section) => section.values.push(value.clone()),
            None => sections.push(FieldSection {
                field_id: value.data_group_field.id,
                field_name: name.clone(),
                field_description: value.data_group_field.description.clone(),
                fact_sheet_id: value.fact_sheet_id,
                values: vec![value.clone()],
            }),
        }
    }
    sections
}

/// Alternating parity split: even indices left, odd indices right. The rule
/// is load-bearing for visual regression checks and must not change.
pub fn split_columns(sections: &[FieldSection]) -> (Vec<&FieldSection>, Vec<&FieldSection>) {
    let left = sections.iter().step_by(2).collect();
    let right = sections.iter().skip(1).step_by(2).collect();
    (left, right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::data_group_field::DataGroupField;
    use pretty_assertions::assert_eq;

    fn value(id: i64, field_id: i64, field_name: &str) -> FactSheetValue {
        FactSheetValue {
            id,
            name: format!("value {id}"),
            value: format!("text {id}"),
            ai_generated: false,
            data_group_field_id: field_id,
            fact_sheet_id: 7,
            sources: Vec::new(),
            data_group_field: DataGroupField {
                id: field_id,
                name: field_name.to_string(),
                description: format!("about {field_name}"),
                prompt: String::new(),
                field_type: "text".to_string(),
                data_group_id: 1,
            },
        }
    }

    #[test]
    fn groups_in_first_occurrence_order() {
        let values = vec![
            value(1, 10, "Demographics"),
            value(2, 11, "Income"),
            value(3, 10, "Demographics"),
        ];
        let sections = group_values(&values);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].field_name, "Demographics");
        assert_eq!(sections[1].field_name, "Income");
        let ids: Vec<i64> = sections[0].values.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn section_carries_field_metadata() {
        let sections = group_values(&[value(1, 10, "Demographics")]);
        assert_eq!(sections[0].field_id, 10);
        assert_eq!(sections[0].field_description, "about Demographics");
        assert_eq!(sections[0].fact_sheet_id, 7);
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(group_values(&[]).is_empty());
    }

    #[test]
    fn same_name_different_field_conflates() {
        // Known edge case: the section keeps the first field's identity.
        let sections = group_values(&[value(1, 10, "Demographics"), value(2, 99, "Demographics")]);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].field_id, 10);
        assert_eq!(sections[0].values.len(), 2);
    }

    #[test]
    fn splits_by_index_parity() {
        let values = vec![
            value(1, 10, "A"),
            value(2, 11, "B"),
            value(3, 12, "C"),
            value(4, 13, "D"),
            value(5, 14, "E"),
        ];
        let sections = group_values(&values);
        let (left, right) = split_columns(&sections);

        let left_names: Vec<&str> = left.iter().map(|s| s.field_name.as_str()).collect();
        let right_names: Vec<&str> = right.iter().map(|s| s.field_name.as_str()).collect();
        assert_eq!(left_names, vec!["A", "C", "E"]);
        assert_eq!(right_names, vec!["B", "D"]);
    }
}
