//! Normalization of the upstream list envelopes.
//!
//! The upstream service answers list requests in three shapes, depending on
//! endpoint and version: a bare JSON array, `{"results": [...], "count": n}`,
//! or `{"data": [...], "total": n}`. Rather than sniffing properties at the
//! call sites, the three shapes are parsed as one tagged set here; a body
//! matching none of them is an error, never a silent empty list.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::upstream::error::UpstreamError;
use common::model::page::Page;

/// The three accepted list shapes. Variant order sets precedence:
/// `results` is preferred over `data` when a body somehow carries both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Results {
        results: Vec<T>,
        #[serde(default)]
        count: Option<u64>,
    },
    Data {
        data: Vec<T>,
        #[serde(default)]
        total: Option<u64>,
    },
    Bare(Vec<T>),
}

impl<T> ListEnvelope<T> {
    /// Unwraps to the item list plus the upstream-reported total, if any.
    pub fn into_items(self) -> (Vec<T>, Option<u64>) {
        match self {
            ListEnvelope::Results { results, count } => (results, count),
            ListEnvelope::Data { data, total } => (data, total),
            ListEnvelope::Bare(items) => (items, None),
        }
    }

    /// Normalizes to the public `Page` shape. `has_next` is derived from
    /// page fullness; the upstream total is carried along for display only.
    pub fn into_page(self, offset: u32, limit: u32) -> Page<T> {
        let (items, total) = self.into_items();
        Page::new(items, total, offset, limit)
    }
}

/// Parses a raw JSON body into a list envelope, failing loudly on any shape
/// outside the documented three.
pub fn parse_list<T: DeserializeOwned>(
    body: serde_json::Value,
) -> Result<ListEnvelope<T>, UpstreamError> {
    serde_json::from_value(body).map_err(|e| UpstreamError::UnrecognizedShape(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn bare_array_is_the_item_list() {
        let env = parse_list::<i64>(json!([1, 2, 3])).unwrap();
        let (items, total) = env.into_items();
        assert_eq!(items, vec![1, 2, 3]);
        assert_eq!(total, None);
    }

    #[test]
    fn results_property_wins_with_count() {
        let env = parse_list::<i64>(json!({"results": [4, 5], "count": 17})).unwrap();
        let (items, total) = env.into_items();
        assert_eq!(items, vec![4, 5]);
        assert_eq!(total, Some(17));
    }

    #[test]
    fn data_property_is_accepted() {
        let env = parse_list::<i64>(json!({"data": [9], "total": 1})).unwrap();
        let (items, total) = env.into_items();
        assert_eq!(items, vec![9]);
        assert_eq!(total, Some(1));
    }

    #[test]
    fn unknown_shape_fails_loudly() {
        let err = parse_list::<i64>(json!({"rows": [1]})).unwrap_err();
        assert!(matches!(err, UpstreamError::UnrecognizedShape(_)));

        let err = parse_list::<i64>(json!("not a list")).unwrap_err();
        assert!(matches!(err, UpstreamError::UnrecognizedShape(_)));
    }

    #[test]
    fn full_page_reports_has_next() {
        let page = parse_list::<i64>(json!([1, 2, 3]))
            .unwrap()
            .into_page(0, 3);
        assert!(page.has_next);

        let page = parse_list::<i64>(json!([1, 2])).unwrap().into_page(0, 3);
        assert!(!page.has_next);
    }

    #[test]
    fn upstream_total_never_drives_has_next() {
        // Upstream claims more rows exist, but the page is short: not full,
        // so no next page.
        let page = parse_list::<i64>(json!({"results": [1], "count": 1000}))
            .unwrap()
            .into_page(0, 10);
        assert!(!page.has_next);
        assert_eq!(page.total, Some(1000));
    }

    #[test]
    fn normalizing_a_normalized_body_is_stable() {
        // Feeding a page's own serialized form back through the parser
        // round-trips: the `data` branch re-applies and nothing shifts.
        let first = parse_list::<i64>(json!({"data": [1, 2], "total": 2}))
            .unwrap()
            .into_page(0, 10);
        let again = parse_list::<i64>(serde_json::to_value(&first).unwrap())
            .unwrap()
            .into_page(0, 10);
        assert_eq!(first, again);
    }
}
