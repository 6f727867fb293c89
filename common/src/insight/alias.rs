//! Matches a free-text URL path segment to a data group.
//!
//! Group pages are addressed by human-readable aliases (`/insights/customer-research`),
//! but links in the wild also carry percent-encoded names and raw numeric ids.
//! Resolution therefore tries several equally-valid comparisons and takes the
//! first group in list order that satisfies any of them.

use crate::model::data_group::DataGroup;

/// Derives the canonical alias of a group name: lowercased, whitespace runs
/// collapsed to a single hyphen, everything outside `[a-z0-9-]` stripped.
pub fn group_alias(name: &str) -> String {
    let mut alias = String::with_capacity(name.len());
    let mut in_gap = false;
    for ch in name.to_lowercase().chars() {
        if ch.is_whitespace() {
            in_gap = true;
            continue;
        }
        if in_gap {
            alias.push('-');
            in_gap = false;
        }
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' {
            alias.push(ch);
        }
    }
    alias
}

/// Percent-encodes a group name for use as a path segment. Links generated
/// from a listing carry the name verbatim this way, so the page addressed
/// by the link can recover the exact name with [`decode_segment`] instead
/// of guessing it back out of a lossy alias.
pub fn encode_segment(name: &str) -> String {
    urlencoding::encode(name).into_owned()
}

/// Percent-decodes a path segment, tolerating input that is already decoded
/// or malformed: on any decode failure the segment is returned unchanged, so
/// decoding twice never corrupts text without escape sequences.
pub fn decode_segment(segment: &str) -> String {
    match urlencoding::decode(segment) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => segment.to_string(),
    }
}

/// Returns the first group matching the segment under any comparison:
/// canonical alias against the raw or decoded segment, case-insensitive
/// exact name against the decoded segment, or the group id against either
/// form. `None` means "render the not-found view", not an error.
pub fn resolve_alias<'a>(segment: &str, groups: &'a [DataGroup]) -> Option<&'a DataGroup> {
    let decoded = decode_segment(segment);
    let raw_lower = segment.to_lowercase();
    let decoded_alias = group_alias(&decoded);
    let decoded_lower = decoded.to_lowercase();

    groups.iter().find(|group| {
        let alias = group_alias(&group.name);
        let id = group.id.to_string();
        alias == raw_lower
            || alias == decoded_alias
            || group.name.to_lowercase() == decoded_lower
            || id == segment
            || id == decoded
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn group(id: i64, name: &str) -> DataGroup {
        DataGroup {
            id,
            name: name.to_string(),
            description: None,
            image_path: None,
            creation_date: "2024-01-15T10:00:00Z".to_string(),
            creator_id: 1,
            data_files: Vec::new(),
        }
    }

    fn fixture() -> Vec<DataGroup> {
        vec![
            group(1, "Customer Research"),
            group(2, "Market Analysis"),
            group(3, "User Personas"),
        ]
    }

    #[test]
    fn kebab_alias_from_name() {
        assert_eq!(group_alias("Customer Research"), "customer-research");
        assert_eq!(group_alias("  Q1   Report! "), "q1-report");
        // The ampersand is stripped after the whitespace runs collapse, so
        // both hyphens survive.
        assert_eq!(group_alias("Café & Bar"), "caf--bar");
    }

    #[test]
    fn resolves_kebab_segment() {
        let groups = fixture();
        let found = resolve_alias("customer-research", &groups).unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn resolves_percent_encoded_segment() {
        let groups = fixture();
        let found = resolve_alias("Customer%20Research", &groups).unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn resolves_exact_name_segment() {
        let groups = fixture();
        let found = resolve_alias("Customer Research", &groups).unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn resolves_numeric_id_segment() {
        let groups = fixture();
        let found = resolve_alias("1", &groups).unwrap();
        assert_eq!(found.name, "Customer Research");
    }

    #[test]
    fn unknown_segment_is_absent() {
        let groups = fixture();
        assert!(resolve_alias("no-such-group", &groups).is_none());
    }

    #[test]
    fn first_match_in_list_order_wins() {
        let mut groups = fixture();
        groups.push(group(9, "customer research"));
        let found = resolve_alias("customer-research", &groups).unwrap();
        assert_eq!(found.id, 1);
    }

    #[test]
    fn encoded_names_round_trip_and_resolve() {
        let groups = fixture();
        let segment = encode_segment("Customer Research");
        assert_eq!(segment, "Customer%20Research");
        assert_eq!(decode_segment(&segment), "Customer Research");
        // Mixed-case names survive the trip untouched, unlike the kebab
        // alias, which is one-way.
        assert_eq!(decode_segment(&encode_segment("iOS Apps")), "iOS Apps");
        assert_eq!(resolve_alias(&segment, &groups).unwrap().id, 1);
    }

    #[test]
    fn decoding_already_decoded_text_is_harmless() {
        assert_eq!(decode_segment("Customer Research"), "Customer Research");
        assert_eq!(
            decode_segment(&decode_segment("Customer%20Research")),
            "Customer Research"
        );
    }

    #[test]
    fn malformed_escapes_fall_back_to_raw() {
        // Truncated escape must neither panic nor lose the rest of the text.
        let out = decode_segment("bad%2");
        assert!(out.contains("bad"));
    }
}
