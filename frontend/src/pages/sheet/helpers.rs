//! Small view-side helpers for the detail page.

use common::insight::alias::decode_segment;

/// Group label for the breadcrumb and summary panel: the decoded URL
/// segment, shown verbatim. Listing links carry the exact group name
/// percent-encoded, so this recovers it with its original casing; a
/// hand-typed alias or id is displayed as typed rather than reconstructed
/// into a wrong-cased guess.
pub fn group_label(alias: &str) -> String {
    decode_segment(alias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_name_is_decoded_verbatim() {
        assert_eq!(group_label("Customer%20Research"), "Customer Research");
    }

    #[test]
    fn mixed_case_names_keep_their_casing() {
        assert_eq!(group_label("iOS%20Apps"), "iOS Apps");
        assert_eq!(group_label("gTLD%20Report"), "gTLD Report");
    }

    #[test]
    fn hand_typed_segments_show_as_typed() {
        assert_eq!(group_label("customer-research"), "customer-research");
        assert_eq!(group_label("3"), "3");
    }
}
