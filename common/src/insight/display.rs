//! Decodes the display directive a group carries in its `image_path`.
//!
//! The upstream service overloads `image_path`: a plain value is just an
//! asset URL, while `kind|threshold|url` selects a card variant. Decoding is
//! two-stage — a string parse, then a count-dependent refinement for the
//! variants that only make sense once a group holds enough items. Both
//! stages must run for the rendering decision to match.

use serde::{Deserialize, Serialize};

/// Card variant selector. Unknown directive kinds are carried through as
/// `Other` rather than rejected; rendering falls back to its default branch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardKind {
    Logo,
    Image,
    List,
    Count,
    Other(String),
}

impl CardKind {
    fn from_directive(raw: &str) -> Self {
        match raw {
            "logo" => CardKind::Logo,
            "image" => CardKind::Image,
            "list" => CardKind::List,
            "count" => CardKind::Count,
            other => CardKind::Other(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayVariant {
    pub kind: CardKind,
    pub threshold: u32,
    pub asset_url: String,
}

impl DisplayVariant {
    /// Stage one: parse the raw `image_path`.
    ///
    /// Absent input yields the image default with an empty URL. With two or
    /// more `|` separators the parts are `[kind, threshold, url]` and a
    /// non-numeric threshold falls back to 0. Anything shorter is a bare
    /// asset URL.
    pub fn parse(image_path: Option<&str>) -> Self {
        let Some(raw) = image_path else {
            return Self::image(String::new());
        };

        let parts: Vec<&str> = raw.split('|').collect();
        if parts.len() >= 3 {
            Self {
                kind: CardKind::from_directive(parts[0]),
                threshold: parts[1].parse().unwrap_or(0),
                asset_url: parts[2].to_string(),
            }
        } else {
            Self::image(raw.to_string())
        }
    }

    /// Stage two: refine `List` and `Count` variants against the group's
    /// item count. The variant survives only when `count > threshold`;
    /// otherwise it downgrades to a plain image card. Other kinds pass
    /// through untouched.
    pub fn refine(self, count: u32) -> Self {
        match self.kind {
            CardKind::List | CardKind::Count if count <= self.threshold => Self {
                kind: CardKind::Image,
                ..self
            },
            _ => self,
        }
    }

    fn image(asset_url: String) -> Self {
        Self {
            kind: CardKind::Image,
            threshold: 0,
            asset_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_full_directive() {
        let v = DisplayVariant::parse(Some("list|5|/img.png"));
        assert_eq!(v.kind, CardKind::List);
        assert_eq!(v.threshold, 5);
        assert_eq!(v.asset_url, "/img.png");
    }

    #[test]
    fn bare_path_is_an_image() {
        let v = DisplayVariant::parse(Some("/plain.png"));
        assert_eq!(v.kind, CardKind::Image);
        assert_eq!(v.threshold, 0);
        assert_eq!(v.asset_url, "/plain.png");
    }

    #[test]
    fn absent_path_is_an_empty_image() {
        let v = DisplayVariant::parse(None);
        assert_eq!(v.kind, CardKind::Image);
        assert_eq!(v.threshold, 0);
        assert_eq!(v.asset_url, "");
    }

    #[test]
    fn non_numeric_threshold_defaults_to_zero() {
        let v = DisplayVariant::parse(Some("count|abc|/x.png"));
        assert_eq!(v.kind, CardKind::Count);
        assert_eq!(v.threshold, 0);
    }

    #[test]
    fn unknown_kind_rides_through_opaquely() {
        let v = DisplayVariant::parse(Some("sparkline|3|/s.png"));
        assert_eq!(v.kind, CardKind::Other("sparkline".to_string()));
        assert_eq!(v.threshold, 3);
    }

    #[test]
    fn two_part_string_is_a_bare_url() {
        let v = DisplayVariant::parse(Some("list|/img.png"));
        assert_eq!(v.kind, CardKind::Image);
        assert_eq!(v.asset_url, "list|/img.png");
    }

    #[test]
    fn refine_keeps_kind_above_threshold() {
        let v = DisplayVariant::parse(Some("list|5|/img.png")).refine(6);
        assert_eq!(v.kind, CardKind::List);
    }

    #[test]
    fn refine_downgrades_at_or_below_threshold() {
        let at = DisplayVariant::parse(Some("count|5|/img.png")).refine(5);
        assert_eq!(at.kind, CardKind::Image);
        let below = DisplayVariant::parse(Some("list|5|/img.png")).refine(2);
        assert_eq!(below.kind, CardKind::Image);
    }

    #[test]
    fn refine_leaves_other_kinds_alone() {
        let v = DisplayVariant::parse(Some("logo|5|/logo.png")).refine(0);
        assert_eq!(v.kind, CardKind::Logo);
    }
}
