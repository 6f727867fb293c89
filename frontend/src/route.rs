//! Client-side routes and their path encoding.
//!
//! Three views exist: the group listing, one group's fact sheets, and one
//! fact sheet's detail. The alias segment is kept exactly as it appears in
//! the URL (possibly percent-encoded); decoding happens inside the alias
//! resolver, which tolerates either form.

#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    Insights,
    Group { alias: String },
    Sheet { alias: String, id: i64 },
}

impl Route {
    /// Parses a location pathname. Anything unrecognized lands on the
    /// listing rather than erroring.
    pub fn from_path(path: &str) -> Route {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["insights"] => Route::Insights,
            ["insights", alias] => Route::Group {
                alias: (*alias).to_string(),
            },
            ["insights", alias, id] => match id.parse::<i64>() {
                Ok(id) => Route::Sheet {
                    alias: (*alias).to_string(),
                    id,
                },
                Err(_) => Route::Group {
                    alias: (*alias).to_string(),
                },
            },
            _ => Route::Insights,
        }
    }

    pub fn to_path(&self) -> String {
        match self {
            Route::Insights => "/insights".to_string(),
            Route::Group { alias } => format!("/insights/{alias}"),
            Route::Sheet { alias, id } => format!("/insights/{alias}/{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_the_three_views() {
        assert_eq!(Route::from_path("/insights"), Route::Insights);
        assert_eq!(
            Route::from_path("/insights/customer-research"),
            Route::Group {
                alias: "customer-research".to_string()
            }
        );
        assert_eq!(
            Route::from_path("/insights/customer-research/4"),
            Route::Sheet {
                alias: "customer-research".to_string(),
                id: 4
            }
        );
    }

    #[test]
    fn non_numeric_sheet_id_falls_back_to_the_group() {
        assert_eq!(
            Route::from_path("/insights/market-trends/latest"),
            Route::Group {
                alias: "market-trends".to_string()
            }
        );
    }

    #[test]
    fn unknown_paths_land_on_the_listing() {
        assert_eq!(Route::from_path("/"), Route::Insights);
        assert_eq!(Route::from_path("/settings"), Route::Insights);
        assert_eq!(Route::from_path(""), Route::Insights);
    }

    #[test]
    fn paths_round_trip() {
        let route = Route::Sheet {
            alias: "customer-research".to_string(),
            id: 9,
        };
        assert_eq!(Route::from_path(&route.to_path()), route);
    }
}
