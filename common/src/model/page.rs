use serde::{Deserialize, Serialize};

/// Normalized list envelope returned by the paged proxy routes.
///
/// `has_next` is derived from page fullness, never taken from upstream: a
/// page holding exactly `limit` items reports `true`, so callers must
/// tolerate one trailing "load more" that comes back empty. `total` is the
/// upstream-reported count when one was present, surfaced for display only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: Option<u64>,
    pub offset: u32,
    pub limit: u32,
    #[serde(rename = "hasNext")]
    pub has_next: bool,
}

impl<T> Page<T> {
    pub fn new(data: Vec<T>, total: Option<u64>, offset: u32, limit: u32) -> Self {
        let has_next = data.len() as u32 == limit;
        Self {
            data,
            total,
            offset,
            limit,
            has_next,
        }
    }
}
