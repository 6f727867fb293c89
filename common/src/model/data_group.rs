use serde::{Deserialize, Serialize};

/// A named collection of fact sheets, owned by the upstream service.
///
/// Groups are read-only from this application's point of view: they are
/// listed, matched against URL aliases, and rendered as cards. The
/// `image_path` field doubles as an encoded display directive (see
/// `crate::insight::display`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataGroup {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_path: Option<String>,
    pub creation_date: String,
    pub creator_id: i64,
    /// Files ingested into the group. Upstream may omit the field entirely.
    #[serde(default)]
    pub data_files: Vec<DataFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFile {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: String,
    pub version: DataFileVersion,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataFileVersion {
    pub id: i64,
    pub version_number: u32,
    pub creation_date: String,
    pub file_path: String,
    pub file_size: u64,
    pub status: String,
}
