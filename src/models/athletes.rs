//! Athlete records from the core API.

use serde::{Deserialize, Serialize};

use crate::types::AthleteId;

/// Paged athlete listing from the core API.
///
/// The core API returns `$ref` links rather than inline records; fetch a
/// full record with [`Athletes::get`](crate::endpoints::Athletes::get).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AthleteList {
    pub count: u32,
    #[serde(rename = "pageIndex")]
    pub page_index: u32,
    #[serde(rename = "pageSize")]
    pub page_size: u32,
    #[serde(rename = "pageCount")]
    pub page_count: u32,
    #[serde(default)]
    pub items: Vec<ResourceRef>,
}

/// A `$ref` link to a core API resource.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceRef {
    #[serde(rename = "$ref")]
    pub href: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Athlete {
    pub id: AthleteIdField,
    #[serde(rename = "fullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub jersey: Option<String>,
    #[serde(default)]
    pub position: Option<AthletePosition>,
    #[serde(default)]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AthletePosition {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

/// Athlete ids arrive as numbers from the core API but as strings on site
/// API rosters; accept either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AthleteIdField(pub AthleteId);

impl AthleteIdField {
    pub fn as_u64(&self) -> u64 {
        self.0.as_u64()
    }
}

impl From<AthleteIdField> for AthleteId {
    fn from(field: AthleteIdField) -> Self {
        field.0
    }
}

impl<'de> Deserialize<'de> for AthleteIdField {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Error;

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Num(u64),
            Str(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Num(n) => Ok(Self(AthleteId::new(n))),
            Raw::Str(s) => s
                .parse::<AthleteId>()
                .map(Self)
                .map_err(D::Error::custom),
        }
    }
}
