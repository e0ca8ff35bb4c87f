//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Deserializer, Serialize};

/// Lead data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Lead {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub status: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub notes: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// Parameters of an outbound call request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallRequest {
    pub to: String,
    pub lead_id: i64,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
