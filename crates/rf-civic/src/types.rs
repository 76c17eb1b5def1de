//! Data types for civic-information API responses.

use serde::{Deserialize, Deserializer, Serialize};

use crate::record::PostalAddress;

/// An elected office, referencing its holders by index into `officials`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawOffice {
    /// Office title (e.g., "Governor of California")
    pub name: String,
    /// OCD division identifier (e.g., "ocd-division/country:us/state:ca")
    #[serde(default, deserialize_with = "null_as_default")]
    pub division_id: Option<String>,
    /// Indices into the payload's `officials` list
    #[serde(default, deserialize_with = "null_as_default")]
    pub official_indices: Vec<usize>,
}

/// A person holding office, as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RawOfficial {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub party: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phones: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub urls: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub channels: Vec<RawChannel>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Vec<PostalAddress>,
}

/// A social media channel (e.g., `{"type": "Twitter", "id": "SenFeinstein"}`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawChannel {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
}

/// Treat an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
