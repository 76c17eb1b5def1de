//! Flattening of the nested `offices`/`officials` payload.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::record::Representative;
use crate::types::{RawOffice, RawOfficial};

/// Convert a raw civic API payload into representative records.
///
/// One record is produced per (office, official index) pair, in the order
/// offices and indices appear. A missing or malformed `offices` or
/// `officials` collection yields an empty list rather than an error.
#[must_use]
pub fn normalize(payload: &Value) -> Vec<Representative> {
    let Some(offices) = collection::<RawOffice>(payload, "offices") else {
        return Vec::new();
    };
    let Some(officials) = collection::<RawOfficial>(payload, "officials") else {
        return Vec::new();
    };

    flatten(&offices, &officials)
}

/// Join already-parsed offices with their officials.
///
/// Indices that do not resolve to an official are skipped.
#[must_use]
pub fn flatten(offices: &[RawOffice], officials: &[RawOfficial]) -> Vec<Representative> {
    let mut reps = Vec::new();

    for office in offices {
        for &index in &office.official_indices {
            match officials.get(index) {
                Some(official) => reps.push(Representative::from_source(office, official)),
                None => tracing::warn!(
                    office = %office.name,
                    index,
                    officials = officials.len(),
                    "office references a missing official, skipping"
                ),
            }
        }
    }

    reps
}

fn collection<T: DeserializeOwned>(payload: &Value, key: &str) -> Option<Vec<T>> {
    let value = payload.get(key)?;

    match Vec::<T>::deserialize(value) {
        Ok(items) => Some(items),
        Err(err) => {
            tracing::warn!(collection = key, error = %err, "malformed collection in civic payload");
            None
        }
    }
}
