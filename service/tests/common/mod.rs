//! Common test utilities for integration tests.
//!
//! - [`http_mock::MockHttpServer`] - Stub the civic-information and Gmail APIs
//! - [`civic_payload`] - A realistic `representatives` response

#![allow(dead_code)]

pub mod http_mock;

use serde_json::{json, Value};

/// Response shaped like the civic API's `representatives` endpoint for 90210.
pub fn civic_payload() -> Value {
    json!({
        "kind": "civicinfo#representativeInfoResponse",
        "normalizedInput": {"city": "Beverly Hills", "state": "CA", "zip": "90210"},
        "divisions": {
            "ocd-division/country:us": {"name": "United States", "officeIndices": [0]}
        },
        "offices": [
            {
                "name": "President of the United States",
                "divisionId": "ocd-division/country:us",
                "levels": ["country"],
                "officialIndices": [0]
            },
            {
                "name": "United States Senate",
                "divisionId": "ocd-division/country:us/state:ca",
                "officialIndices": [1, 2]
            },
            {
                "name": "U.S. Representative",
                "divisionId": "ocd-division/country:us/state:ca/cd:36",
                "officialIndices": [3]
            },
            {
                "name": "Governor of California",
                "divisionId": "ocd-division/country:us/state:ca",
                "officialIndices": [4]
            },
            {
                "name": "CA State Senate District 24",
                "divisionId": "ocd-division/country:us/state:ca/sldu:24",
                "officialIndices": [5]
            },
            {
                "name": "Mayor of Beverly Hills",
                "divisionId": "ocd-division/country:us/state:ca/place:beverly_hills",
                "officialIndices": [6]
            }
        ],
        "officials": [
            {"name": "Pat President", "party": "Independent", "urls": ["https://www.whitehouse.gov/"]},
            {
                "name": "Alex Padilla",
                "party": "Democratic Party",
                "phones": ["(202) 224-3553"],
                "channels": [{"type": "Twitter", "id": "SenAlexPadilla"}]
            },
            {"name": "Laphonza Butler", "party": "Democratic Party"},
            {
                "name": "Ted Lieu",
                "party": "Democratic Party",
                "emails": ["rep.lieu@mail.house.gov"],
                "address": [{"line1": "403 Cannon House Office Building", "city": "Washington", "state": "DC", "zip": "20515"}]
            },
            {"name": "Gavin Newsom", "party": "Democratic Party", "photoUrl": "https://example.com/newsom.jpg"},
            {"name": "Ben Allen", "party": "Democratic Party"},
            {"name": "Sharona Nazarian", "emails": ["mayor@beverlyhills.org"]}
        ]
    })
}
