//! Civic information client and representative normalization.
//!
//! Fetches representative data for an address from a civic-information API
//! and flattens it into [`Representative`] records.
//!
//! # Architecture
//!
//! - [`CivicApiClient`] - Trait defining the lookup operation
//! - [`HttpCivicClient`] - Real HTTP implementation using reqwest
//! - [`mock::MockCivicClient`] - Mock for unit tests (behind `test-utils` feature)
//! - [`normalize`] - Turns the raw `offices`/`officials` payload into records
//! - [`Tier::classify`] - Maps an office title to federal, state or local
//!
//! # Example
//!
//! ```ignore
//! use rf_civic::{normalize, CivicApiClient, HttpCivicClient};
//!
//! let client = HttpCivicClient::new(rf_civic::DEFAULT_BASE_URL, "my-api-key");
//! let payload = client.representatives("90210").await?;
//! for rep in normalize(&payload) {
//!     println!("{} ({}) - {}", rep.name, rep.party, rep.tier);
//! }
//! ```

mod client;
mod normalize;
mod record;
mod tier;
mod types;

pub use client::{CivicApiClient, CivicApiError, HttpCivicClient, DEFAULT_BASE_URL};
pub use normalize::{flatten, normalize};
pub use record::{Platform, PostalAddress, Representative, SocialChannel, UNKNOWN_PARTY};
pub use tier::{ParseTierError, Tier};
pub use types::{RawChannel, RawOffice, RawOfficial};

#[cfg(any(test, feature = "test-utils"))]
pub use client::mock;
