//! Flat representative records produced by the normalizer.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tier::Tier;
use crate::types::{RawChannel, RawOffice, RawOfficial};

/// Party shown when the source omits one.
pub const UNKNOWN_PARTY: &str = "Unknown";

/// One elected official in one office.
///
/// Two records with the same `name` and `office` are the same representative
/// for favorites purposes, even if their contact details differ.
///
/// `tier` is written out but never read back: deserializing always
/// reclassifies `office`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", from = "StoredRepresentative")]
pub struct Representative {
    pub name: String,
    pub office: String,
    pub party: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub phones: Vec<String>,
    pub emails: Vec<String>,
    pub urls: Vec<String>,
    pub social_channels: Vec<SocialChannel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_address: Option<PostalAddress>,
    pub tier: Tier,
    pub division_id: String,
}

/// Serialized form of [`Representative`]; any stored `tier` is ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRepresentative {
    name: String,
    office: String,
    #[serde(default = "default_party")]
    party: String,
    #[serde(default)]
    photo_url: Option<String>,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    emails: Vec<String>,
    #[serde(default)]
    urls: Vec<String>,
    #[serde(default)]
    social_channels: Vec<SocialChannel>,
    #[serde(default)]
    postal_address: Option<PostalAddress>,
    #[serde(default)]
    division_id: String,
}

impl From<StoredRepresentative> for Representative {
    fn from(stored: StoredRepresentative) -> Self {
        Self {
            tier: Tier::classify(&stored.office),
            name: stored.name,
            office: stored.office,
            party: stored.party,
            photo_url: stored.photo_url,
            phones: stored.phones,
            emails: stored.emails,
            urls: stored.urls,
            social_channels: stored.social_channels,
            postal_address: stored.postal_address,
            division_id: stored.division_id,
        }
    }
}

fn default_party() -> String {
    UNKNOWN_PARTY.to_string()
}

impl Representative {
    /// Create a bare record; the tier is derived from `office`.
    pub fn new(name: impl Into<String>, office: impl Into<String>) -> Self {
        let office = office.into();
        Self {
            name: name.into(),
            tier: Tier::classify(&office),
            office,
            party: default_party(),
            photo_url: None,
            phones: Vec::new(),
            emails: Vec::new(),
            urls: Vec::new(),
            social_channels: Vec::new(),
            postal_address: None,
            division_id: String::new(),
        }
    }

    /// Build a record for `official` holding `office`.
    #[must_use]
    pub fn from_source(office: &RawOffice, official: &RawOfficial) -> Self {
        Self {
            name: official.name.clone(),
            office: office.name.clone(),
            party: official
                .party
                .clone()
                .filter(|party| !party.is_empty())
                .unwrap_or_else(default_party),
            photo_url: official.photo_url.clone().filter(|url| !url.is_empty()),
            phones: official.phones.clone(),
            emails: official.emails.clone(),
            urls: official.urls.clone(),
            social_channels: official.channels.iter().map(SocialChannel::from).collect(),
            postal_address: official.address.first().cloned(),
            tier: Tier::classify(&office.name),
            division_id: office.division_id.clone().unwrap_or_default(),
        }
    }

    /// Whether this record has the given (name, office) identity.
    #[must_use]
    pub fn is_same(&self, name: &str, office: &str) -> bool {
        self.name == name && self.office == office
    }

    #[must_use]
    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    #[must_use]
    pub fn primary_phone(&self) -> Option<&str> {
        self.phones.first().map(String::as_str)
    }

    #[must_use]
    pub fn website(&self) -> Option<&str> {
        self.urls.first().map(String::as_str)
    }

    /// Up to two initials, used in place of a missing photo.
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .collect()
    }
}

/// Known social media platforms.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Platform {
    Twitter,
    Facebook,
    YouTube,
    Instagram,
    /// Any platform name the source reports that is not listed above.
    Other(String),
}

impl Platform {
    #[must_use]
    pub const fn icon(&self) -> &'static str {
        match self {
            Self::Twitter => "🐦",
            Self::Facebook => "👥",
            Self::YouTube => "📺",
            Self::Instagram => "📷",
            Self::Other(_) => "🔗",
        }
    }

    /// Public profile URL for `handle`, if the platform is known.
    #[must_use]
    pub fn profile_url(&self, handle: &str) -> Option<String> {
        let base = match self {
            Self::Twitter => "https://twitter.com",
            Self::Facebook => "https://facebook.com",
            Self::YouTube => "https://youtube.com",
            Self::Instagram => "https://instagram.com",
            Self::Other(_) => return None,
        };
        Some(format!("{base}/{handle}"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::YouTube => "YouTube",
            Self::Instagram => "Instagram",
            Self::Other(name) => name,
        }
    }
}

impl From<&str> for Platform {
    fn from(value: &str) -> Self {
        match value {
            "Twitter" => Self::Twitter,
            "Facebook" => Self::Facebook,
            "YouTube" => Self::YouTube,
            "Instagram" => Self::Instagram,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for Platform {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<Platform> for String {
    fn from(value: Platform) -> Self {
        match value {
            Platform::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A representative's account on a social platform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialChannel {
    pub platform: Platform,
    pub handle: String,
}

impl SocialChannel {
    #[must_use]
    pub fn profile_url(&self) -> Option<String> {
        self.platform.profile_url(&self.handle)
    }
}

impl From<&RawChannel> for SocialChannel {
    fn from(channel: &RawChannel) -> Self {
        Self {
            platform: Platform::from(channel.kind.as_str()),
            handle: channel.id.clone(),
        }
    }
}

/// Mailing address; every line is optional in the source data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line3: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
}

impl fmt::Display for PostalAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = [&self.line1, &self.line2, &self.line3]
            .into_iter()
            .filter_map(|line| line.as_deref())
            .collect::<Vec<_>>()
            .join(", ");
        let locality = [&self.city, &self.state, &self.zip]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect::<Vec<_>>()
            .join(" ");

        match (street.is_empty(), locality.is_empty()) {
            (false, false) => write!(f, "{street}, {locality}"),
            (false, true) => f.write_str(&street),
            _ => f.write_str(&locality),
        }
    }
}
