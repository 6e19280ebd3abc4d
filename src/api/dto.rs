//! Data Transfer Objects
//!
//! Request and response types for the ModernVPN backend.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================
// AUTH DTOs
// ============================================

/// Email/password pair sent to login and account creation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Login response
///
/// `access_token` is canonical; `token` is a deprecated alias still
/// emitted by older deployments.
#[derive(Debug, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl TokenResponse {
    /// The bearer token, preferring the canonical field
    pub fn into_token(self) -> Option<String> {
        self.access_token
            .filter(|t| !t.is_empty())
            .or_else(|| self.token.filter(|t| !t.is_empty()))
    }
}

// ============================================
// USER DTOs
// ============================================

/// Current user record from `GET /users/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub email: String,
    /// Whatever else the backend returns
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

// ============================================
// VPN DTOs
// ============================================

/// A VPN exit server
///
/// Decoding is lenient: ids may be numbers and missing labels decode as
/// empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawServer")]
pub struct ServerDescriptor {
    pub id: String,
    pub region: String,
    pub ip: String,
    pub status: String,
}

impl ServerDescriptor {
    pub fn new(id: &str, region: &str, ip: &str, status: &str) -> Self {
        Self {
            id: id.to_string(),
            region: region.to_string(),
            ip: ip.to_string(),
            status: status.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawServer {
    #[serde(default)]
    id: serde_json::Value,
    #[serde(default)]
    region: serde_json::Value,
    #[serde(default)]
    ip: serde_json::Value,
    #[serde(default)]
    status: serde_json::Value,
}

impl From<RawServer> for ServerDescriptor {
    fn from(raw: RawServer) -> Self {
        ServerDescriptor {
            id: scalar_label(raw.id).unwrap_or_default(),
            region: scalar_label(raw.region).unwrap_or_default(),
            ip: scalar_label(raw.ip).unwrap_or_default(),
            status: scalar_label(raw.status).unwrap_or_default(),
        }
    }
}

/// Text form of a scalar JSON value. Empty strings, null and containers
/// have none.
fn scalar_label(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        serde_json::Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `POST /vpn/assign` body
#[derive(Debug, Serialize)]
pub struct AssignRequest<'a> {
    #[serde(rename = "serverId")]
    pub server_id: &'a str,
}

/// `PATCH /usage` body
#[derive(Debug, Serialize)]
pub struct UsageReport {
    #[serde(rename = "dataUsed")]
    pub data_used: f64,
}

// ============================================
// ADS DTOs
// ============================================

/// Ad identifier; the backend has used both numbers and strings
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AdId {
    Num(i64),
    Text(String),
}

impl fmt::Display for AdId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdId::Num(n) => write!(f, "{}", n),
            AdId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for AdId {
    fn from(n: i64) -> Self {
        AdId::Num(n)
    }
}

impl From<serde_json::Value> for AdId {
    fn from(value: serde_json::Value) -> Self {
        match value.as_i64() {
            Some(n) => AdId::Num(n),
            None => AdId::Text(scalar_label(value).unwrap_or_default()),
        }
    }
}

impl From<&str> for AdId {
    fn from(s: &str) -> Self {
        s.parse::<i64>()
            .map(AdId::Num)
            .unwrap_or_else(|_| AdId::Text(s.to_string()))
    }
}

/// A sponsored ad card
///
/// `payoutRate` is canonical; `payout` and `payout_rate` are deprecated
/// aliases, consulted in that order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawAd")]
pub struct Ad {
    pub id: AdId,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub link: String,
    #[serde(rename = "payoutRate", skip_serializing_if = "Option::is_none")]
    pub payout_rate: Option<String>,
}

#[derive(Deserialize)]
struct RawAd {
    #[serde(default)]
    id: serde_json::Value,
    #[serde(default)]
    title: serde_json::Value,
    #[serde(default)]
    description: serde_json::Value,
    #[serde(default)]
    link: serde_json::Value,
    #[serde(rename = "payoutRate", default)]
    payout_rate_camel: Option<serde_json::Value>,
    #[serde(default)]
    payout: Option<serde_json::Value>,
    #[serde(rename = "payout_rate", default)]
    payout_rate_snake: Option<serde_json::Value>,
}

impl From<RawAd> for Ad {
    fn from(raw: RawAd) -> Self {
        let payout_rate = raw
            .payout_rate_camel
            .and_then(scalar_label)
            .or_else(|| raw.payout.and_then(scalar_label))
            .or_else(|| raw.payout_rate_snake.and_then(scalar_label));

        Ad {
            id: AdId::from(raw.id),
            title: scalar_label(raw.title).unwrap_or_default(),
            description: scalar_label(raw.description),
            link: scalar_label(raw.link).unwrap_or_default(),
            payout_rate,
        }
    }
}

/// Analytics event kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdEventKind {
    Impression,
    Click,
}

/// `POST /ads/event` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdEvent {
    /// Always null; the backend derives the user from the bearer token
    pub user_id: Option<String>,
    pub event_type: AdEventKind,
    pub metadata: AdEventMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdEventMetadata {
    pub ad_id: AdId,
    pub country: String,
}

impl AdEvent {
    pub fn new(kind: AdEventKind, ad: &Ad, country: Country) -> Self {
        Self {
            user_id: None,
            event_type: kind,
            metadata: AdEventMetadata {
                ad_id: ad.id.clone(),
                country: country.code().to_string(),
            },
        }
    }
}

/// Ad targeting countries offered by the widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Country {
    #[default]
    #[serde(rename = "IN")]
    India,
    #[serde(rename = "US")]
    UnitedStates,
    #[serde(rename = "GB")]
    UnitedKingdom,
    #[serde(rename = "DE")]
    Germany,
    #[serde(rename = "JP")]
    Japan,
}

impl Country {
    pub const ALL: [Country; 5] = [
        Country::India,
        Country::UnitedStates,
        Country::UnitedKingdom,
        Country::Germany,
        Country::Japan,
    ];

    /// ISO 3166-1 alpha-2 code
    pub fn code(&self) -> &'static str {
        match self {
            Country::India => "IN",
            Country::UnitedStates => "US",
            Country::UnitedKingdom => "GB",
            Country::Germany => "DE",
            Country::Japan => "JP",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Country::India => "India",
            Country::UnitedStates => "United States",
            Country::UnitedKingdom => "United Kingdom",
            Country::Germany => "Germany",
            Country::Japan => "Japan",
        }
    }
}

impl fmt::Display for Country {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Country::ALL
            .into_iter()
            .find(|c| c.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown country: {}. Use one of: IN, US, GB, DE, JP",
                    s.trim()
                )
            })
    }
}
