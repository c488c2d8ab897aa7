use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder shown where a field is missing or holds an unknown value.
pub const PLACEHOLDER: &str = "—";

/// One API-product listing as fetched from the remote store.
///
/// The identifier is unique and immutable; every other field is owned and
/// mutated by the remote store. The console only ever holds a read-only
/// snapshot of these rows (plus speculative local deletions), so all fields
/// except `id` stay optional and untyped beyond what display needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductRow {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<String>,
    pub visibility: Option<String>,
    pub thumbnail_url: Option<String>,
    pub service_endpoint_url: Option<String>,
    /// Used only for the store-side descending sort.
    pub created_at: Option<DateTime<Utc>>,
}

/// Product listing status. Presentation-only; the console enforces no
/// transition logic between these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    Draft,
    Preview,
    Public,
    Deprecated,
    Disabled,
}

impl ProductStatus {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "draft" => Some(Self::Draft),
            "preview" => Some(Self::Preview),
            "public" => Some(Self::Public),
            "deprecated" => Some(Self::Deprecated),
            "disabled" => Some(Self::Disabled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Draft => "Draft",
            Self::Preview => "Preview",
            Self::Public => "Public",
            Self::Deprecated => "Deprecated",
            Self::Disabled => "Disabled",
        }
    }
}

/// Product listing visibility. Display-only, shown verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Catalog,
    Unlisted,
    Invited,
    Internal,
}

impl Visibility {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "catalog" => Some(Self::Catalog),
            "unlisted" => Some(Self::Unlisted),
            "invited" => Some(Self::Invited),
            "internal" => Some(Self::Internal),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Unlisted => "unlisted",
            Self::Invited => "invited",
            Self::Internal => "internal",
        }
    }
}

/// Human label for a raw status value; unknown or missing values degrade to
/// the placeholder glyph instead of failing.
pub fn status_label(raw: Option<&str>) -> &'static str {
    raw.and_then(ProductStatus::parse)
        .map(|status| status.label())
        .unwrap_or(PLACEHOLDER)
}

/// Display value for a raw visibility; known values are shown verbatim.
pub fn visibility_label(raw: Option<&str>) -> &'static str {
    raw.and_then(Visibility::parse)
        .map(|visibility| visibility.as_str())
        .unwrap_or(PLACEHOLDER)
}

/// Host component of a service endpoint URL, for display.
pub fn endpoint_host(url: &str) -> Option<&str> {
    let rest = url.split_once("://").map(|(_, rest)| rest).unwrap_or(url);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or("");
    let host = authority
        .rsplit_once('@')
        .map(|(_, host)| host)
        .unwrap_or(authority);
    let host = host.split(':').next().unwrap_or("");
    if host.is_empty() { None } else { Some(host) }
}
