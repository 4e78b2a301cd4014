use serde::{Deserialize, Serialize};

/// A single news article as delivered by the spider backend.
///
/// Immutable once received; owned by the classifier's buckets and borrowed by
/// the rotation loop while on display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    /// Plain text, paragraphs separated by `\n`.
    pub content: String,
    /// Source site key, e.g. "jw". Mapped to a display name via config.
    pub source: String,
    /// Publication time, unix seconds.
    pub ctime: i64,
    pub url: String,
    /// Short-URL tag; the full short URL is composed from config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_url: Option<String>,
}

/// Wire shape of the feed endpoint: `{ "l": [Article, ...] }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedPayload {
    #[serde(rename = "l")]
    pub articles: Vec<Article>,
}

/// Wire shape of the optional metadata endpoint. Best-effort; any field the
/// backend omits keeps its built-in default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WallMetadata {
    pub api_domain: String,
    pub short_url_domain: String,
    pub short_url_infixed: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum WallError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Feed produced no displayable sources")]
    EmptySiteList,

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, WallError>;
