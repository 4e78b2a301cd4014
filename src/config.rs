use crate::types::WallMetadata;
use std::collections::HashMap;
use std::time::Duration;

/// What happens when the cursor walks past the last article of the last site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationPolicy {
    /// Wrap back to site 0 and keep rotating the same feed indefinitely.
    WrapAround,
    /// Finish the cycle by requesting a fresh feed, so content never goes
    /// stale. This is the default.
    RefetchOnWrap,
}

#[derive(Debug, Clone)]
pub struct WallConfig {
    /// Spider backend serving the article feed.
    pub api_domain: String,
    /// Metadata endpoint consulted once at startup; `None` skips the lookup.
    pub metadata_url: Option<String>,
    /// Short-URL service host for QR payloads.
    pub short_url_domain: String,
    /// Whether short URLs carry the `g/` path infix.
    pub short_url_infixed: bool,

    pub article_min_duration: Duration,
    pub article_max_duration: Duration,
    /// Normalized character count that maps to `article_standard_duration`.
    pub article_standard_length: usize,
    pub article_standard_duration: Duration,
    /// Run the normalize-then-scale heuristic; `false` uses the raw character
    /// count like the simpler estimator variants.
    pub normalize_content: bool,

    pub progress_update_interval: Duration,

    pub retry_initial_wait: Duration,
    pub retry_backoff_multiplier: f64,
    /// Ceiling for backoff growth. `None` reproduces the reference behavior
    /// of unbounded growth.
    pub retry_max_wait: Option<Duration>,

    pub rotation_policy: RotationPolicy,

    /// Source key -> human-readable site name.
    pub source_names: HashMap<String, String>,
    /// Source keys dropped after classification as a content policy.
    pub excluded_sources: Vec<String>,

    pub user_agent: String,
    pub fetch_timeout: Duration,
}

impl Default for WallConfig {
    fn default() -> Self {
        let source_names = [
            ("dm", "数字媒体学院"),
            ("jw", "教务处"),
            ("xinwen", "江大新闻网"),
            ("scc", "江大就业信息网"),
            ("jdcy", "大学生创业网"),
            ("gs", "研究生院"),
            ("hq", "江大后勤信息网"),
            ("nic", "信息建管中心"),
            ("hqc", "江大后勤管理处"),
            ("bwch", "江大保卫处"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        Self {
            api_domain: "spider.api.jnrain.com".to_string(),
            metadata_url: Some("https://meta.api.jnrain.com/campuspiders.json".to_string()),
            short_url_domain: "spurl.jnrain.com".to_string(),
            short_url_infixed: false,
            article_min_duration: Duration::from_millis(7000),
            article_max_duration: Duration::from_millis(35000),
            article_standard_length: 600,
            article_standard_duration: Duration::from_millis(30000),
            normalize_content: true,
            progress_update_interval: Duration::from_millis(500),
            retry_initial_wait: Duration::from_millis(4000),
            retry_backoff_multiplier: 1.25,
            retry_max_wait: None,
            rotation_policy: RotationPolicy::RefetchOnWrap,
            source_names,
            excluded_sources: vec!["xinwen".to_string()],
            user_agent: "newswall/0.1".to_string(),
            fetch_timeout: Duration::from_secs(30),
        }
    }
}

impl WallConfig {
    /// Feed endpoint derived from the current API domain.
    pub fn feed_url(&self) -> String {
        format!("https://{}/v1/feed/week/", self.api_domain)
    }

    /// Display name for a source key, falling back to the key itself.
    pub fn source_name<'a>(&'a self, key: &'a str) -> &'a str {
        self.source_names.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Overlay backend-provided metadata. Only called after a successful
    /// metadata fetch; failures leave the defaults untouched.
    pub fn apply_metadata(&mut self, meta: WallMetadata) {
        self.api_domain = meta.api_domain;
        self.short_url_domain = meta.short_url_domain;
        self.short_url_infixed = meta.short_url_infixed;
    }
}
