/// Time formatting for the display.
pub mod time {
    use chrono::{DateTime, Local, LocalResult, TimeZone, Timelike};

    /// Format an article's publication timestamp for display.
    ///
    /// A timestamp landing exactly on midnight is read as "the source only
    /// provides day precision" (nobody publishes at 00:00:00 sharp), so the
    /// time of day is omitted.
    pub fn publication_time_string(ctime: i64) -> String {
        let date = match Local.timestamp_opt(ctime, 0) {
            LocalResult::Single(d) => d,
            _ => return String::new(),
        };

        let date_str = date.format("%Y-%m-%d").to_string();
        if date.hour() == 0 && date.minute() == 0 && date.second() == 0 {
            return date_str;
        }

        format!("{} {}", date_str, date.format("%H:%M"))
    }

    /// Format the wall-clock moment of a successful feed fetch.
    pub fn fetch_time_string(at: DateTime<Local>) -> String {
        at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Short-URL composition for QR payloads.
pub mod short_url {
    use crate::config::WallConfig;
    use crate::types::Article;

    /// URL the display encodes for an article: the composed short URL when a
    /// tag is present, the long one otherwise.
    pub fn display_url(article: &Article, config: &WallConfig) -> String {
        match &article.short_url {
            Some(tag) => {
                let infix = if config.short_url_infixed { "g/" } else { "" };
                format!("http://{}/{}{}", config.short_url_domain, infix, tag)
            }
            None => article.url.clone(),
        }
    }
}
