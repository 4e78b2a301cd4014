use crate::types::Article;
use crate::utils;
use tracing::{info, warn};

/// Outbound side-effect contract to the display collaborator.
///
/// The core never touches a screen itself; everything visual goes through
/// this trait. Methods take `&self` because rendering is a side effect, and
/// implementations must be `Send + Sync` so the progress ticker task can
/// share the renderer with the wall loop.
pub trait WallRenderer: Send + Sync {
    /// Show an article. `qr_payload` is the (possibly shortened) URL the
    /// display encodes as a QR code next to the text.
    fn render_article(&self, article: &Article, qr_payload: &str);

    /// Update the current-site heading.
    fn render_site_name(&self, name: &str);

    /// Rebuild the site navigation from the rotation order.
    fn render_site_list(&self, names: &[String]);

    /// Rebuild the per-site article list.
    fn render_article_list(&self, articles: &[Article]);

    /// Countdown progress for the article on display, 0..=100.
    fn render_progress(&self, percent: f64);

    /// Show or hide the load-error indicator.
    fn render_load_error(&self, visible: bool);

    /// Seconds until the next retry attempt, once per second while waiting.
    fn render_retry_countdown(&self, seconds_remaining: u64);

    /// Wall-clock time of the last successful feed fetch.
    fn render_last_fetch_time(&self, formatted: &str);

    /// Scroll the article list up by one entry (in-site advance).
    fn scroll_article_list(&self) {}

    /// Scroll the site navigation up by one entry (site change).
    fn scroll_site_list(&self) {}
}

/// Headless renderer for running the wall without a display: every side
/// effect becomes a log line.
#[derive(Debug, Default)]
pub struct ConsoleRenderer;

impl WallRenderer for ConsoleRenderer {
    fn render_article(&self, article: &Article, qr_payload: &str) {
        info!(
            "=== {} [{} {}] {}",
            article.title,
            article.source,
            utils::time::publication_time_string(article.ctime),
            qr_payload
        );
        for paragraph in article.content.split('\n') {
            info!("    {}", paragraph);
        }
    }

    fn render_site_name(&self, name: &str) {
        info!("Now showing: {}", name);
    }

    fn render_site_list(&self, names: &[String]) {
        info!("Rotation order: {}", names.join(" > "));
    }

    fn render_article_list(&self, articles: &[Article]) {
        for article in articles {
            info!("  - {}", article.title);
        }
    }

    fn render_progress(&self, _percent: f64) {
        // The console has no countdown dial.
    }

    fn render_load_error(&self, visible: bool) {
        if visible {
            warn!("Feed load failed; waiting to retry");
        }
    }

    fn render_retry_countdown(&self, seconds_remaining: u64) {
        info!("Retrying in {}s", seconds_remaining);
    }

    fn render_last_fetch_time(&self, formatted: &str) {
        info!("Feed updated at {}", formatted);
    }
}
