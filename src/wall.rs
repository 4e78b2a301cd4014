use crate::classifier::SiteBuckets;
use crate::config::WallConfig;
use crate::estimator::DurationEstimator;
use crate::fetcher::FeedSource;
use crate::render::WallRenderer;
use crate::retry::RetryController;
use crate::rotation::{RotationCursor, Step};
use crate::ticker::ProgressTicker;
use crate::types::{FeedPayload, Result, WallError};
use crate::utils;
use chrono::Local;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, info, warn};

/// What a single fetch-and-rotate cycle ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// Feed loaded and a full rotation ran; the next cycle refetches.
    Rotated,
    /// Fetch failed (or yielded nothing displayable); the backoff countdown
    /// already ran and the next cycle retries.
    RetryScheduled,
}

/// The wall itself: owns rotation state, retry state and the classified
/// buckets, and funnels every mutation through one task.
///
/// No lock guards the state because only this task ever touches it; the
/// progress ticker is the single spawned helper and it only renders. This
/// preserves the single-writer discipline the timer-chain design relies on.
pub struct NewsWall<S, R> {
    config: WallConfig,
    source: S,
    renderer: Arc<R>,
    buckets: SiteBuckets,
    cursor: RotationCursor,
    retry: RetryController,
    estimator: DurationEstimator,
    ticker: ProgressTicker,
}

impl<S, R> NewsWall<S, R>
where
    S: FeedSource,
    R: WallRenderer + 'static,
{
    pub fn new(config: WallConfig, source: S, renderer: R) -> Self {
        let estimator = DurationEstimator::from_config(&config);
        let retry = RetryController::from_config(&config);

        Self {
            config,
            source,
            renderer: Arc::new(renderer),
            buckets: SiteBuckets::default(),
            cursor: RotationCursor::new(),
            retry,
            estimator,
            ticker: ProgressTicker::new(),
        }
    }

    /// Run unattended for the process lifetime.
    pub async fn run(&mut self) {
        self.init_metadata().await;
        loop {
            self.run_cycle().await;
        }
    }

    /// One turn of the feed-refresh state machine: fetch, then either rotate
    /// through the whole feed or run the retry countdown.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        let feed_url = self.config.feed_url();

        let outcome = match self.source.fetch_feed(&feed_url).await {
            Ok(payload) => self.begin_rotation(payload).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => CycleOutcome::Rotated,
            Err(e) => {
                warn!("Feed request failed: {}", e);
                self.schedule_retry().await;
                CycleOutcome::RetryScheduled
            }
        }
    }

    /// Effective configuration, after any metadata overlay.
    pub fn config(&self) -> &WallConfig {
        &self.config
    }

    /// Best-effort metadata bootstrap: backend may relocate the spider API or
    /// the short-URL service; failure keeps the built-in defaults.
    pub async fn init_metadata(&mut self) {
        let Some(url) = self.config.metadata_url.clone() else {
            return;
        };
        match self.source.fetch_metadata(&url).await {
            Ok(meta) => {
                info!(
                    "Got metadata: api {}, short URLs via {}",
                    meta.api_domain, meta.short_url_domain
                );
                self.config.apply_metadata(meta);
            }
            Err(e) => debug!("Metadata fetch failed, using fallback values: {}", e),
        }
    }

    /// Classify a fresh payload and rotate through it. Returns once the
    /// cursor asks for a refresh; under `WrapAround` this never returns.
    async fn begin_rotation(&mut self, payload: FeedPayload) -> Result<()> {
        let mut buckets = SiteBuckets::classify(payload.articles);
        for key in &self.config.excluded_sources {
            buckets.exclude_source(key);
        }
        if buckets.is_empty() {
            return Err(WallError::EmptySiteList);
        }

        self.retry.reset();
        self.renderer.render_load_error(false);
        self.renderer
            .render_last_fetch_time(&utils::time::fetch_time_string(Local::now()));
        self.renderer.render_site_list(buckets.site_list());

        // The first site's surroundings are drawn up front; the first advance
        // then lands on its article 0 without a scroll.
        let first_key = &buckets.site_list()[0];
        self.renderer
            .render_site_name(self.config.source_name(first_key));
        if let Some(articles) = buckets.articles(first_key) {
            self.renderer.render_article_list(articles);
        }

        self.cursor.start(buckets.site_sizes());
        self.buckets = buckets;
        self.rotate().await;
        Ok(())
    }

    /// Walk the cursor until it requests a refresh, pacing each article by
    /// its estimated reading time.
    async fn rotate(&mut self) {
        loop {
            let step = self.cursor.advance(self.config.rotation_policy);
            match step {
                Step::Refresh => {
                    self.ticker.cancel();
                    info!("Rotation complete, requesting fresh feed");
                    return;
                }
                Step::Display {
                    site,
                    article,
                    site_changed,
                    scrolled,
                } => {
                    // The buckets were sized together with the cursor, so the
                    // lookups only fail if the shapes went out of sync; that
                    // is handled as a refresh, not a crash.
                    let Some(articles) = self.buckets.site_articles(site) else {
                        self.ticker.cancel();
                        return;
                    };
                    let Some(current) = articles.get(article) else {
                        self.ticker.cancel();
                        return;
                    };

                    if site_changed {
                        self.renderer.scroll_site_list();
                        let key = &self.buckets.site_list()[site];
                        self.renderer.render_site_name(self.config.source_name(key));
                        self.renderer.render_article_list(articles);
                    } else if scrolled {
                        self.renderer.scroll_article_list();
                    }

                    let qr_payload = utils::short_url::display_url(current, &self.config);
                    debug!(
                        "Switching to site {} article {}: {}",
                        site, article, current.title
                    );
                    self.renderer.render_article(current, &qr_payload);

                    let duration = self.estimator.duration_for(current);
                    info!("Next article in {}ms", duration.as_millis());
                    self.ticker.start(
                        duration,
                        self.config.progress_update_interval,
                        Arc::clone(&self.renderer),
                    );
                    sleep(duration).await;
                }
            }
        }
    }

    /// Failure path: show the error, wait out the backoff with a per-second
    /// countdown, then let the caller refetch.
    async fn schedule_retry(&mut self) {
        self.ticker.cancel();
        self.renderer.render_load_error(true);

        let wait = self.retry.next_wait();
        info!("Retrying feed in {}ms", wait.as_millis());

        let mut remaining_ms = wait.as_millis() as i64;
        loop {
            sleep(Duration::from_secs(1)).await;
            remaining_ms -= 1000;
            if remaining_ms <= 0 {
                return;
            }
            self.renderer
                .render_retry_countdown((remaining_ms / 1000) as u64);
        }
    }
}
