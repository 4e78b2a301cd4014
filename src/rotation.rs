use crate::config::RotationPolicy;
use tracing::debug;

/// Outcome of one cursor advance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Show the article at (site, article). `site_changed` marks an outer
    /// transition (new site name, fresh article list); `scrolled` marks an
    /// in-site advance past index 0, the "scroll up one" visual.
    Display {
        site: usize,
        article: usize,
        site_changed: bool,
        scrolled: bool,
    },
    /// The rotation cannot continue on current data: either a full cycle
    /// completed under `RefetchOnWrap`, or the loaded shape went empty or
    /// stale. The caller fetches a fresh feed and restarts.
    Refresh,
}

/// Cyclic two-level cursor over (site index, article index).
///
/// Pure state machine: holds only the bucket sizes of the currently loaded
/// feed, never the articles themselves, and performs no I/O. All timing is
/// the caller's concern. Out-of-range conditions fail soft to `Step::Refresh`
/// rather than panicking.
#[derive(Debug, Clone, Default)]
pub struct RotationCursor {
    site_sizes: Vec<usize>,
    site: usize,
    article: Option<usize>,
    started: bool,
}

impl RotationCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a freshly classified feed shape and rewind to just before the
    /// first article, so the next `advance` lands on (0, 0).
    pub fn start(&mut self, site_sizes: Vec<usize>) {
        debug!("Rotation cursor reset over {} sites", site_sizes.len());
        self.site_sizes = site_sizes;
        self.site = 0;
        self.article = None;
        self.started = true;
    }

    /// Current (site, article) position once the first advance has happened.
    pub fn position(&self) -> Option<(usize, usize)> {
        self.article.map(|a| (self.site, a))
    }

    /// Move to the next article, walking sites cyclically.
    pub fn advance(&mut self, policy: RotationPolicy) -> Step {
        if !self.started {
            return Step::Refresh;
        }
        let total: usize = self.site_sizes.iter().sum();
        if total == 0 || self.site >= self.site_sizes.len() {
            // Empty or stale shape, e.g. a feed with zero eligible sources.
            self.started = false;
            return Step::Refresh;
        }

        let next = self.article.map_or(0, |a| a + 1);
        if next < self.site_sizes[self.site] {
            self.article = Some(next);
            return Step::Display {
                site: self.site,
                article: next,
                site_changed: false,
                scrolled: next != 0,
            };
        }

        // Current site exhausted; find the next non-empty site.
        let mut site = self.site;
        loop {
            site += 1;
            if site == self.site_sizes.len() {
                match policy {
                    RotationPolicy::RefetchOnWrap => {
                        // Full cycle done; hand control back for a refetch.
                        self.started = false;
                        return Step::Refresh;
                    }
                    RotationPolicy::WrapAround => site = 0,
                }
            }
            // total > 0 guarantees this terminates.
            if self.site_sizes[site] > 0 {
                break;
            }
        }

        self.site = site;
        self.article = Some(0);
        Step::Display {
            site,
            article: 0,
            site_changed: true,
            scrolled: false,
        }
    }
}
