use crate::render::WallRenderer;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// Emits a 0..=100 progress signal at a fixed sub-interval while an article
/// is on display.
///
/// At most one ticker task is live at a time: starting a new one aborts the
/// previous task, so a stale article can never keep reporting progress. The
/// ticker only renders; the wall's own advance timer decides when the next
/// article appears.
#[derive(Debug, Default)]
pub struct ProgressTicker {
    handle: Option<JoinHandle<()>>,
}

impl ProgressTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start<R: WallRenderer + 'static>(
        &mut self,
        duration: Duration,
        interval: Duration,
        renderer: Arc<R>,
    ) {
        self.cancel();

        let handle = tokio::spawn(async move {
            let mut elapsed = Duration::ZERO;
            loop {
                tokio::time::sleep(interval).await;
                elapsed += interval;
                if elapsed > duration {
                    break;
                }
                let percent = (elapsed.as_secs_f64() / duration.as_secs_f64() * 100.0).min(100.0);
                trace!("Article progress {:.1}%", percent);
                renderer.render_progress(percent);
            }
        });
        self.handle = Some(handle);
    }

    /// Stop the live ticker, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}
