pub mod classifier;
pub mod config;
pub mod estimator;
pub mod fetcher;
pub mod render;
pub mod retry;
pub mod rotation;
pub mod ticker;
pub mod types;
pub mod utils;
pub mod wall;

pub use classifier::SiteBuckets;
pub use config::{RotationPolicy, WallConfig};
pub use estimator::DurationEstimator;
pub use fetcher::{FeedSource, HttpFeedSource};
pub use render::{ConsoleRenderer, WallRenderer};
pub use retry::RetryController;
pub use rotation::{RotationCursor, Step};
pub use ticker::ProgressTicker;
pub use types::*;
pub use wall::{CycleOutcome, NewsWall};
