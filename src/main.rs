use clap::Parser;
use newswall::{ConsoleRenderer, HttpFeedSource, NewsWall, RotationPolicy, WallConfig};
use tracing::info;

/// Headless driver for an unattended news-wall display.
#[derive(Parser, Debug)]
#[command(name = "newswall", version, about)]
struct Args {
    /// Spider API domain serving the article feed
    #[arg(long)]
    api_domain: Option<String>,

    /// Skip the metadata bootstrap and use the built-in endpoints
    #[arg(long)]
    no_metadata: bool,

    /// Wrap back to the first site after a full cycle instead of refetching
    #[arg(long)]
    wrap_around: bool,

    /// Estimate display time from raw content length, skipping normalization
    #[arg(long)]
    raw_length: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let mut config = WallConfig::default();
    if let Some(domain) = args.api_domain {
        config.api_domain = domain;
        // An explicit domain should not be overwritten by the metadata fetch.
        config.metadata_url = None;
    }
    if args.no_metadata {
        config.metadata_url = None;
    }
    if args.wrap_around {
        config.rotation_policy = RotationPolicy::WrapAround;
    }
    if args.raw_length {
        config.normalize_content = false;
    }

    info!("Starting news wall against {}", config.api_domain);

    let source = HttpFeedSource::new(&config.user_agent, config.fetch_timeout);
    let mut wall = NewsWall::new(config, source, ConsoleRenderer);
    wall.run().await;
}
