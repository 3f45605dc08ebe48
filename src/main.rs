use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

use mixer::core::config;
use mixer::tui;

#[derive(Parser)]
#[command(name = "mixer", about = "Terminal party planner browser")]
struct Args {
    /// API base URL (overrides config file and MIXER_BASE_URL)
    #[arg(long)]
    base_url: Option<String>,

    /// Cohort path segment scoping all API calls (overrides config file
    /// and MIXER_COHORT)
    #[arg(long)]
    cohort: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to mixer.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("mixer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Falling back to default config: {e}");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        args.base_url.as_deref(),
        args.cohort.as_deref(),
    );

    log::info!(
        "Mixer starting up (base_url={}, cohort={})",
        resolved.base_url,
        resolved.cohort
    );

    tui::run(resolved)
}
