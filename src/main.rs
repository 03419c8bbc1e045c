use clap::Parser;
use moodring::core::config::{self, ProviderKind};
use moodring::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "moodring", about = "Terminal sentiment analyzer")]
struct Args {
    /// Sentiment provider to use
    #[arg(short, long, value_enum)]
    provider: Option<ProviderKind>,

    /// Base URL of the sentiment web service
    #[arg(long)]
    backend_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to moodring.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("moodring.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    // A malformed config file aborts before the TUI takes over the screen.
    let file_config = match config::load_config() {
        Ok(file_config) => file_config,
        Err(e) => {
            eprintln!("moodring: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.provider, args.backend_url.as_deref());

    log::info!("moodring starting up with provider: {:?}", resolved.provider);

    tui::run(resolved)
}
