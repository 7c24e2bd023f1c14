use clap::Parser;
use holocron::core::config::{self, CliOverrides, HolocronConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "holocron", about = "Browse Star Wars characters from SWAPI")]
struct Args {
    /// SWAPI base URL (defaults to https://swapi.dev/api)
    #[arg(long)]
    base_url: Option<String>,

    /// Page of the character list to open first
    #[arg(short, long)]
    page: Option<u32>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Config decides where the log goes, so load it before the logger exists
    // and replay what it had to say once logging is up.
    let mut notices = Vec::new();
    let (file_config, config_error) = match config::load_config(&mut notices) {
        Ok(c) => (c, None),
        Err(e) => (HolocronConfig::default(), Some(e)),
    };
    let cli = CliOverrides {
        base_url: args.base_url,
        page: args.page,
    };
    let resolved = config::resolve(&file_config, &cli, &mut notices);

    // Initialize file logger. The terminal belongs to the UI.
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    for notice in &notices {
        notice.emit();
    }
    if let Some(e) = config_error {
        log::warn!("Ignoring config file, using defaults: {}", e);
    }

    log::info!(
        "Holocron starting up: base_url={}, start_page={}",
        resolved.base_url,
        resolved.start_page
    );

    holocron::tui::run(resolved)
}
