use clap::Parser;
use roster::Demo;
use roster::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "roster", about = "Terminal people browser built on a pure state machine")]
struct Args {
    /// Demo to run
    #[arg(short, long, value_enum)]
    demo: Option<Demo>,

    /// API root serving /users and /users/{id}
    #[arg(long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Ignoring config file: {e}");
            config::RosterConfig::default()
        }
    };
    let resolved = config::resolve(&file_config, args.demo, args.base_url.as_deref());

    // Initialize file logger - writes to roster.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create("roster.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!(
        "Roster starting up: demo={:?}, base_url={}",
        resolved.demo,
        resolved.base_url
    );

    roster::tui::run(resolved)
}
