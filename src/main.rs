use anyhow::Result;
use clap::Parser;
use profile_doctor::config::Config;
use profile_doctor::logger::Logger;
use profile_doctor::ui;
use std::path::PathBuf;

/// Terminal dashboard for diagnosing and repairing user profiles
#[derive(Debug, Parser)]
#[command(name = "profile-doctor", version, about)]
struct Cli {
    /// Use this configuration file instead of the default lookup
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    generate_config: Option<Option<PathBuf>>,

    /// Also write logs to a file
    #[arg(long)]
    log: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(target) = cli.generate_config {
        let path = match target {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    if cli.log {
        config.logging.enabled = true;
    }

    let logger = Logger::new();
    if let Some(path) = logger.init(&config.logging)? {
        eprintln!("Logging to {}", path.display());
    }
    log::info!("starting Profile Doctor v{}", env!("CARGO_PKG_VERSION"));

    ui::run_app(config, logger).await
}
