use clap::Parser;
use hueshift::cli::{Cli, Command};
use hueshift::config::{self, AppConfig};
use hueshift::{app, logger};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match config::load_config(cli.config.as_deref()).into_validated() {
        Ok(config) => config,
        // init must still work when the existing configuration is broken
        Err(e) if matches!(cli.command, Command::Init) => {
            eprintln!("{e}");
            AppConfig::default()
        }
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logger::setup_logger(config.logging(), cli.log_level.as_deref()) {
        eprintln!("Failed to initialize logger: {e}");
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = app::run(&cli.command, &config, &mut stdout).await {
        log::error!("{e}");
        std::process::exit(1);
    }
}
