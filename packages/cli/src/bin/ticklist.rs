use std::net::IpAddr;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use ticklist_cli::config::Config;
use tracing::error;

#[derive(Parser)]
#[command(name = "ticklist")]
#[command(about = "Ticklist - todo management HTTP service")]
#[command(version)]
struct Cli {
    /// Address to bind (overrides TICKLIST_HOST)
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on (overrides TICKLIST_PORT)
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    port: Option<u16>,

    /// SQLite database file (overrides TICKLIST_DATABASE_PATH)
    #[arg(long)]
    database: Option<PathBuf>,

    /// Do not insert demo todos into an empty database
    #[arg(long)]
    no_seed: bool,
}

impl Cli {
    fn apply(self, mut config: Config) -> Config {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(database) = self.database {
            config.database_path = database;
        }
        if self.no_seed {
            config.seed_demo_data = false;
        }
        config
    }
}

#[tokio::main]
async fn main() {
    // Load .env file
    dotenvy::dotenv().ok();
    ticklist_cli::init_tracing();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => cli.apply(config),
        Err(e) => {
            error!("Invalid configuration: {}", e);
            process::exit(2);
        }
    };

    if let Err(e) = ticklist_cli::run_server(config).await {
        error!("Server error: {:#}", e);
        process::exit(1);
    }
}
