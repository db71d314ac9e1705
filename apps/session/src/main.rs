mod cli;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use talent_session::config::Config;
use talent_session::session::{SessionModel, SimulatedIdentityProvider};
use talent_session::store::FileStore;

use crate::cli::{Cli, ConsoleNavigator, ConsoleSink};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("talent_session={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    debug!("talent-session v{}", env!("CARGO_PKG_VERSION"));

    let store = FileStore::open(&config.store_dir)?;
    let mut session = SessionModel::builder()
        .storage_key(config.storage_key.clone())
        .store(store)
        .provider(SimulatedIdentityProvider::new(config.simulated_latency))
        .navigator(ConsoleNavigator)
        .notifier(ConsoleSink)
        .build();

    cli::run(cli.command, &mut session).await
}
