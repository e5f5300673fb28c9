#![warn(unused_imports)]
#![deny(clippy::clone_on_copy)]
#![deny(clippy::style)]

use anyhow::Context;
use clap::Parser;
use kafka_admin::{AdminClient, ConnectionSettings};
use kafka_admin_cli::app_config::AppConfig;
use kafka_admin_cli::cli::{run, Cli};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();

    let log_level = std::env::var("RUST_LOG").unwrap_or("info".to_owned());
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(log_level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(filter),
        )
        .init();

    let config = AppConfig::build().context("While building app config")?;
    let settings =
        ConnectionSettings::try_from(&config).context("While building connection settings")?;
    let client = AdminClient::create(settings)
        .context("While creating admin client")?
        .with_default_retention_ms(config.retention_ms);

    let output = run(cli.command, &client).await?;
    if !output.is_null() {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("While formatting output")?
        );
    }

    Ok(())
}
