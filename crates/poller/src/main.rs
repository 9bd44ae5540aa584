use tracing_subscriber::EnvFilter;

use review_common::config::AppConfig;
use review_notifier::{Notifier, TelegramChannel};
use review_poller::client::ApiClient;
use review_poller::clock::SystemClock;
use review_poller::poller::HomeworkPoller;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("review_poller=debug,review_notifier=debug"));

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if std::env::var("LOG_FORMAT").is_ok_and(|format| format == "json") {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("Homework review poller starting...");

    // Missing credentials are fatal; nothing is polled without them.
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration, exiting");
            return Err(e.into());
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let api = ApiClient::new(&config)?;
    let channel = TelegramChannel::from_config(&config)?;
    let mut poller = HomeworkPoller::new(
        api,
        Notifier::new(channel),
        SystemClock,
        config.retry_period(),
    );

    tokio::select! {
        _ = poller.run() => {}
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Received shutdown signal, stopping gracefully...");
        }
    }

    tracing::info!("Homework review poller stopped.");
    Ok(())
}
