use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use share_store::{
    config::{Config, LogFormat},
    Database,
};

/// Dumps every share with its files as JSON lines on stdout.
fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    // Initialize tracing
    let env_filter =
        tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());

    match config.log_format {
        LogFormat::Gcp => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_stackdriver::layer().with_writer(std::io::stderr))
                .init();
        }
        LogFormat::Json => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_target(true)
                        .with_span_list(false)
                        .with_writer(std::io::stderr),
                )
                .init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
    }

    info!(version = env!("CARGO_PKG_VERSION"), "share-store starting");

    let db = Database::open(&config.data_dir)?;
    info!("Database opened at: {}", config.data_dir);

    let now = chrono::Utc::now();
    let shares = db.get_all_shares()?;
    let mut expired = 0usize;

    for share in &shares {
        let files = db.get_shared_files(share.id)?;
        let is_expired = share.is_expired(now);
        if is_expired {
            expired += 1;
        }
        let line = serde_json::json!({
            "share": share,
            "files": files,
            "expired": is_expired,
        });
        println!("{line}");
    }

    info!(shares = shares.len(), expired, "Inspection complete");
    Ok(())
}
