mod config;
mod console;

use anyhow::Context;
use config::AppConfig;
use console::{console_pair, ConsoleSpeech, EchoBackend};
use eva_core::config::LocaleBundle;
use eva_core::session_loop::SessionLoop;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::MakeWriterExt;

fn init_logging() -> anyhow::Result<()> {
    std::fs::create_dir_all("logs")?;
    let file_appender = RollingFileAppender::new(Rotation::DAILY, "logs", "eva.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout.and(non_blocking_file))
        .with_env_filter(log_level)
        .init();
    std::mem::forget(guard);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;

    // Startup configuration failures are fatal; the session loop must
    // never start half-configured.
    let config = AppConfig::from_env().context("invalid startup configuration")?;
    tracing::info!(?config, "starting eva");

    let bundle = LocaleBundle::new(config.locale, &config.user, &config.assistant);
    let (capture, recognizer) = console_pair();
    let mut session_loop =
        SessionLoop::new(bundle, capture, recognizer, ConsoleSpeech, EchoBackend);

    tokio::select! {
        result = session_loop.run() => {
            result.context("session loop failed")?;
            tracing::info!("session ended by exit intent");
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("interrupt received, shutting down");
        }
    }

    Ok(())
}
