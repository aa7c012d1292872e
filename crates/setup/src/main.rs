use config::AppPaths;
use icon_source::http::HttpIconSource;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    let root = match std::env::current_dir() {
        Ok(root) => root,
        Err(err) => {
            tracing::error!(error = %err, "cannot resolve application root");
            return ExitCode::FAILURE;
        }
    };
    let paths = AppPaths::under(root);
    let icons = HttpIconSource::new();

    match setup::apply_config(&paths, icons.as_ref()).await {
        Ok(report) => {
            tracing::debug!(report = %report.to_json(), "apply report");
            tracing::info!(name = %report.sanitized_name, "config applied");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "error updating config");
            ExitCode::FAILURE
        }
    }
}
