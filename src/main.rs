mod app;
mod config;
mod domain;
mod infra;
mod logging;
mod platform;
mod ui;
mod usecase;


use anyhow::{Context, Result};
use tracing::info;

use crate::config::{default_webview_data_dir, AppConfig};

fn main() -> Result<()> {
    logging::init_logging()?;

    let config = AppConfig::from_env().context("failed to read configuration")?;
    let webview_data_dir =
        default_webview_data_dir().context("failed to prepare WebView data directory")?;
    info!(
        data_path = %config.data_path.display(),
        webview_dir = %webview_data_dir.display(),
        "starting credential lookup"
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new().with_title("Credential Lookup"),
                )
                .with_data_directory(webview_data_dir),
        )
        .with_context(config)
        .launch(app::App);

    Ok(())
}
