use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use sort_headers::app::App;
use sort_headers::config::SortHeaderConfig;

const CONFIG_ENV: &str = "SORT_HEADERS_CONFIG";

fn load_config() -> Result<SortHeaderConfig> {
    match std::env::var(CONFIG_ENV) {
        Ok(json) => SortHeaderConfig::from_json_str(&json)
            .with_context(|| format!("{CONFIG_ENV} should hold a JSON sort header config")),
        Err(_) => Ok(SortHeaderConfig::default()),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = load_config()?;
    tracing::info!(
        presentation = ?config.presentation,
        param = %config.ordering_param,
        "starting listing demo"
    );

    #[cfg(feature = "desktop")]
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("Sort headers")),
        )
        .with_context(config)
        .launch(App);

    #[cfg(not(feature = "desktop"))]
    dioxus::LaunchBuilder::new().with_context(config).launch(App);

    Ok(())
}
