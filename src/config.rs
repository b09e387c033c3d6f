use anyhow::Result;
use common::DEFAULT_ENDPOINT;
use config::{Config, Environment, File};
use detection::Locale;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Settings shared by every command.
///
/// Sources, later ones winning: built-in defaults, `anomalia.toml` in the
/// working directory (or the file given with `--config`), then `ANOMALIA_*`
/// environment variables. Command line flags are applied on top by the
/// commands themselves.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// URL the detection request is POSTed to
    pub endpoint: String,
    /// Address the web server binds to
    pub bind_address: String,
    /// Directory holding the built frontend, served by `serve`
    #[serde(default)]
    pub static_dir: Option<PathBuf>,
    /// Language of user-visible messages
    pub locale: Locale,
}

/// Load configuration from defaults, file and environment
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    let builder = Config::builder()
        .set_default("endpoint", DEFAULT_ENDPOINT)?
        .set_default("bind_address", "0.0.0.0:3000")?
        .set_default("locale", "en")?;

    let builder = match path {
        Some(path) => {
            tracing::debug!("Loading config file {}", path.display());
            builder.add_source(File::from(path))
        }
        None => builder.add_source(File::with_name("anomalia").required(false)),
    };

    let config = builder
        .add_source(Environment::with_prefix("ANOMALIA"))
        .build()?
        .try_deserialize::<AppConfig>()?;

    tracing::debug!(?config, "Configuration loaded");
    Ok(config)
}
