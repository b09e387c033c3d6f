use anyhow::Result;
use clap::{Parser, Subcommand};
use detection::{FormField, Locale};
use std::path::PathBuf;

pub mod commands;

use commands::{detect, serve, OutputFormat};
use crate::config::load_config;

#[derive(Parser)]
#[command(name = "anomalia")]
#[command(about = "Solar injection anomaly detection: one-shot CLI client and web host")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    ///
    /// Defaults to ./anomalia.toml when present. ANOMALIA_* environment
    /// variables override values from the file.
    #[arg(short, long, global = true, env = "ANOMALIA_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Submit one detection request and print the result
    ///
    /// Values are taken as typed, like the web form does: anything that is
    /// not a number is sent as null and left for the service to reject.
    Detect {
        /// Measured monthly injection into the grid, in kWh [default: 3000]
        #[arg(long, allow_hyphen_values = true)]
        injection: Option<String>,

        /// Installed power of the generation unit [default: 6]
        #[arg(long, allow_hyphen_values = true)]
        installed_power: Option<String>,

        /// Latitude of the unit [default: 39.7392]
        #[arg(long, allow_hyphen_values = true)]
        latitude: Option<String>,

        /// Longitude of the unit [default: -104.9903]
        #[arg(long, allow_hyphen_values = true)]
        longitude: Option<String>,

        /// Reference month code: JAN FEV MAR ABR MAI JUN JUL AGO SET OUT NOV DEZ [default: JUL]
        #[arg(short, long)]
        month: Option<String>,

        /// Detection service URL, overrides the configured endpoint
        #[arg(short, long)]
        endpoint: Option<String>,

        /// Language of the output (en, pt-br)
        #[arg(short, long)]
        locale: Option<Locale>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Start the web server hosting the frontend and the detection forwarder
    ///
    /// The frontend posts straight to the hosted detection service by
    /// default. To send its requests through this server instead, set the
    /// browser's localStorage key `anomalia_endpoint` to `/api/v1/detect`.
    Serve {
        /// Bind address for the web server
        ///
        /// Format: IP:PORT (e.g., 0.0.0.0:3000, 127.0.0.1:8080)
        #[arg(short, long)]
        bind_address: Option<String>,

        /// Directory with the built frontend (index.html, wasm bundle)
        #[arg(short, long)]
        static_dir: Option<PathBuf>,

        /// Detection service URL requests are forwarded to
        #[arg(short, long)]
        endpoint: Option<String>,
    },
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let mut config = load_config(self.config.as_deref())?;

        match self.command {
            Commands::Detect {
                injection,
                installed_power,
                latitude,
                longitude,
                month,
                endpoint,
                locale,
                format,
            } => {
                if let Some(endpoint) = endpoint {
                    config.endpoint = endpoint;
                }
                if let Some(locale) = locale {
                    config.locale = locale;
                }

                let edits: Vec<(FormField, String)> = [
                    (FormField::Injection, injection),
                    (FormField::InstalledPower, installed_power),
                    (FormField::Latitude, latitude),
                    (FormField::Longitude, longitude),
                    (FormField::Month, month),
                ]
                .into_iter()
                .filter_map(|(field, value)| value.map(|v| (field, v)))
                .collect();

                detect(&config, edits, format).await?;
            }
            Commands::Serve { bind_address, static_dir, endpoint } => {
                if let Some(bind_address) = bind_address {
                    config.bind_address = bind_address;
                }
                if let Some(static_dir) = static_dir {
                    config.static_dir = Some(static_dir);
                }
                if let Some(endpoint) = endpoint {
                    config.endpoint = endpoint;
                }

                serve(&config).await?;
            }
        }
        Ok(())
    }
}
