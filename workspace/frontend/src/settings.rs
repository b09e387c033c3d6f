use detection::Locale;
use log::Level;
use std::cell::RefCell;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Full URL of the detection service the form posts to.
    ///
    /// Set `anomalia_endpoint` to `/api/v1/detect` to go through `anomalia serve`.
    pub endpoint: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Language of the labels and messages
    pub locale: Locale,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            endpoint: common::DEFAULT_ENDPOINT.to_string(),
            log_level: Level::Info,
            locale: Locale::default(),
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window location and localStorage overrides
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }
            }

            if let Ok(Some(storage)) = window.local_storage() {
                if let Ok(Some(endpoint)) = storage.get_item("anomalia_endpoint") {
                    if !endpoint.trim().is_empty() {
                        settings.endpoint = endpoint;
                    }
                }

                if let Ok(Some(log_level)) = storage.get_item("anomalia_log_level") {
                    settings.log_level = parse_level(&log_level).unwrap_or(settings.log_level);
                }

                if let Ok(Some(locale)) = storage.get_item("anomalia_locale") {
                    // An unknown value keeps the default
                    if let Ok(locale) = locale.parse() {
                        settings.locale = locale;
                    }
                }
            }
        }

        settings
    }
}

fn parse_level(value: &str) -> Option<Level> {
    match value.to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
