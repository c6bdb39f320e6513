use chart::theme::DEFAULT_CURRENCY_CODE;
use log::Level;
use wasm_bindgen::JsValue;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Id of the canvas the prediction chart is drawn into
    pub chart_element_id: String,

    /// ISO 4217 code used for tooltip and axis values (e.g., "INR")
    pub currency_code: String,

    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            chart_element_id: "predChart".to_string(),
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

const ELEMENT_ID_KEY: &str = "trackflow_chart_element_id";
const CURRENCY_KEY: &str = "trackflow_currency_code";
const LOG_LEVEL_KEY: &str = "trackflow_log_level";

impl AppSettings {
    /// Create settings from environment/window location
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        let Some(window) = window() else {
            return settings;
        };

        if let Ok(hostname) = window.location().hostname() {
            settings.debug_mode = is_local_host(&hostname);

            // In development, use more verbose logging
            if settings.debug_mode {
                settings.log_level = Level::Debug;
            }
        }

        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(element_id)) = storage.get_item(ELEMENT_ID_KEY) {
                if !element_id.trim().is_empty() {
                    settings.chart_element_id = element_id;
                }
            }

            if let Ok(Some(currency)) = storage.get_item(CURRENCY_KEY) {
                if !currency.trim().is_empty() {
                    settings.currency_code = currency.trim().to_uppercase();
                }
            }

            if let Ok(Some(log_level)) = storage.get_item(LOG_LEVEL_KEY) {
                settings.log_level = parse_log_level(&log_level).unwrap_or(settings.log_level);
            }
        }

        settings
    }

    /// Save settings to localStorage
    pub fn save_to_storage(&self) -> Result<(), JsValue> {
        if let Some(window) = window() {
            if let Some(storage) = window.local_storage()? {
                storage.set_item(ELEMENT_ID_KEY, &self.chart_element_id)?;
                storage.set_item(CURRENCY_KEY, &self.currency_code)?;
                storage.set_item(LOG_LEVEL_KEY, &self.log_level.as_str().to_lowercase())?;
            }
        }
        Ok(())
    }
}

fn is_local_host(hostname: &str) -> bool {
    hostname == "localhost" || hostname == "127.0.0.1"
}

fn parse_log_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "error" => Some(Level::Error),
        "warn" => Some(Level::Warn),
        "info" => Some(Level::Info),
        "debug" => Some(Level::Debug),
        "trace" => Some(Level::Trace),
        _ => None,
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::default());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Update the global settings
pub fn update_settings<F>(f: F)
where
    F: FnOnce(&mut AppSettings),
{
    SETTINGS.with(|s| {
        let mut settings = s.borrow_mut();
        f(&mut settings);
    });
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
