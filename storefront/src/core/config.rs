use std::path::PathBuf;

/// File name of the local key-value database inside the work dir
pub const DATABASE_FILE: &str = "storefront.redb";

/// Storefront configuration
///
/// # Environment variables
///
/// Every field can be overridden from the environment (a `.env` file is
/// loaded first by [`crate::setup_environment`]):
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./work_dir | Database and log directory |
/// | ENVIRONMENT | development | development \| staging \| production |
/// | LOG_LEVEL | info | tracing filter directive |
/// | LOG_JSON | false | JSON console output |
/// | LOG_TO_FILE | false | Also write rolling files under `WORK_DIR/logs` |
/// | NOTIFICATION_CAPACITY | 256 | Broadcast buffer of the notification bus |
/// | CHECKOUT_FORM_URL | (external form) | Where checkout hands off |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/shop LOG_LEVEL=debug cargo run -p storefront
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Holds the database file and logs
    pub work_dir: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_to_file: bool,
    pub notification_capacity: usize,
    /// External checkout form
    pub checkout_form_url: String,
}

/// Default external checkout form
const DEFAULT_CHECKOUT_FORM_URL: &str = "https://forms.example.com/storefront-checkout";

impl Config {
    /// Load configuration from the environment, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or(defaults.work_dir),
            environment: std::env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_json: std::env::var("LOG_JSON")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_json),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.log_to_file),
            notification_capacity: std::env::var("NOTIFICATION_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&c: &usize| c > 0)
                .unwrap_or(defaults.notification_capacity),
            checkout_form_url: std::env::var("CHECKOUT_FORM_URL")
                .unwrap_or(defaults.checkout_form_url),
        }
    }

    /// Defaults with the given work dir and environment; the process
    /// environment is not consulted
    ///
    /// Used by tests
    pub fn with_overrides(work_dir: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            work_dir: work_dir.into(),
            environment: environment.into(),
            ..Self::default()
        }
    }

    pub fn database_path(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join(DATABASE_FILE)
    }

    pub fn log_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir).join("logs")
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            work_dir: "./work_dir".into(),
            environment: "development".into(),
            log_level: "info".into(),
            log_json: false,
            log_to_file: false,
            notification_capacity: 256,
            checkout_form_url: DEFAULT_CHECKOUT_FORM_URL.into(),
        }
    }
}
