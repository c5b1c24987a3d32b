// File: core/config.rs
// Client configuration. The base URL is read from the environment once per
// process; the HTTP client only ever receives it as a value.

use super::error::CoreError;
use once_cell::sync::OnceCell;
use std::time::Duration;
use url::Url;

pub const BASE_URL_ENV: &str = "ACADEMY_API_BASE_URL";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

static PROCESS_CONFIG: ConfigCache = ConfigCache::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Validates `base_url`. It is kept as given (trimmed of surrounding
    /// whitespace); joining with a path happens in the HTTP client.
    pub fn new(base_url: impl Into<String>) -> Result<Self, CoreError> {
        let base_url = base_url.into().trim().to_string();
        Url::parse(&base_url)?;

        Ok(Self {
            base_url,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Reads [`BASE_URL_ENV`], loading a `.env` file first when one exists.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_var(BASE_URL_ENV)
    }

    fn from_var(var: &str) -> Result<Self, CoreError> {
        if dotenv::dotenv().is_ok() {
            log::debug!("Loaded .env file");
        }

        let base_url =
            std::env::var(var).map_err(|_| CoreError::MissingConfig(var.to_string()))?;
        Self::new(base_url).map_err(|e| CoreError::InvalidConfig(format!("{}: {}", var, e)))
    }

    /// The configuration captured the first time it is asked for.
    /// Later changes to the environment are not observed.
    pub fn process() -> Result<Self, CoreError> {
        PROCESS_CONFIG.get_or_read(BASE_URL_ENV)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// --- Read-once cache ---

// CoreError is not Clone (it wraps reqwest/serde errors), so only the
// configuration failure kinds are cached.
#[derive(Debug, Clone)]
enum CachedFailure {
    Missing(String),
    Invalid(String),
}

impl From<CachedFailure> for CoreError {
    fn from(failure: CachedFailure) -> Self {
        match failure {
            CachedFailure::Missing(var) => CoreError::MissingConfig(var),
            CachedFailure::Invalid(reason) => CoreError::InvalidConfig(reason),
        }
    }
}

struct ConfigCache(OnceCell<Result<ClientConfig, CachedFailure>>);

impl ConfigCache {
    const fn new() -> Self {
        Self(OnceCell::new())
    }

    fn get_or_read(&self, var: &str) -> Result<ClientConfig, CoreError> {
        self.0
            .get_or_init(|| {
                ClientConfig::from_var(var).map_err(|e| match e {
                    CoreError::MissingConfig(var) => CachedFailure::Missing(var),
                    other => CachedFailure::Invalid(other.to_string()),
                })
            })
            .clone()
            .map_err(CoreError::from)
    }
}
