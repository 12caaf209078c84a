use tracing::Level;

/// Where the dish list lives unless told otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://my-json-server.typicode.com/leveluptuts/fakeapi/dishes";

/// The heading of the page.
pub const DEFAULT_TITLE: &str = "Level Up Dishes";

/// Configuration for the dishes app.
///
/// # Example
///
/// ```rust
/// use dishes::AppConfig;
///
/// let config = AppConfig::default().with_endpoint("http://localhost:3000/dishes");
/// assert_eq!(config.endpoint(), "http://localhost:3000/dishes");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    title: String,
    endpoint: String,
    log_level: Level,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            log_level: if cfg!(debug_assertions) {
                Level::DEBUG
            } else {
                Level::INFO
            },
        }
    }
}

impl AppConfig {
    /// The defaults, overridden by `DISHES_ENDPOINT` and `DISHES_TITLE` if they were set at build
    /// time. The browser has no process environment, so these are baked in by the compiler.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = option_env!("DISHES_ENDPOINT") {
            config.endpoint = endpoint.to_string();
        }
        if let Some(title) = option_env!("DISHES_TITLE") {
            config.title = title.to_string();
        }
        config
    }

    /// Set the heading of the page.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the URL the dish list is fetched from.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the most verbose level the logger lets through.
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// The heading of the page.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The URL the dish list is fetched from.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// The most verbose level to log.
    pub fn log_level(&self) -> Level {
        self.log_level
    }
}
