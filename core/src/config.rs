//! Client configuration.

/// Backend URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable hosts read the base URL from.
pub const BASE_URL_ENV: &str = "LINKSHELF_API_URL";

/// Where the backend lives. Injected into `ResourceClient`; the core never
/// reads the environment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Use `value` when it is present and non-blank, otherwise the default.
    pub fn from_optional(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::new(url),
            _ => Self::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
