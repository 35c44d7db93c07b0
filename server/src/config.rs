//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid {var}: {reason}")]
    Config { var: &'static str, reason: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Overrides the Leptos `site-root` the WASM bundle is served from.
    pub site_root: Option<String>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SITE_ROOT`: Leptos site root override
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `PORT` is not a valid port number.
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ServerError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let site_root = lookup("SITE_ROOT")
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty());
        Ok(Self { port, site_root })
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value
            .parse::<u16>()
            .map_err(|e| ServerError::Config { var: "PORT", reason: format!("{value:?}: {e}") }),
    }
}
