use std::env;

/// Port used when `PORT` is unset or unusable
pub const DEFAULT_PORT: u16 = 4000;

/// The service listens on every interface
pub const DEFAULT_HOST: &str = "0.0.0.0";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub service_host: String,
    pub service_port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var("PORT").ok();
        Self::from_port_var(port.as_deref())
    }

    /// Build a config from the raw value of `PORT`.
    ///
    /// Anything that is not a valid port number falls back to [`DEFAULT_PORT`]
    /// instead of failing startup.
    pub fn from_port_var(port: Option<&str>) -> Self {
        let service_port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!(
                    "PORT={:?} is not a valid port number, falling back to {}",
                    raw,
                    DEFAULT_PORT
                );
                DEFAULT_PORT
            }),
        };

        Config {
            service_host: DEFAULT_HOST.to_string(),
            service_port,
        }
    }

    pub fn log_startup(&self) {
        tracing::debug!("Configuration loaded:");
        tracing::debug!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
