use std::env;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub upstream_url: Url,
    pub frontend_dir: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the process env.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => 8080,
        };

        let upstream = lookup("PREDICTION_UPSTREAM_URL")
            .ok_or(ConfigError::Missing("PREDICTION_UPSTREAM_URL"))?;
        let upstream_url = Url::parse(&upstream)?;

        let frontend_dir = lookup("FRONTEND_DIR").unwrap_or_else(|| {
            if let Some(manifest_dir) = lookup("CARGO_MANIFEST_DIR") {
                format!("{}/../frontend/dist", manifest_dir)
            } else {
                "/usr/src/app/frontend/dist".to_string()
            }
        });

        Ok(Self { port, upstream_url, frontend_dir })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_only_upstream_is_set() {
        let config = ServerConfig::from_lookup(lookup_from(&[(
            "PREDICTION_UPSTREAM_URL",
            "http://model:5000/predict",
        )]))
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.upstream_url.as_str(), "http://model:5000/predict");
        assert_eq!(config.frontend_dir, "/usr/src/app/frontend/dist");
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
    }

    #[test]
    fn frontend_dir_falls_back_to_manifest_dir() {
        let config = ServerConfig::from_lookup(lookup_from(&[
            ("PREDICTION_UPSTREAM_URL", "http://model/predict"),
            ("CARGO_MANIFEST_DIR", "/work/backend"),
            ("PORT", "9000"),
        ]))
        .unwrap();

        assert_eq!(config.frontend_dir, "/work/backend/../frontend/dist");
        assert_eq!(config.port, 9000);
    }

    #[test]
    fn missing_upstream_is_an_error() {
        let err = ServerConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("PREDICTION_UPSTREAM_URL")));
    }

    #[test]
    fn bad_values_are_rejected() {
        let bad_port = ServerConfig::from_lookup(lookup_from(&[
            ("PREDICTION_UPSTREAM_URL", "http://model/predict"),
            ("PORT", "eighty"),
        ]));
        assert!(matches!(bad_port, Err(ConfigError::InvalidPort(_))));

        let bad_url =
            ServerConfig::from_lookup(lookup_from(&[("PREDICTION_UPSTREAM_URL", "not a url")]));
        assert!(matches!(bad_url, Err(ConfigError::InvalidUrl(_))));
    }
}
