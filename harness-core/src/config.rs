//! Ambient endpoint configuration for the path router.

use crate::error::ConfigError;

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "http://127.0.0.1:5000";

/// Routing profile used when none is configured.
pub const DEFAULT_PROFILE: &str = "car";

const HOST_VAR: &str = "OSRM_HOST";
const PORT_VAR: &str = "OSRM_PORT";
const PROFILE_VAR: &str = "OSRM_PROFILE";

/// Where requests are sent.
///
/// # Examples
///
/// ```
/// use harness_core::EndpointConfig;
///
/// let endpoint = EndpointConfig::new("http://localhost:5000/").with_profile("foot");
/// assert_eq!(endpoint.base(), "http://localhost:5000");
/// assert_eq!(endpoint.profile, "foot");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointConfig {
    /// Base URL of the routing server.
    pub host: String,
    /// Profile segment used by every operation except `timestamp`.
    pub profile: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_owned(),
            profile: DEFAULT_PROFILE.to_owned(),
        }
    }
}

impl EndpointConfig {
    /// Create a configuration for `host` with the default profile.
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    /// Set the routing profile.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Host without a trailing slash.
    #[must_use]
    pub fn base(&self) -> &str {
        self.host.trim_end_matches('/')
    }

    /// Address of an arbitrary path below the host.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base(), path.trim_start_matches('/'))
    }

    /// Read `OSRM_HOST`, `OSRM_PORT` and `OSRM_PROFILE` from the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `OSRM_PORT` is not a port
    /// number.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    ///
    /// `OSRM_HOST` wins over `OSRM_PORT`; a port alone targets the loopback
    /// interface. Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when `OSRM_PORT` is not a port
    /// number.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(host) = lookup(HOST_VAR) {
            config.host = host;
        } else if let Some(raw) = lookup(PORT_VAR) {
            let port: u16 = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                variable: PORT_VAR,
                value: raw.clone(),
            })?;
            config.host = format!("http://127.0.0.1:{port}");
        }
        if let Some(profile) = lookup(PROFILE_VAR) {
            config.profile = profile;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_owned(), (*value).to_owned()))
            .collect();
        move |name: &str| vars.get(name).cloned()
    }

    #[rstest]
    fn defaults_when_environment_is_empty() {
        let config = EndpointConfig::from_lookup(lookup_from(&[])).expect("should build");

        assert_eq!(config, EndpointConfig::default());
    }

    #[rstest]
    fn port_targets_loopback() {
        let config =
            EndpointConfig::from_lookup(lookup_from(&[("OSRM_PORT", "5001")])).expect("should build");

        assert_eq!(config.host, "http://127.0.0.1:5001");
    }

    #[rstest]
    fn host_wins_over_port() {
        let config = EndpointConfig::from_lookup(lookup_from(&[
            ("OSRM_HOST", "http://routed.test"),
            ("OSRM_PORT", "5001"),
            ("OSRM_PROFILE", "bicycle"),
        ]))
        .expect("should build");

        assert_eq!(config.host, "http://routed.test");
        assert_eq!(config.profile, "bicycle");
    }

    #[rstest]
    #[case("not-a-port")]
    #[case("70000")]
    fn rejects_invalid_port(#[case] raw: &str) {
        let err = EndpointConfig::from_lookup(lookup_from(&[("OSRM_PORT", raw)]))
            .expect_err("should fail");

        assert_eq!(
            err,
            ConfigError::InvalidValue {
                variable: "OSRM_PORT",
                value: raw.to_owned(),
            }
        );
    }

    #[rstest]
    fn url_for_avoids_double_slashes() {
        let config = EndpointConfig::new("http://routed.test/");

        assert_eq!(config.url_for("/route/v1/car/1,2;3,4"), "http://routed.test/route/v1/car/1,2;3,4");
    }
}
