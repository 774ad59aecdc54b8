use ssg_core::PayloadContext;

use crate::endpoint::Environment;
use crate::error::ApiError;

/// Client configuration loaded from environment variables.
///
/// Defaults target the UAT environment with no training provider set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    /// Environment requests are sent to (default: UAT).
    pub environment: Environment,
    /// UEN of the training provider the requests are made for.
    pub uen: Option<String>,
    /// Value for the `x-api-version` header. Unset means "latest".
    pub api_version: Option<String>,
}

impl ClientConfig {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            ..Self::default()
        }
    }

    pub fn with_uen(mut self, uen: impl Into<String>) -> Self {
        self.uen = Some(uen.into());
        self
    }

    pub fn with_api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var           | Default |
    /// |-------------------|---------|
    /// | `SSG_ENVIRONMENT` | `UAT`   |
    /// | `SSG_UEN`         | unset   |
    /// | `SSG_API_VERSION` | unset   |
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ClientConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let environment = match lookup("SSG_ENVIRONMENT") {
            Some(name) => name.parse::<Environment>()?,
            None => Environment::default(),
        };

        let uen = lookup("SSG_UEN")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let api_version = lookup("SSG_API_VERSION")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        tracing::debug!(
            %environment,
            uen = uen.as_deref().unwrap_or("<unset>"),
            api_version = api_version.as_deref().unwrap_or("<latest>"),
            "Loaded client configuration"
        );

        Ok(Self {
            environment,
            uen,
            api_version,
        })
    }

    /// Context handed to request models when their payload is built.
    pub fn payload_context(&self) -> PayloadContext {
        PayloadContext {
            uen: self.uen.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_uat_without_provider() {
        let config = ClientConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.environment, Environment::Uat);
    }

    #[test]
    fn reads_every_variable() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("SSG_ENVIRONMENT", "Production"),
            ("SSG_UEN", " 199900650G "),
            ("SSG_API_VERSION", "v2.0"),
        ]))
        .unwrap();

        assert_eq!(config.environment, Environment::Production);
        assert_eq!(config.uen.as_deref(), Some("199900650G"));
        assert_eq!(config.api_version.as_deref(), Some("v2.0"));
        assert_eq!(config.payload_context(), PayloadContext::with_uen("199900650G"));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            ClientConfig::from_lookup(lookup(&[("SSG_UEN", "  "), ("SSG_API_VERSION", "")]))
                .unwrap();
        assert_eq!(config.uen, None);
        assert_eq!(config.api_version, None);
    }

    #[test]
    fn unknown_environment_is_rejected() {
        let result = ClientConfig::from_lookup(lookup(&[("SSG_ENVIRONMENT", "staging")]));
        assert_matches!(result, Err(ApiError::Config(_)));
    }
}
