//! Frontend configuration.
//!
//! The client talks to a single fixed backend address; the only knob is a
//! compile-time override of that address.

/// Frontend configuration for backend URLs.
#[derive(Debug, Clone)]
pub struct FrontendConfig {
    /// Base URL of the TeamSpace API.
    api_base_url: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            api_base_url: option_env!("TEAMSPACE_API_URL")
                .unwrap_or("http://localhost:8080/api/v1")
                .to_string(),
        }
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Base URL the API client points at.
    #[must_use]
    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_the_api() {
        let config = FrontendConfig::default();
        assert!(config.api_base_url().starts_with("http"));
        assert!(!config.api_base_url().ends_with('/'));
    }

    #[test]
    fn new_matches_default() {
        assert_eq!(
            FrontendConfig::new().api_base_url(),
            FrontendConfig::default().api_base_url()
        );
    }
}
