use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SchedLensError};

/// Runtime settings loaded from `config.json`. Every key is optional.
/// `token` names the environment variable holding the secret, never the
/// secret itself.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub gitlab_api_base: String,
    pub token: String,
    pub port: u16,
    pub group: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            gitlab_api_base: "https://gitlab.ellisbs.co.uk/api/v4".to_owned(),
            token: "SELF_GITLAB_TOKEN".to_owned(),
            port: 8000,
            group: None,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SchedLensError::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        let settings = serde_json::from_str(&raw)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings: Settings = serde_json::from_str("{}").unwrap();

        assert_eq!(settings.gitlab_api_base, "https://gitlab.ellisbs.co.uk/api/v4");
        assert_eq!(settings.token, "SELF_GITLAB_TOKEN");
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.group, None);
    }

    #[test]
    fn test_full_config_overrides_defaults() {
        let raw = r#"{
            "gitlab_api_base": "https://test-gitlab.example.com/api/v4",
            "token": "TEST_TOKEN_VAR",
            "port": 9000,
            "group": "test-group"
        }"#;
        let settings: Settings = serde_json::from_str(raw).unwrap();

        assert_eq!(settings.gitlab_api_base, "https://test-gitlab.example.com/api/v4");
        assert_eq!(settings.token, "TEST_TOKEN_VAR");
        assert_eq!(settings.port, 9000);
        assert_eq!(settings.group.as_deref(), Some("test-group"));
    }

    #[test]
    fn test_partial_config_keeps_remaining_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"group": "ops"}"#).unwrap();

        assert_eq!(settings.group.as_deref(), Some("ops"));
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.token, "SELF_GITLAB_TOKEN");
    }

    #[test]
    fn test_missing_file_is_a_config_error() {
        let err = Settings::load(Path::new("/nonexistent/config.json")).unwrap_err();

        assert!(matches!(err, SchedLensError::ConfigError(_)));
    }
}
