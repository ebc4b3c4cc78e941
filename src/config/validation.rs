use crate::config::types::{Config, OutputConfig, PlatformConfig, ScanConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_scan_config(&config.scan)?;
    validate_platform_config(&config.platform)?;
    validate_output_config(&config.output)?;

    if config.input.handles_path.is_empty() {
        return Err(ConfigError::Validation(
            "handles_path cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates scan configuration
fn validate_scan_config(config: &ScanConfig) -> Result<(), ConfigError> {
    if config.max_retries < 1 {
        return Err(ConfigError::Validation(format!(
            "max_retries must be >= 1, got {}",
            config.max_retries
        )));
    }

    if config.navigation_timeout_ms < 1_000 {
        return Err(ConfigError::Validation(format!(
            "navigation_timeout_ms must be >= 1000ms, got {}ms",
            config.navigation_timeout_ms
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates platform configuration
fn validate_platform_config(config: &PlatformConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base_url: {}", e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(ConfigError::Validation(format!(
            "base_url must use http or https scheme, got '{}'",
            url.scheme()
        )));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.checkpoint_path.is_empty() {
        return Err(ConfigError::Validation(
            "checkpoint_path cannot be empty".to_string(),
        ));
    }

    if config.available_path.is_empty() {
        return Err(ConfigError::Validation(
            "available_path cannot be empty".to_string(),
        ));
    }

    if config.checkpoint_path == config.available_path {
        return Err(ConfigError::Validation(
            "checkpoint_path and available_path must differ".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::InputConfig;

    fn valid_config() -> Config {
        Config {
            scan: ScanConfig::default(),
            platform: PlatformConfig {
                base_url: "https://example.com/".to_string(),
            },
            input: InputConfig {
                handles_path: "./handles.txt".to_string(),
            },
            output: OutputConfig {
                checkpoint_path: "./progress.json".to_string(),
                available_path: "./available.json".to_string(),
            },
        }
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_zero_retries_rejected() {
        let mut config = valid_config();
        config.scan.max_retries = 0;
        assert!(matches!(
            validate(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_tiny_timeout_rejected() {
        let mut config = valid_config();
        config.scan.navigation_timeout_ms = 500;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_malformed_base_url_rejected() {
        let mut config = valid_config();
        config.platform.base_url = "not a url".to_string();
        assert!(matches!(validate(&config), Err(ConfigError::InvalidUrl(_))));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let mut config = valid_config();
        config.platform.base_url = "ftp://example.com/".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_colliding_output_paths_rejected() {
        let mut config = valid_config();
        config.output.available_path = config.output.checkpoint_path.clone();
        assert!(validate(&config).is_err());
    }
}
