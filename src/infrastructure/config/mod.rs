use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::{debug, info};

use crate::domain::analysis_config::AnalysisConfig;
use crate::domain::error::{AppError, Result};

pub const ENV_PREFIX: &str = "SOIL_INSIGHT_";

/// Loads [`AnalysisConfig`] from defaults, an optional TOML file and the
/// environment, in increasing precedence.
pub struct ConfigService {
    figment: Figment,
}

impl ConfigService {
    pub fn new(config_file: Option<&Path>) -> Self {
        // A missing .env is normal
        if let Ok(path) = dotenvy::dotenv() {
            debug!(path = %path.display(), "Loaded .env");
        }

        let mut figment = Figment::from(Serialized::defaults(AnalysisConfig::default()));
        if let Some(path) = config_file {
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        Self { figment }
    }

    pub fn load(&self) -> Result<AnalysisConfig> {
        let config: AnalysisConfig = self.figment.extract()?;
        config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid analysis config: {}", e)))?;
        info!(
            max_document_bytes = config.max_document_bytes,
            "Loaded analysis config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    fn load(path: Option<&Path>) -> figment::error::Result<AnalysisConfig> {
        ConfigService::new(path)
            .load()
            .map_err(|e| figment::Error::from(e.to_string()))
    }

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            assert_eq!(load(None)?, AnalysisConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "soil.toml",
                r#"
                max_document_bytes = 1024

                [labels]
                nitrogen = "Available N"

                [thresholds]
                zinc_low_below = 1.0
                "#,
            )?;
            let config = load(Some(Path::new("soil.toml")))?;
            assert_eq!(config.max_document_bytes, 1024);
            assert_eq!(config.labels.nitrogen, "Available N");
            assert_eq!(config.labels.ph, "Soil pH");
            assert_eq!(config.thresholds.zinc_low_below, 1.0);
            assert_eq!(config.thresholds.iron_low_below, 4.5);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("soil.toml", "[thresholds]\nboron_low_below = 0.6\n")?;
            jail.set_env("SOIL_INSIGHT_THRESHOLDS__BORON_LOW_BELOW", "0.7");
            let config = load(Some(Path::new("soil.toml")))?;
            assert_eq!(config.thresholds.boron_low_below, 0.7);
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        Jail::expect_with(|jail| {
            jail.set_env("SOIL_INSIGHT_MAX_DOCUMENT_BYTES", "0");
            let err = ConfigService::new(None).load().unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)));
            Ok(())
        });
    }

    #[test]
    fn test_malformed_value_is_config_error() {
        Jail::expect_with(|jail| {
            jail.set_env("SOIL_INSIGHT_THRESHOLDS__PH_ACIDIC_BELOW", "acidic");
            let err = ConfigService::new(None).load().unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)));
            Ok(())
        });
    }
}
