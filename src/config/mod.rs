#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://open.neis.go.kr/hub/mealServiceDietInfo";
pub const DEFAULT_OFFICE_CODE: &str = "J10";
pub const DEFAULT_SCHOOL_CODE: &str = "7531100";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// Fully resolved settings for one search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealConfig {
    pub api_base: String,
    pub office_code: String,
    pub school_code: String,
    pub format: OutputFormat,
}

impl Default for MealConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            office_code: DEFAULT_OFFICE_CODE.to_string(),
            school_code: DEFAULT_SCHOOL_CODE.to_string(),
            format: OutputFormat::default(),
        }
    }
}

impl ConfigProvider for MealConfig {
    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn office_code(&self) -> &str {
        &self.office_code
    }

    fn school_code(&self) -> &str {
        &self.school_code
    }
}

impl Validate for MealConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api.base_url", &self.api_base)?;
        validate_non_empty_string("api.office_code", &self.office_code)?;
        validate_non_empty_string("api.school_code", &self.school_code)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = MealConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.office_code(), "J10");
        assert_eq!(config.school_code(), "7531100");
    }

    #[test]
    fn test_invalid_config() {
        let config = MealConfig {
            school_code: " ".to_string(),
            ..MealConfig::default()
        };
        assert!(config.validate().is_err());

        let config = MealConfig {
            api_base: "open.neis.go.kr".to_string(),
            ..MealConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
