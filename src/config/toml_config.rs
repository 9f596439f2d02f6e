use crate::config::{MealConfig, OutputFormat};
use crate::utils::error::{MealError, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Optional settings file. Every value may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub output: OutputSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiSection {
    pub base_url: Option<String>,
    pub office_code: Option<String>,
    pub school_code: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputSection {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// TOML 파일에서 설정 읽기
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// TOML 문자열 파싱
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MealError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// `${VAR}` 를 환경 변수 값으로 치환. 없는 변수는 그대로 둔다.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MealError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Applies the file's values on top of `base`.
    pub fn apply_to(&self, mut base: MealConfig) -> MealConfig {
        if let Some(base_url) = &self.api.base_url {
            base.api_base = base_url.clone();
        }
        if let Some(office_code) = &self.api.office_code {
            base.office_code = office_code.clone();
        }
        if let Some(school_code) = &self.api.school_code {
            base.school_code = school_code.clone();
        }
        if let Some(format) = self.output.format {
            base.format = format;
        }
        base
    }
}
