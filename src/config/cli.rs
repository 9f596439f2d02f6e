use crate::config::toml_config::TomlConfig;
use crate::config::{MealConfig, OutputFormat};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "school-meal")]
#[command(about = "Look up a school's breakfast, lunch and dinner menu from the NEIS API")]
pub struct CliConfig {
    #[arg(long, help = "Date to look up (YYYY-MM-DD), defaults to today")]
    pub date: Option<String>,

    #[arg(long, help = "Meal service API endpoint")]
    pub api_base: Option<String>,

    #[arg(long, help = "Education office code (ATPT_OFCDC_SC_CODE)")]
    pub office_code: Option<String>,

    #[arg(long, help = "School code (SD_SCHUL_CODE)")]
    pub school_code: Option<String>,

    #[arg(long, help = "TOML settings file")]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Allow looking up dates before today")]
    pub allow_past: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Command line values win over the settings file, which wins over defaults.
    pub fn resolve(&self) -> Result<MealConfig> {
        let mut config = MealConfig::default();

        if let Some(path) = &self.config {
            tracing::debug!("Loading settings from {}", path);
            config = TomlConfig::from_file(path)?.apply_to(config);
        }

        if let Some(api_base) = &self.api_base {
            config.api_base = api_base.clone();
        }
        if let Some(office_code) = &self.office_code {
            config.office_code = office_code.clone();
        }
        if let Some(school_code) = &self.school_code {
            config.school_code = school_code.clone();
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        Ok(config)
    }
}
