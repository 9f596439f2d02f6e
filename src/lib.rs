pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::http::ReqwestTransport;
pub use crate::config::{MealConfig, OutputFormat};
pub use crate::core::{
    interpreter::interpret, mapper::classify, search::MealSearch, ApiOutcome, MealSlot,
    MealSlotCollection, RawMealRow, ViewState,
};
pub use crate::utils::error::{MealError, Result};
