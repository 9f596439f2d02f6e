pub mod interpreter;
pub mod mapper;
pub mod search;

pub use crate::domain::model::{ApiOutcome, MealSlot, MealSlotCollection, RawMealRow, ViewState};
pub use crate::domain::ports::{ConfigProvider, Renderer, Transport};
pub use crate::utils::error::Result;
