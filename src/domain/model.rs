use crate::utils::error::{MealError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One `row` element of a `mealServiceDietInfo` response.
///
/// Fields missing from the row element are left as `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawMealRow {
    /// `MMEAL_SC_CODE`: 1 breakfast, 2 lunch, 3 dinner.
    pub meal_slot_code: Option<String>,
    /// `DDISH_NM`: dish names joined by `<br/>`.
    pub dish_text: Option<String>,
    /// `MLSV_YMD`: service date as `YYYYMMDD`.
    pub service_date: Option<String>,
    /// `MLSV_FGR`
    pub calorie_info: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    pub const ALL: [MealSlot; 3] = [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(MealSlot::Breakfast),
            "2" => Some(MealSlot::Lunch),
            "3" => Some(MealSlot::Dinner),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "1",
            MealSlot::Lunch => "2",
            MealSlot::Dinner => "3",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "breakfast",
            MealSlot::Lunch => "lunch",
            MealSlot::Dinner => "dinner",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "조식",
            MealSlot::Lunch => "중식",
            MealSlot::Dinner => "석식",
        }
    }
}

/// Dish lists per meal slot, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealSlotCollection {
    pub breakfast: Vec<String>,
    pub lunch: Vec<String>,
    pub dinner: Vec<String>,
}

impl MealSlotCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, slot: MealSlot) -> &[String] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
        }
    }

    pub fn slot_mut(&mut self, slot: MealSlot) -> &mut Vec<String> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (MealSlot, &[String])> + '_ {
        MealSlot::ALL.into_iter().map(move |slot| (slot, self.slot(slot)))
    }

    pub fn is_empty(&self) -> bool {
        self.breakfast.is_empty() && self.lunch.is_empty() && self.dinner.is_empty()
    }

    pub fn total_dishes(&self) -> usize {
        self.breakfast.len() + self.lunch.len() + self.dinner.len()
    }
}

/// Result of interpreting one API response body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiOutcome {
    Success(Vec<RawMealRow>),
    /// `RESULT/CODE` was `INFO-200`; carries the server message.
    NoData(String),
    /// No `mealServiceDietInfo` element in the document.
    NotFound,
    MalformedResponse,
}

impl ApiOutcome {
    pub fn into_rows(self) -> Result<Vec<RawMealRow>> {
        match self {
            ApiOutcome::Success(rows) => Ok(rows),
            ApiOutcome::NoData(message) => Err(MealError::NoData { message }),
            ApiOutcome::NotFound => Err(MealError::NotFound),
            ApiOutcome::MalformedResponse => Err(MealError::MalformedResponse {
                message: "response body is not well-formed XML".to_string(),
            }),
        }
    }
}

/// What a renderer is asked to show. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Idle,
    Loading,
    Error(String),
    Content {
        date: NaiveDate,
        meals: MealSlotCollection,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MealQuery {
    pub office_code: String,
    pub school_code: String,
    pub date: NaiveDate,
}

impl MealQuery {
    /// Date in the API's `MLSV_YMD` form.
    pub fn service_date(&self) -> String {
        format_service_date(self.date)
    }
}

pub fn format_service_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
