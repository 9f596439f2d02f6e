use crate::domain::model::{MealSlot, MealSlotCollection, RawMealRow};

/// Marker the upstream data uses between dish names in `DDISH_NM`.
pub const DISH_SEPARATOR: &str = "<br/>";

/// Splits a compound dish string into trimmed, non-empty dish names.
pub fn split_dishes(dish_text: &str) -> Vec<String> {
    dish_text
        .split(DISH_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Groups rows into breakfast/lunch/dinner and flattens their dishes.
///
/// Rows with a missing or unknown slot code are skipped.
pub fn classify(rows: &[RawMealRow]) -> MealSlotCollection {
    let mut meals = MealSlotCollection::new();

    for row in rows {
        let Some(slot) = row.meal_slot_code.as_deref().and_then(MealSlot::from_code) else {
            tracing::debug!(
                "Skipping row with unrecognized meal code {:?}",
                row.meal_slot_code
            );
            continue;
        };

        if let Some(dish_text) = row.dish_text.as_deref() {
            meals.slot_mut(slot).extend(split_dishes(dish_text));
        }
    }

    meals
}
