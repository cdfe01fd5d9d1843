use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::macros::MacroTargets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct FoodEstimate {
    pub items: Vec<FoodItem>,
    pub totals: MacroTargets,
    pub calories_range: CaloriesRange,
    pub assumptions: Vec<String>,
    pub warnings: Vec<String>,
    pub model_info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct FoodItem {
    pub name: String,
    pub display_name: String,
    pub category: String,
    pub cooking_method: String,
    pub grams: f64,
    pub kcal: f64,
    pub nutrition_per_100g: MacroTargets,
    /// Model confidence in the identification, in `[0, 1]`.
    pub confidence: f64,
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct CaloriesRange {
    pub low: f64,
    pub high: f64,
}
