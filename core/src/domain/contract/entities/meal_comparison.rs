use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MealComparison {
    pub per_meal_evaluation: MealEvaluations,
    pub daily_evaluation_post_meal: DailyEvaluations,
    pub flags: ComparisonFlags,
    pub progress_bars: ProgressBars,
    pub notes: Vec<String>,
    pub model_info: String,
}

/// How the current meal measures against one per-meal macro target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MealEvaluation {
    pub target: f64,
    pub actual: f64,
    /// `actual - target`; negative when under target.
    pub difference: f64,
    pub status: String,
    pub percent_of_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MealEvaluations {
    pub protein_g: MealEvaluation,
    pub carb_g: MealEvaluation,
    pub fat_g: MealEvaluation,
}

/// Daily standing for one macro once the current meal is eaten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DailyEvaluation {
    pub target_daily: f64,
    pub consumed_so_far: f64,
    pub after_meal: f64,
    pub remaining: f64,
    pub will_exceed_by: f64,
    pub percent_of_daily_target_after_meal: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DailyEvaluations {
    pub protein_g: DailyEvaluation,
    pub carb_g: DailyEvaluation,
    pub fat_g: DailyEvaluation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ComparisonFlags {
    pub per_meal_exceeded_any: bool,
    pub daily_exceeded_any: bool,
    pub over_per_meal: Vec<String>,
    pub over_daily: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MacroPercentages {
    pub protein_g: f64,
    pub carb_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ProgressBars {
    pub per_meal_percent: MacroPercentages,
    pub daily_percent_after_meal: MacroPercentages,
}
