use heal_core::domain::budget::value_objects::{BudgetProfile, DiabetesType, ExerciseLevel, Sex};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

fn default_meals_per_day() -> u32 {
    3
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct BudgetValidator {
    #[validate(range(exclusive_min = 0.0, message = "height_cm must be greater than 0"))]
    #[schema(example = 175.0)]
    pub height_cm: f64,

    #[validate(range(exclusive_min = 0.0, message = "weight_kg must be greater than 0"))]
    #[schema(example = 80.0)]
    pub weight_kg: f64,

    #[validate(range(min = 10, max = 120, message = "age must be between 10 and 120"))]
    #[schema(example = 40)]
    pub age: u32,

    pub sex: Sex,

    pub exercise_level: ExerciseLevel,

    #[serde(default)]
    pub diabetes_type: DiabetesType,

    #[serde(default = "default_meals_per_day")]
    #[validate(range(min = 1, max = 8, message = "meals_per_day must be between 1 and 8"))]
    #[schema(example = 3)]
    pub meals_per_day: u32,
}

impl From<BudgetValidator> for BudgetProfile {
    fn from(payload: BudgetValidator) -> Self {
        Self {
            height_cm: payload.height_cm,
            weight_kg: payload.weight_kg,
            age: payload.age,
            sex: payload.sex,
            exercise_level: payload.exercise_level,
            diabetes_type: payload.diabetes_type,
            meals_per_day: payload.meals_per_day,
        }
    }
}
