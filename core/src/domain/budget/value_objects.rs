use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ExerciseLevel {
    pub const ALL: [ExerciseLevel; 5] = [
        ExerciseLevel::Sedentary,
        ExerciseLevel::Light,
        ExerciseLevel::Moderate,
        ExerciseLevel::Active,
        ExerciseLevel::VeryActive,
    ];

    /// TDEE multiplier applied to BMR.
    pub fn activity_factor(&self) -> f64 {
        match self {
            ExerciseLevel::Sedentary => 1.2,
            ExerciseLevel::Light => 1.375,
            ExerciseLevel::Moderate => 1.55,
            ExerciseLevel::Active => 1.725,
            ExerciseLevel::VeryActive => 1.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub enum DiabetesType {
    T1D,
    T2D,
    #[default]
    #[serde(rename = "unknown")]
    Unknown,
}

/// Biometric input to the budget engine. Ranges are enforced by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BudgetProfile {
    pub height_cm: f64,
    pub weight_kg: f64,
    pub age: u32,
    pub sex: Sex,
    pub exercise_level: ExerciseLevel,
    pub diabetes_type: DiabetesType,
    pub meals_per_day: u32,
}
