use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{budget::value_objects::DiabetesType, common::entities::macros::MacroTargets};

/// Fractions of daily energy assigned to each macro.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MacroSplit {
    pub protein: f64,
    pub carb: f64,
    pub fat: f64,
}

impl MacroSplit {
    pub fn for_diabetes_type(diabetes_type: DiabetesType) -> Self {
        match diabetes_type {
            DiabetesType::T2D => Self {
                protein: 0.30,
                carb: 0.35,
                fat: 0.35,
            },
            DiabetesType::T1D => Self {
                protein: 0.25,
                carb: 0.40,
                fat: 0.35,
            },
            DiabetesType::Unknown => Self {
                protein: 0.25,
                carb: 0.45,
                fat: 0.30,
            },
        }
    }

    pub fn total(&self) -> f64 {
        self.protein + self.carb + self.fat
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BudgetResult {
    pub daily_budget: MacroTargets,
    pub per_meal_targets: MacroTargets,
    pub macro_split: MacroSplit,
    pub meals_per_day: u32,
}
