use std::{collections::BTreeMap, time::Duration};

use base64::{Engine as _, engine::general_purpose};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    budget::{
        entities::BudgetResult,
        services::compute_budget,
        value_objects::{BudgetProfile, DiabetesType},
    },
    common::entities::macros::Macros,
    contract::schema::SchemaName,
};

/// Canonical encoded image ready to be sent to the vision model.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedImage {
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl NormalizedImage {
    pub fn data_uri(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            general_purpose::STANDARD.encode(&self.data)
        )
    }
}

/// User turn sent to the generation capability.
#[derive(Debug, Clone, PartialEq)]
pub enum UserContent {
    Text(String),
    TextWithImage { text: String, image: NormalizedImage },
}

/// One schema-constrained call to the generation capability.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub system_prompt: String,
    pub user_content: UserContent,
    pub schema_name: SchemaName,
    pub response_schema: serde_json::Value,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct EstimateFoodInput {
    pub image_data: Vec<u8>,
}

/// Where the comparison gets its targets from.
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonTargets {
    Explicit {
        per_meal_targets: Macros,
        daily_targets: Macros,
        meals_per_day: u32,
    },
    /// Targets derived through the budget engine.
    FromProfile(BudgetProfile),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompareMealInput {
    pub targets: ComparisonTargets,
    pub daily_consumed_so_far: Macros,
    pub current_meal: Macros,
    pub meal_index: u32,
    pub meal_name: Option<String>,
    pub diabetes_type: Option<DiabetesType>,
}

/// Exact payload sent for a comparison; every number is caller-supplied or
/// computed by the budget engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompareMealPayload {
    pub per_meal_targets: Macros,
    pub daily_targets: Macros,
    pub daily_consumed_so_far: Macros,
    pub current_meal: Macros,
    pub meal_index: u32,
    pub meals_per_day: u32,
    pub meal_name: Option<String>,
    pub diabetes_type: Option<DiabetesType>,
}

impl From<CompareMealInput> for CompareMealPayload {
    fn from(input: CompareMealInput) -> Self {
        let (per_meal_targets, daily_targets, meals_per_day, diabetes_type) = match input.targets
        {
            ComparisonTargets::Explicit {
                per_meal_targets,
                daily_targets,
                meals_per_day,
            } => (
                per_meal_targets,
                daily_targets,
                meals_per_day,
                input.diabetes_type,
            ),
            ComparisonTargets::FromProfile(profile) => {
                let BudgetResult {
                    daily_budget,
                    per_meal_targets,
                    meals_per_day,
                    ..
                } = compute_budget(&profile);
                (
                    Macros::from(per_meal_targets),
                    Macros::from(daily_budget),
                    meals_per_day,
                    input.diabetes_type.or(Some(profile.diabetes_type)),
                )
            }
        };

        Self {
            per_meal_targets,
            daily_targets,
            daily_consumed_so_far: input.daily_consumed_so_far,
            current_meal: input.current_meal,
            meal_index: input.meal_index,
            meals_per_day,
            meal_name: input.meal_name,
            diabetes_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SuggestionsInput {
    /// Food estimate the suggestions refer to, as returned by `/estimate`.
    pub estimate: serde_json::Value,
    pub per_meal_targets: Macros,
    pub daily_remaining: Macros,
    pub meal_name: Option<String>,
    pub diabetes_type: Option<DiabetesType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    PhotoReminder,
    OverLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    #[default]
    Friendly,
    Coach,
    Neutral,
    Playful,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CopyInput {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub locale: String,
    pub user_name: Option<String>,
    pub meal_name: Option<String>,
    pub meals_per_day: Option<u32>,
    pub tone: Tone,
    /// Grams over target per macro, e.g. `{"carb_g": 30.0}`.
    pub over_limit: Option<BTreeMap<String, f64>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummaryInput {
    pub date: Option<NaiveDate>,
    pub diabetes_type: Option<DiabetesType>,
    pub meals: Vec<serde_json::Value>,
    pub daily_targets: Macros,
    pub total_consumed: Macros,
    pub flags: Option<serde_json::Value>,
    pub notes: Option<Vec<String>>,
}
