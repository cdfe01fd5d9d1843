use std::{collections::BTreeMap, sync::LazyLock};

use chrono::NaiveDate;
use heal_core::domain::{
    budget::value_objects::DiabetesType,
    common::entities::macros::Macros,
    contract::value_objects::{
        CompareMealInput, ComparisonTargets, CopyInput, DailySummaryInput, NotificationType,
        SuggestionsInput, Tone,
    },
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::application::http::{
    budget::validators::BudgetValidator, server::api_entities::api_error::ApiError,
};

/// BCP 47-ish language tag: `en`, `pt-BR`, `zh_Hant`.
static LOCALE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z]{2,3}([-_][A-Za-z0-9]{2,8})*$").expect("locale pattern is valid")
});

/// Extra nutrient keys such as `fiber_g` are accepted and ignored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, Validate)]
pub struct MacrosValidator {
    #[validate(range(min = 0.0, message = "protein_g must be non-negative"))]
    pub protein_g: f64,
    #[validate(range(min = 0.0, message = "fat_g must be non-negative"))]
    pub fat_g: f64,
    #[validate(range(min = 0.0, message = "carb_g must be non-negative"))]
    pub carb_g: f64,
    #[validate(range(min = 0.0, message = "kcal must be non-negative"))]
    pub kcal: Option<f64>,
}

impl From<MacrosValidator> for Macros {
    fn from(payload: MacrosValidator) -> Self {
        Self {
            protein_g: payload.protein_g,
            fat_g: payload.fat_g,
            carb_g: payload.carb_g,
            kcal: payload.kcal,
        }
    }
}

/// Either explicit `per_meal_targets`, `daily_targets` and `meals_per_day`,
/// or a `profile` the targets are computed from.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CompareMealValidator {
    #[validate(nested)]
    pub per_meal_targets: Option<MacrosValidator>,
    #[validate(nested)]
    pub daily_targets: Option<MacrosValidator>,
    #[validate(range(min = 1, message = "meals_per_day must be at least 1"))]
    pub meals_per_day: Option<u32>,
    #[validate(nested)]
    pub profile: Option<BudgetValidator>,
    #[validate(nested)]
    pub daily_consumed_so_far: MacrosValidator,
    #[validate(nested)]
    pub current_meal: MacrosValidator,
    #[validate(range(min = 1, message = "meal_index must be at least 1"))]
    #[schema(example = 2)]
    pub meal_index: u32,
    #[schema(example = "lunch")]
    pub meal_name: Option<String>,
    pub diabetes_type: Option<DiabetesType>,
}

impl TryFrom<CompareMealValidator> for CompareMealInput {
    type Error = ApiError;

    fn try_from(payload: CompareMealValidator) -> Result<Self, Self::Error> {
        let targets = match (
            payload.profile,
            payload.per_meal_targets,
            payload.daily_targets,
            payload.meals_per_day,
        ) {
            (Some(profile), None, None, None) => ComparisonTargets::FromProfile(profile.into()),
            (None, Some(per_meal_targets), Some(daily_targets), Some(meals_per_day)) => {
                ComparisonTargets::Explicit {
                    per_meal_targets: per_meal_targets.into(),
                    daily_targets: daily_targets.into(),
                    meals_per_day,
                }
            }
            (Some(_), _, _, _) => {
                return Err(ApiError::BadRequest(
                    "profile cannot be combined with explicit targets".to_string(),
                ));
            }
            (None, _, _, _) => {
                return Err(ApiError::BadRequest(
                    "per_meal_targets, daily_targets and meals_per_day are required without a profile"
                        .to_string(),
                ));
            }
        };

        Ok(Self {
            targets,
            daily_consumed_so_far: payload.daily_consumed_so_far.into(),
            current_meal: payload.current_meal.into(),
            meal_index: payload.meal_index,
            meal_name: payload.meal_name,
            diabetes_type: payload.diabetes_type,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct SuggestionsValidator {
    /// Food estimate as returned by `/estimate`.
    #[schema(value_type = Object)]
    pub estimate: Map<String, Value>,
    #[validate(nested)]
    pub per_meal_targets: MacrosValidator,
    #[validate(nested)]
    pub daily_remaining: MacrosValidator,
    pub meal_name: Option<String>,
    pub diabetes_type: Option<DiabetesType>,
}

impl From<SuggestionsValidator> for SuggestionsInput {
    fn from(payload: SuggestionsValidator) -> Self {
        Self {
            estimate: Value::Object(payload.estimate),
            per_meal_targets: payload.per_meal_targets.into(),
            daily_remaining: payload.daily_remaining.into(),
            meal_name: payload.meal_name,
            diabetes_type: payload.diabetes_type,
        }
    }
}

fn default_locale() -> String {
    "en".to_string()
}

fn validate_over_limit(over_limit: &BTreeMap<String, f64>) -> Result<(), ValidationError> {
    if over_limit.values().all(|grams| grams.is_finite()) {
        Ok(())
    } else {
        Err(ValidationError::new("over_limit_not_finite"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CopyValidator {
    #[serde(rename = "type")]
    pub kind: NotificationType,
    #[serde(default = "default_locale")]
    #[validate(regex(path = *LOCALE_REGEX, message = "locale must be a language tag such as en or pt-BR"))]
    #[schema(example = "en")]
    pub locale: String,
    pub user_name: Option<String>,
    #[schema(example = "dinner")]
    pub meal_name: Option<String>,
    #[validate(range(min = 1, message = "meals_per_day must be at least 1"))]
    pub meals_per_day: Option<u32>,
    #[serde(default)]
    pub tone: Tone,
    /// Grams over target per macro, e.g. `{"carb_g": 30}`.
    #[validate(custom(function = "validate_over_limit"))]
    pub over_limit: Option<BTreeMap<String, f64>>,
}

impl From<CopyValidator> for CopyInput {
    fn from(payload: CopyValidator) -> Self {
        Self {
            kind: payload.kind,
            locale: payload.locale,
            user_name: payload.user_name,
            meal_name: payload.meal_name,
            meals_per_day: payload.meals_per_day,
            tone: payload.tone,
            over_limit: payload.over_limit,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct DailySummaryValidator {
    #[schema(example = "2025-01-31")]
    pub date: Option<NaiveDate>,
    pub diabetes_type: Option<DiabetesType>,
    #[schema(value_type = Vec<Object>)]
    pub meals: Vec<Map<String, Value>>,
    #[validate(nested)]
    pub daily_targets: MacrosValidator,
    #[validate(nested)]
    pub total_consumed: MacrosValidator,
    #[schema(value_type = Option<Object>)]
    pub flags: Option<Map<String, Value>>,
    pub notes: Option<Vec<String>>,
}

impl From<DailySummaryValidator> for DailySummaryInput {
    fn from(payload: DailySummaryValidator) -> Self {
        Self {
            date: payload.date,
            diabetes_type: payload.diabetes_type,
            meals: payload.meals.into_iter().map(Value::Object).collect(),
            daily_targets: payload.daily_targets.into(),
            total_consumed: payload.total_consumed.into(),
            flags: payload.flags.map(Value::Object),
            notes: payload.notes,
        }
    }
}
