use crate::domain::{
    budget::{
        entities::{BudgetResult, MacroSplit},
        ports::BudgetService,
        value_objects::{BudgetProfile, Sex},
    },
    common::{
        entities::macros::{
            KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN, MacroTargets,
        },
        services::Service,
    },
    contract::ports::{ImageNormalizer, LLMClient},
};

/// Mifflin–St Jeor basal metabolic rate in kcal/day.
pub fn basal_metabolic_rate(profile: &BudgetProfile) -> f64 {
    let sex_offset = match profile.sex {
        Sex::Male => 5.0,
        Sex::Female => -161.0,
    };

    10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * f64::from(profile.age) + sex_offset
}

pub fn total_daily_energy_expenditure(profile: &BudgetProfile) -> f64 {
    basal_metabolic_rate(profile) * profile.exercise_level.activity_factor()
}

/// Rounds the exact binary value to one decimal place, ties to even.
///
/// Scaling by ten first would round `30.15` (stored as 30.1499...) up.
pub fn round1(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Daily and per-meal macro targets for a validated profile.
///
/// Values stay unrounded until the daily figures are emitted. Per-meal
/// targets divide each emitted daily field and round it on its own, so their
/// sum may drift from the daily figure by up to 0.05 per meal.
pub fn compute_budget(profile: &BudgetProfile) -> BudgetResult {
    let tdee = total_daily_energy_expenditure(profile);
    let split = MacroSplit::for_diabetes_type(profile.diabetes_type);

    let daily_budget = MacroTargets {
        kcal: round1(tdee),
        protein_g: round1(tdee * split.protein / KCAL_PER_GRAM_PROTEIN),
        carb_g: round1(tdee * split.carb / KCAL_PER_GRAM_CARB),
        fat_g: round1(tdee * split.fat / KCAL_PER_GRAM_FAT),
    };

    let meals = f64::from(profile.meals_per_day);
    let per_meal_targets = MacroTargets {
        kcal: round1(daily_budget.kcal / meals),
        protein_g: round1(daily_budget.protein_g / meals),
        carb_g: round1(daily_budget.carb_g / meals),
        fat_g: round1(daily_budget.fat_g / meals),
    };

    BudgetResult {
        daily_budget,
        per_meal_targets,
        macro_split: split,
        meals_per_day: profile.meals_per_day,
    }
}

impl<LLM, IMG> BudgetService for Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImageNormalizer,
{
    fn compute_budget(&self, profile: BudgetProfile) -> BudgetResult {
        let result = compute_budget(&profile);
        tracing::debug!(
            daily_kcal = result.daily_budget.kcal,
            meals_per_day = result.meals_per_day,
            "computed budget"
        );
        result
    }
}
