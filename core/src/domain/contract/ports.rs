use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    contract::{
        entities::{DailySummary, FoodEstimate, MealComparison, ReminderCopy, SuggestionSet},
        value_objects::{
            CompareMealInput, CopyInput, DailySummaryInput, EstimateFoodInput, GenerationRequest,
            NormalizedImage, SuggestionsInput,
        },
    },
};

/// External generation capability. Returns the raw text of the model output.
///
/// Implementations may claim schema conformance; callers validate anyway.
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    fn generate(
        &self,
        request: GenerationRequest,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Turns arbitrary uploaded bytes into a canonical encoded image.
#[cfg_attr(test, mockall::automock)]
pub trait ImageNormalizer: Send + Sync {
    fn normalize(&self, raw: &[u8]) -> Result<NormalizedImage, CoreError>;
}

/// Schema-bound operations delegated to the generation capability.
pub trait ContractService: Send + Sync {
    fn estimate_food(
        &self,
        input: EstimateFoodInput,
    ) -> impl Future<Output = Result<FoodEstimate, CoreError>> + Send;

    fn compare_meal(
        &self,
        input: CompareMealInput,
    ) -> impl Future<Output = Result<MealComparison, CoreError>> + Send;

    fn generate_suggestions(
        &self,
        input: SuggestionsInput,
    ) -> impl Future<Output = Result<SuggestionSet, CoreError>> + Send;

    fn generate_copy(
        &self,
        input: CopyInput,
    ) -> impl Future<Output = Result<ReminderCopy, CoreError>> + Send;

    fn generate_daily_summary(
        &self,
        input: DailySummaryInput,
    ) -> impl Future<Output = Result<DailySummary, CoreError>> + Send;
}
