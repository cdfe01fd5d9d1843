use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::instrument;

use crate::domain::{
    common::{
        OperationSettings, entities::app_errors::CoreError, generate_uuid_v7, services::Service,
    },
    contract::{
        entities::{DailySummary, FoodEstimate, MealComparison, ReminderCopy, SuggestionSet},
        ports::{ContractService, ImageNormalizer, LLMClient},
        prompts::{
            COMPARE_SYSTEM_PROMPT, COPY_SYSTEM_PROMPT, DAILY_SUMMARY_SYSTEM_PROMPT,
            ESTIMATE_SYSTEM_PROMPT, ESTIMATE_USER_PROMPT, SUGGESTIONS_SYSTEM_PROMPT,
        },
        schema::{SchemaName, SchemaNode},
        validator::{describe, validate},
        value_objects::{
            CompareMealInput, CompareMealPayload, CopyInput, DailySummaryInput, EstimateFoodInput,
            GenerationRequest, SuggestionsInput, UserContent,
        },
    },
};

/// Parses raw model output. Anything that is not a JSON document counts as a
/// failed generation rather than a contract breach.
pub fn parse_response(raw: &str) -> Result<Value, CoreError> {
    serde_json::from_str(raw.trim()).map_err(|e| {
        tracing::error!("LLM returned non-JSON output: {}", e);
        CoreError::GenerationFailure(format!("model output is not valid JSON: {}", e))
    })
}

/// Validates a parsed response against its closed schema, then applies the
/// only repair allowed: stamping an empty `model_info` with the model used.
pub fn enforce_contract(schema: &SchemaNode, mut value: Value, model: &str) -> Result<Value, CoreError> {
    validate(schema, &value).map_err(|violations| {
        let reason = describe(&violations);
        tracing::warn!(violations = violations.len(), "LLM response broke schema: {}", reason);
        CoreError::SchemaViolation(reason)
    })?;

    if let Some(model_info) = value
        .get_mut("model_info")
        .filter(|v| v.as_str().is_some_and(|s| s.trim().is_empty()))
    {
        *model_info = Value::String(model.to_string());
    }

    Ok(value)
}

fn to_payload<P: Serialize>(payload: &P) -> Result<String, CoreError> {
    serde_json::to_string(payload).map_err(|e| {
        tracing::error!("Failed to serialize request payload: {}", e);
        CoreError::InternalServerError
    })
}

impl<LLM, IMG> Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImageNormalizer,
{
    /// One schema-constrained round trip: call, parse, validate, repair, decode.
    #[instrument(
        skip_all,
        fields(schema = %schema_name, model = %settings.model, call_id = %generate_uuid_v7())
    )]
    async fn run_contract<T>(
        &self,
        schema_name: SchemaName,
        settings: &OperationSettings,
        system_prompt: &str,
        user_content: UserContent,
    ) -> Result<T, CoreError>
    where
        T: DeserializeOwned + Send,
    {
        let schema = schema_name.schema();
        let request = GenerationRequest {
            system_prompt: system_prompt.to_string(),
            user_content,
            schema_name,
            response_schema: schema.to_json_schema(),
            model: settings.model.clone(),
            temperature: settings.temperature,
            timeout: settings.timeout,
        };

        let raw = tokio::time::timeout(settings.timeout, self.llm_client.generate(request))
            .await
            .map_err(|_| {
                tracing::error!(timeout_secs = settings.timeout.as_secs_f64(), "LLM call timed out");
                CoreError::GenerationFailure(format!(
                    "{} call timed out after {:?}",
                    schema_name, settings.timeout
                ))
            })??;

        let value = parse_response(&raw)?;
        let value = enforce_contract(&schema, value, &settings.model)?;

        let decoded = serde_json::from_value(value).map_err(|e| {
            tracing::warn!("LLM response does not decode into {}: {}", schema_name, e);
            CoreError::SchemaViolation(format!("$: {}", e))
        })?;

        tracing::info!("LLM response accepted");
        Ok(decoded)
    }
}

impl<LLM, IMG> ContractService for Service<LLM, IMG>
where
    LLM: LLMClient,
    IMG: ImageNormalizer,
{
    async fn estimate_food(&self, input: EstimateFoodInput) -> Result<FoodEstimate, CoreError> {
        if input.image_data.is_empty() {
            return Err(CoreError::InvalidInput("empty image file".to_string()));
        }

        let image = self.image_normalizer.normalize(&input.image_data)?;
        tracing::debug!(
            raw_bytes = input.image_data.len(),
            normalized_bytes = image.data.len(),
            "image normalized"
        );

        self.run_contract(
            SchemaName::CalorieEstimate,
            &self.gateway_config.estimate,
            ESTIMATE_SYSTEM_PROMPT,
            UserContent::TextWithImage {
                text: ESTIMATE_USER_PROMPT.to_string(),
                image,
            },
        )
        .await
    }

    async fn compare_meal(&self, input: CompareMealInput) -> Result<MealComparison, CoreError> {
        let payload = CompareMealPayload::from(input);

        self.run_contract(
            SchemaName::MealCompare,
            &self.gateway_config.compare,
            COMPARE_SYSTEM_PROMPT,
            UserContent::Text(to_payload(&payload)?),
        )
        .await
    }

    async fn generate_suggestions(
        &self,
        input: SuggestionsInput,
    ) -> Result<SuggestionSet, CoreError> {
        self.run_contract(
            SchemaName::MealSuggestions,
            &self.gateway_config.suggestions,
            SUGGESTIONS_SYSTEM_PROMPT,
            UserContent::Text(to_payload(&input)?),
        )
        .await
    }

    async fn generate_copy(&self, input: CopyInput) -> Result<ReminderCopy, CoreError> {
        self.run_contract(
            SchemaName::ReminderCopy,
            &self.gateway_config.copy,
            COPY_SYSTEM_PROMPT,
            UserContent::Text(to_payload(&input)?),
        )
        .await
    }

    async fn generate_daily_summary(
        &self,
        input: DailySummaryInput,
    ) -> Result<DailySummary, CoreError> {
        self.run_contract(
            SchemaName::DailySummary,
            &self.gateway_config.daily_summary,
            DAILY_SUMMARY_SYSTEM_PROMPT,
            UserContent::Text(to_payload(&input)?),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use std::{
        sync::{Arc, Mutex},
        time::Duration,
    };

    use serde_json::json;

    use super::*;
    use crate::domain::{
        budget::value_objects::DiabetesType,
        common::{GatewayConfig, entities::macros::Macros},
        contract::{
            entities::ActionKind,
            ports::MockImageNormalizer,
            value_objects::{ComparisonTargets, NormalizedImage, NotificationType, Tone},
        },
    };

    /// Records every request and answers with a canned result.
    #[derive(Clone)]
    struct StubLLMClient {
        response: Result<String, CoreError>,
        delay: Option<Duration>,
        requests: Arc<Mutex<Vec<GenerationRequest>>>,
    }

    impl StubLLMClient {
        fn replying(body: Value) -> Self {
            Self::raw(Ok(body.to_string()))
        }

        fn raw(response: Result<String, CoreError>) -> Self {
            Self {
                response,
                delay: None,
                requests: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn delayed(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        fn requests(&self) -> Vec<GenerationRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl LLMClient for StubLLMClient {
        async fn generate(&self, request: GenerationRequest) -> Result<String, CoreError> {
            self.requests.lock().unwrap().push(request);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.response.clone()
        }
    }

    fn unused_normalizer() -> MockImageNormalizer {
        let mut normalizer = MockImageNormalizer::new();
        normalizer.expect_normalize().times(0);
        normalizer
    }

    fn service(
        llm: StubLLMClient,
        normalizer: MockImageNormalizer,
    ) -> Service<StubLLMClient, MockImageNormalizer> {
        Service::new(llm, normalizer, GatewayConfig::default())
    }

    fn estimate_body() -> Value {
        json!({
            "items": [{
                "name": "grilled_chicken_breast",
                "display_name": "Grilled chicken breast",
                "category": "protein",
                "cooking_method": "grilled",
                "grams": 150,
                "kcal": 248,
                "nutrition_per_100g": {"kcal": 165, "protein_g": 31, "fat_g": 3.6, "carb_g": 0},
                "confidence": 0.8,
                "notes": []
            }],
            "totals": {"kcal": 248, "protein_g": 46.5, "fat_g": 5.4, "carb_g": 0},
            "calories_range": {"low": 210, "high": 290},
            "assumptions": ["skinless"],
            "warnings": [],
            "model_info": "gpt-4o"
        })
    }

    fn meal_evaluation() -> Value {
        json!({"target": 60, "actual": 45, "difference": -15, "status": "under", "percent_of_target": 75})
    }

    fn daily_evaluation() -> Value {
        json!({
            "target_daily": 180,
            "consumed_so_far": 60,
            "after_meal": 105,
            "remaining": 75,
            "will_exceed_by": -75,
            "percent_of_daily_target_after_meal": 58.3
        })
    }

    fn comparison_body() -> Value {
        json!({
            "per_meal_evaluation": {
                "protein_g": meal_evaluation(),
                "carb_g": meal_evaluation(),
                "fat_g": meal_evaluation()
            },
            "daily_evaluation_post_meal": {
                "protein_g": daily_evaluation(),
                "carb_g": daily_evaluation(),
                "fat_g": daily_evaluation()
            },
            "flags": {
                "per_meal_exceeded_any": false,
                "daily_exceeded_any": false,
                "over_per_meal": [],
                "over_daily": []
            },
            "progress_bars": {
                "per_meal_percent": {"protein_g": 75, "carb_g": 75, "fat_g": 75},
                "daily_percent_after_meal": {"protein_g": 58.3, "carb_g": 58.3, "fat_g": 58.3}
            },
            "notes": [],
            "model_info": "gpt-4o-mini"
        })
    }

    fn compare_input() -> CompareMealInput {
        CompareMealInput {
            targets: ComparisonTargets::Explicit {
                per_meal_targets: Macros::new(60.0, 30.0, 70.0),
                daily_targets: Macros::new(180.0, 90.0, 210.0).with_kcal(2400.0),
                meals_per_day: 3,
            },
            daily_consumed_so_far: Macros::new(60.0, 25.0, 70.0),
            current_meal: Macros::new(45.0, 20.0, 50.0),
            meal_index: 2,
            meal_name: Some("lunch".to_string()),
            diabetes_type: Some(DiabetesType::T1D),
        }
    }

    fn copy_input() -> CopyInput {
        CopyInput {
            kind: NotificationType::PhotoReminder,
            locale: "en".to_string(),
            user_name: None,
            meal_name: Some("breakfast".to_string()),
            meals_per_day: Some(3),
            tone: Tone::Friendly,
            over_limit: None,
        }
    }

    #[tokio::test]
    async fn test_estimate_food_sends_normalized_image() {
        let llm = StubLLMClient::replying(estimate_body());
        let mut normalizer = MockImageNormalizer::new();
        normalizer.expect_normalize().times(1).returning(|_| {
            Ok(NormalizedImage {
                mime_type: "image/jpeg".to_string(),
                data: vec![1, 2, 3],
            })
        });

        let estimate = service(llm.clone(), normalizer)
            .estimate_food(EstimateFoodInput {
                image_data: vec![9, 9, 9],
            })
            .await
            .unwrap();

        assert_eq!(estimate.items.len(), 1);
        assert_eq!(estimate.totals.kcal, 248.0);

        let requests = llm.requests();
        assert_eq!(requests.len(), 1);
        let request = &requests[0];
        assert_eq!(request.schema_name, SchemaName::CalorieEstimate);
        assert_eq!(request.model, "gpt-4o");
        assert_eq!(request.temperature, 0.2);
        assert_eq!(request.timeout, Duration::from_secs(60));
        assert_eq!(request.system_prompt, ESTIMATE_SYSTEM_PROMPT);
        match &request.user_content {
            UserContent::TextWithImage { image, .. } => assert_eq!(image.data, vec![1, 2, 3]),
            other => panic!("unexpected user content: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_unsupported_image_skips_generation() {
        let llm = StubLLMClient::replying(estimate_body());
        let mut normalizer = MockImageNormalizer::new();
        normalizer
            .expect_normalize()
            .returning(|_| Err(CoreError::UnsupportedInput("not an image".to_string())));

        let err = service(llm.clone(), normalizer)
            .estimate_food(EstimateFoodInput {
                image_data: b"definitely not a picture".to_vec(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::UnsupportedInput(_)));
        assert!(llm.requests().is_empty());
    }

    #[tokio::test]
    async fn test_empty_image_is_invalid_input() {
        let llm = StubLLMClient::replying(estimate_body());

        let err = service(llm.clone(), unused_normalizer())
            .estimate_food(EstimateFoodInput { image_data: vec![] })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::InvalidInput(_)));
        assert!(llm.requests().is_empty());
    }

    #[tokio::test]
    async fn test_compare_meal_passes_numbers_through() {
        let llm = StubLLMClient::replying(comparison_body());

        let comparison = service(llm.clone(), unused_normalizer())
            .compare_meal(compare_input())
            .await
            .unwrap();
        assert_eq!(comparison.per_meal_evaluation.protein_g.difference, -15.0);
        assert_eq!(comparison.daily_evaluation_post_meal.fat_g.will_exceed_by, -75.0);

        let request = &llm.requests()[0];
        assert_eq!(request.schema_name, SchemaName::MealCompare);
        assert_eq!(request.model, "gpt-4o-mini");
        assert_eq!(request.temperature, 0.0);
        assert_eq!(request.timeout, Duration::from_secs(45));

        let UserContent::Text(payload) = &request.user_content else {
            panic!("comparison payload must be text");
        };
        let payload: Value = serde_json::from_str(payload).unwrap();
        assert_eq!(
            payload,
            json!({
                "per_meal_targets": {"protein_g": 60.0, "fat_g": 30.0, "carb_g": 70.0},
                "daily_targets": {"protein_g": 180.0, "fat_g": 90.0, "carb_g": 210.0, "kcal": 2400.0},
                "daily_consumed_so_far": {"protein_g": 60.0, "fat_g": 25.0, "carb_g": 70.0},
                "current_meal": {"protein_g": 45.0, "fat_g": 20.0, "carb_g": 50.0},
                "meal_index": 2,
                "meals_per_day": 3,
                "meal_name": "lunch",
                "diabetes_type": "T1D"
            })
        );
    }

    #[tokio::test]
    async fn test_payload_is_deterministic() {
        let llm = StubLLMClient::replying(comparison_body());
        let service = service(llm.clone(), unused_normalizer());

        service.compare_meal(compare_input()).await.unwrap();
        service.compare_meal(compare_input()).await.unwrap();

        let requests = llm.requests();
        assert_eq!(requests[0], requests[1]);
    }

    #[tokio::test]
    async fn test_extra_top_level_key_is_schema_violation() {
        let mut body = comparison_body();
        body["confidence"] = json!(0.9);
        let llm = StubLLMClient::replying(body);

        let err = service(llm, unused_normalizer())
            .compare_meal(compare_input())
            .await
            .unwrap_err();

        match err {
            CoreError::SchemaViolation(reason) => assert!(reason.contains("$.confidence")),
            other => panic!("expected schema violation, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_missing_required_key_is_schema_violation() {
        let mut body = comparison_body();
        body.as_object_mut().unwrap().remove("flags");
        let llm = StubLLMClient::replying(body);

        let err = service(llm, unused_normalizer())
            .compare_meal(compare_input())
            .await
            .unwrap_err();

        assert_eq!(err.reason(), "schema_violation");
    }

    #[tokio::test]
    async fn test_non_json_output_is_generation_failure() {
        let llm = StubLLMClient::raw(Ok("Sure! Here is your summary:".to_string()));

        let err = service(llm, unused_normalizer())
            .generate_copy(copy_input())
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::GenerationFailure(_)));
    }

    #[tokio::test]
    async fn test_capability_error_is_propagated() {
        let llm = StubLLMClient::raw(Err(CoreError::GenerationFailure(
            "LLM API returned error: 500".to_string(),
        )));

        let err = service(llm, unused_normalizer())
            .generate_copy(copy_input())
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::GenerationFailure("LLM API returned error: 500".to_string())
        );
    }

    #[tokio::test]
    async fn test_timeout_is_generation_failure() {
        let llm = StubLLMClient::raw(Ok("{}".to_string())).delayed(Duration::from_millis(500));
        let mut config = GatewayConfig::default();
        config.copy.timeout = Duration::from_millis(20);
        let service = Service::new(llm.clone(), unused_normalizer(), config);

        let err = service.generate_copy(copy_input()).await.unwrap_err();

        match err {
            CoreError::GenerationFailure(reason) => assert!(reason.contains("timed out")),
            other => panic!("expected generation failure, got {other:?}"),
        }
        assert_eq!(llm.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_copy_keeps_placeholders_and_stamps_model_info() {
        let llm = StubLLMClient::replying(json!({
            "type": "photo_reminder",
            "placeholders": ["{meal_name}"],
            "lines": ["Snap your {meal_name} before the first bite", "{meal_name} time! Photo first"],
            "model_info": ""
        }));

        let copy = service(llm, unused_normalizer())
            .generate_copy(copy_input())
            .await
            .unwrap();

        assert_eq!(copy.lines[0], "Snap your {meal_name} before the first bite");
        assert_eq!(copy.placeholders, vec!["{meal_name}".to_string()]);
        assert_eq!(copy.model_info, "gpt-4o-mini");
    }

    #[tokio::test]
    async fn test_suggestions_reject_unknown_action_kind() {
        let llm = StubLLMClient::replying(json!({
            "actions": [{"kind": "meditate", "text": "breathe"}],
            "adjusted_macros_after_actions": {"kcal": 500, "protein_g": 30, "fat_g": 20, "carb_g": 50},
            "rationale": [],
            "model_info": "gpt-4o-mini"
        }));

        let err = service(llm, unused_normalizer())
            .generate_suggestions(SuggestionsInput {
                estimate: estimate_body(),
                per_meal_targets: Macros::new(60.0, 30.0, 70.0),
                daily_remaining: Macros::new(120.0, 60.0, 140.0),
                meal_name: None,
                diabetes_type: None,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::SchemaViolation(_)));
    }

    #[tokio::test]
    async fn test_suggestions_accept_null_estimated_effect() {
        let llm = StubLLMClient::replying(json!({
            "actions": [
                {"kind": "portion", "text": "Leave 50 g of rice", "estimated_effect": "-14 g carb"},
                {"kind": "order", "text": "Eat the salad first", "estimated_effect": null}
            ],
            "adjusted_macros_after_actions": {"kcal": 520, "protein_g": 35, "fat_g": 18, "carb_g": 55},
            "rationale": ["keeps carbs under the per-meal target"],
            "model_info": "gpt-4o-mini"
        }));

        let suggestions = service(llm, unused_normalizer())
            .generate_suggestions(SuggestionsInput {
                estimate: estimate_body(),
                per_meal_targets: Macros::new(60.0, 30.0, 70.0),
                daily_remaining: Macros::new(120.0, 60.0, 140.0),
                meal_name: Some("dinner".to_string()),
                diabetes_type: Some(DiabetesType::T2D),
            })
            .await
            .unwrap();

        assert_eq!(suggestions.actions[0].kind, ActionKind::Portion);
        assert_eq!(suggestions.actions[1].estimated_effect, None);
    }

    #[tokio::test]
    async fn test_daily_summary_needs_three_points() {
        let llm = StubLLMClient::replying(json!({
            "summary_points": ["Good protein", "Carbs high at dinner"],
            "next_day_focus": ["a", "b", "c"],
            "macro_overview": {"protein_g": "110/120", "carb_g": "190/160", "fat_g": "70/80"},
            "alerts": [],
            "model_info": "gpt-4o-mini"
        }));

        let err = service(llm, unused_normalizer())
            .generate_daily_summary(DailySummaryInput {
                date: None,
                diabetes_type: None,
                meals: vec![json!({"name": "breakfast", "kcal": 420})],
                daily_targets: Macros::new(120.0, 80.0, 160.0),
                total_consumed: Macros::new(110.0, 70.0, 190.0),
                flags: None,
                notes: None,
            })
            .await
            .unwrap_err();

        match err {
            CoreError::SchemaViolation(reason) => assert!(reason.contains("$.summary_points")),
            other => panic!("expected schema violation, got {other:?}"),
        }
    }

    #[test]
    fn test_enforce_contract_keeps_supplied_model_info() {
        let schema = SchemaName::ReminderCopy.schema();
        let value = json!({
            "type": "over_limit",
            "placeholders": [],
            "lines": [],
            "model_info": "gpt-4o-mini-2024-07-18"
        });

        let repaired = enforce_contract(&schema, value, "gpt-4o-mini").unwrap();
        assert_eq!(repaired["model_info"], "gpt-4o-mini-2024-07-18");
    }

    #[test]
    fn test_parse_response_trims_whitespace() {
        assert_eq!(parse_response("  {\"a\": 1}\n").unwrap(), json!({"a": 1}));
        assert!(parse_response("```json\n{}\n```").is_err());
    }
}
