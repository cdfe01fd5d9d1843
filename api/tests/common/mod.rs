#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use clap::Parser;
use heal_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_partial_json, header, method, path},
};

pub const API_KEY: &str = "sk-test";

pub fn test_args(llm_base_url: &str, extra: &[&str]) -> Arc<Args> {
    let mut argv = vec![
        "heal-api",
        "--openai-api-key",
        API_KEY,
        "--openai-base-url",
        llm_base_url,
    ];
    argv.extend_from_slice(extra);

    Arc::new(Args::try_parse_from(argv).unwrap())
}

pub fn test_server(llm: &MockServer) -> TestServer {
    test_server_with(llm, &[])
}

pub fn test_server_with(llm: &MockServer, extra: &[&str]) -> TestServer {
    let args = test_args(&format!("{}/v1", llm.uri()), extra);
    let app = router(state(args).unwrap()).unwrap();
    TestServer::new(app).unwrap()
}

/// Wraps a model reply in a Chat Completions response body.
pub fn completion(content: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
}

/// Mounts a completions endpoint that answers requests for `schema_name`.
pub async fn mount_completion(
    llm: &MockServer,
    schema_name: &str,
    model: &str,
    content: &str,
    expected_calls: u64,
) {
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", format!("Bearer {API_KEY}").as_str()))
        .and(body_partial_json(json!({
            "model": model,
            "response_format": {
                "type": "json_schema",
                "json_schema": {"name": schema_name, "strict": true}
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion(content)))
        .expect(expected_calls)
        .mount(llm)
        .await;
}

pub async fn mount_unreachable(llm: &MockServer) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(completion("{}")))
        .expect(0)
        .mount(llm)
        .await;
}

pub fn estimate_reply() -> Value {
    json!({
        "items": [{
            "name": "white_rice",
            "display_name": "White rice",
            "category": "grain",
            "cooking_method": "steamed",
            "grams": 180,
            "kcal": 234,
            "nutrition_per_100g": {"kcal": 130, "protein_g": 2.7, "fat_g": 0.3, "carb_g": 28},
            "confidence": 0.7,
            "notes": []
        }],
        "totals": {"kcal": 234, "protein_g": 4.9, "fat_g": 0.5, "carb_g": 50.4},
        "calories_range": {"low": 200, "high": 270},
        "assumptions": ["plain rice, no butter"],
        "warnings": [],
        "model_info": ""
    })
}

fn meal_evaluation(target: f64, actual: f64) -> Value {
    json!({
        "target": target,
        "actual": actual,
        "difference": actual - target,
        "status": if actual > target { "over" } else { "within" },
        "percent_of_target": actual / target * 100.0
    })
}

fn daily_evaluation(target: f64, consumed: f64, meal: f64) -> Value {
    json!({
        "target_daily": target,
        "consumed_so_far": consumed,
        "after_meal": consumed + meal,
        "remaining": target - consumed - meal,
        "will_exceed_by": consumed + meal - target,
        "percent_of_daily_target_after_meal": (consumed + meal) / target * 100.0
    })
}

pub fn comparison_reply() -> Value {
    json!({
        "per_meal_evaluation": {
            "protein_g": meal_evaluation(60.0, 35.0),
            "carb_g": meal_evaluation(70.0, 90.0),
            "fat_g": meal_evaluation(30.0, 25.0)
        },
        "daily_evaluation_post_meal": {
            "protein_g": daily_evaluation(180.0, 40.0, 35.0),
            "carb_g": daily_evaluation(210.0, 80.0, 90.0),
            "fat_g": daily_evaluation(90.0, 20.0, 25.0)
        },
        "flags": {
            "per_meal_exceeded_any": true,
            "daily_exceeded_any": false,
            "over_per_meal": ["carb_g"],
            "over_daily": []
        },
        "progress_bars": {
            "per_meal_percent": {"protein_g": 58.3, "carb_g": 128.6, "fat_g": 83.3},
            "daily_percent_after_meal": {"protein_g": 41.7, "carb_g": 81.0, "fat_g": 50.0}
        },
        "notes": ["Carbs are above the per-meal target"],
        "model_info": "gpt-4o-mini"
    })
}

pub fn compare_request() -> Value {
    json!({
        "per_meal_targets": {"protein_g": 60, "fat_g": 30, "carb_g": 70},
        "daily_targets": {"protein_g": 180, "fat_g": 90, "carb_g": 210, "kcal": 2370},
        "meals_per_day": 3,
        "daily_consumed_so_far": {"protein_g": 40, "fat_g": 20, "carb_g": 80},
        "current_meal": {"protein_g": 35, "fat_g": 25, "carb_g": 90},
        "meal_index": 2,
        "meal_name": "lunch",
        "diabetes_type": "T2D"
    })
}

pub fn png_bytes() -> Vec<u8> {
    use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

    let image = RgbImage::from_pixel(16, 16, Rgb([240, 220, 180]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(image)
        .write_to(&mut std::io::Cursor::new(&mut bytes), ImageFormat::Png)
        .unwrap();
    bytes
}
