use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DailySummary {
    pub summary_points: Vec<String>,
    pub next_day_focus: Vec<String>,
    pub macro_overview: MacroOverview,
    pub alerts: Vec<String>,
    pub model_info: String,
}

/// Free-form per-macro remarks, e.g. `"95 g of 110 g"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct MacroOverview {
    pub protein_g: String,
    pub carb_g: String,
    pub fat_g: String,
}
