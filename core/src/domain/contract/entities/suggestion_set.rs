use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::common::entities::macros::MacroTargets;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SuggestionSet {
    pub actions: Vec<SuggestedAction>,
    pub adjusted_macros_after_actions: MacroTargets,
    pub rationale: Vec<String>,
    pub model_info: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SuggestedAction {
    pub kind: ActionKind,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_effect: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Portion,
    Swap,
    Timing,
    Order,
    Add,
    Remove,
    Other,
}
