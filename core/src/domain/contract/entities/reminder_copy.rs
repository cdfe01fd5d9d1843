use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Notification copy. Placeholder tokens such as `{meal_name}` are left
/// in `lines` verbatim for the client to fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct ReminderCopy {
    #[serde(rename = "type")]
    pub kind: String,
    pub placeholders: Vec<String>,
    pub lines: Vec<String>,
    pub model_info: String,
}
