//! Closed response schemas for every gateway operation.
//!
//! Schemas are plain data. One tree per [`SchemaName`] renders the wire
//! descriptor handed to the generation capability and drives the response
//! validator in [`crate::domain::contract::validator`].

use std::fmt;

use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaName {
    CalorieEstimate,
    MealCompare,
    MealSuggestions,
    ReminderCopy,
    DailySummary,
}

impl SchemaName {
    pub const ALL: [SchemaName; 5] = [
        SchemaName::CalorieEstimate,
        SchemaName::MealCompare,
        SchemaName::MealSuggestions,
        SchemaName::ReminderCopy,
        SchemaName::DailySummary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaName::CalorieEstimate => "calorie_estimate",
            SchemaName::MealCompare => "meal_compare",
            SchemaName::MealSuggestions => "meal_suggestions",
            SchemaName::ReminderCopy => "reminder_copy",
            SchemaName::DailySummary => "daily_summary",
        }
    }

    pub fn schema(&self) -> SchemaNode {
        match self {
            SchemaName::CalorieEstimate => calorie_estimate_schema(),
            SchemaName::MealCompare => meal_compare_schema(),
            SchemaName::MealSuggestions => meal_suggestions_schema(),
            SchemaName::ReminderCopy => reminder_copy_schema(),
            SchemaName::DailySummary => daily_summary_schema(),
        }
    }
}

impl fmt::Display for SchemaName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    Object(ObjectSchema),
    Array {
        items: Box<SchemaNode>,
        min_items: Option<usize>,
        max_items: Option<usize>,
    },
    String {
        allowed: Option<Vec<&'static str>>,
    },
    Number {
        minimum: Option<f64>,
        maximum: Option<f64>,
    },
    Boolean,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub node: SchemaNode,
    pub required: bool,
}

/// Object with a fixed property set; undeclared properties are never allowed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectSchema {
    pub fields: Vec<Field>,
}

impl ObjectSchema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn required(mut self, name: &'static str, node: SchemaNode) -> Self {
        self.fields.push(Field {
            name,
            node,
            required: true,
        });
        self
    }

    pub fn optional(mut self, name: &'static str, node: SchemaNode) -> Self {
        self.fields.push(Field {
            name,
            node,
            required: false,
        });
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn build(self) -> SchemaNode {
        SchemaNode::Object(self)
    }
}

impl SchemaNode {
    pub fn string() -> Self {
        SchemaNode::String { allowed: None }
    }

    pub fn one_of(values: &[&'static str]) -> Self {
        SchemaNode::String {
            allowed: Some(values.to_vec()),
        }
    }

    /// Any finite number, negatives included.
    pub fn number() -> Self {
        SchemaNode::Number {
            minimum: None,
            maximum: None,
        }
    }

    pub fn non_negative() -> Self {
        SchemaNode::Number {
            minimum: Some(0.0),
            maximum: None,
        }
    }

    pub fn bounded(minimum: f64, maximum: f64) -> Self {
        SchemaNode::Number {
            minimum: Some(minimum),
            maximum: Some(maximum),
        }
    }

    pub fn array_of(items: SchemaNode) -> Self {
        SchemaNode::Array {
            items: Box::new(items),
            min_items: None,
            max_items: None,
        }
    }

    pub fn array_between(items: SchemaNode, min_items: Option<usize>, max_items: Option<usize>) -> Self {
        SchemaNode::Array {
            items: Box::new(items),
            min_items,
            max_items,
        }
    }

    pub fn strings() -> Self {
        Self::array_of(Self::string())
    }

    fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::Object(_) => "object",
            SchemaNode::Array { .. } => "array",
            SchemaNode::String { .. } => "string",
            SchemaNode::Number { .. } => "number",
            SchemaNode::Boolean => "boolean",
        }
    }

    /// JSON Schema rendering for strict structured output.
    ///
    /// Strict mode requires every property to be listed as required, so
    /// optional properties are rendered as required-but-nullable.
    pub fn to_json_schema(&self) -> Value {
        self.render(false)
    }

    fn render(&self, nullable: bool) -> Value {
        let type_value = if nullable {
            json!([self.type_name(), "null"])
        } else {
            json!(self.type_name())
        };

        let mut out = Map::new();
        out.insert("type".to_string(), type_value);

        match self {
            SchemaNode::Object(object) => {
                let mut properties = Map::new();
                let mut required = Vec::with_capacity(object.fields.len());
                for field in &object.fields {
                    properties.insert(field.name.to_string(), field.node.render(!field.required));
                    required.push(Value::String(field.name.to_string()));
                }
                out.insert("properties".to_string(), Value::Object(properties));
                out.insert("required".to_string(), Value::Array(required));
                out.insert("additionalProperties".to_string(), Value::Bool(false));
            }
            SchemaNode::Array {
                items,
                min_items,
                max_items,
            } => {
                out.insert("items".to_string(), items.render(false));
                if let Some(min) = min_items {
                    out.insert("minItems".to_string(), json!(min));
                }
                if let Some(max) = max_items {
                    out.insert("maxItems".to_string(), json!(max));
                }
            }
            SchemaNode::String { allowed } => {
                if let Some(values) = allowed {
                    out.insert("enum".to_string(), json!(values));
                }
            }
            SchemaNode::Number { minimum, maximum } => {
                if let Some(min) = minimum {
                    out.insert("minimum".to_string(), json!(min));
                }
                if let Some(max) = maximum {
                    out.insert("maximum".to_string(), json!(max));
                }
            }
            SchemaNode::Boolean => {}
        }

        Value::Object(out)
    }
}

/// Macro object; `kcal` is required or optional depending on the caller.
///
/// Every response schema requires `kcal`. The optional form describes caller
/// supplied macros, where `kcal` may be omitted and is never overwritten.
pub fn macros_schema(kcal_required: bool) -> SchemaNode {
    let object = ObjectSchema::new();
    let object = if kcal_required {
        object.required("kcal", SchemaNode::non_negative())
    } else {
        object.optional("kcal", SchemaNode::non_negative())
    };

    object
        .required("protein_g", SchemaNode::non_negative())
        .required("fat_g", SchemaNode::non_negative())
        .required("carb_g", SchemaNode::non_negative())
        .build()
}

fn per_macro(node: SchemaNode) -> SchemaNode {
    ObjectSchema::new()
        .required("protein_g", node.clone())
        .required("carb_g", node.clone())
        .required("fat_g", node)
        .build()
}

pub const MAX_ESTIMATE_ITEMS: usize = 8;
pub const MAX_SUGGESTION_ACTIONS: usize = 8;
pub const MAX_COPY_LINES: usize = 7;
pub const SUMMARY_POINTS_MIN: usize = 3;
pub const SUMMARY_POINTS_MAX: usize = 4;

pub const ACTION_KINDS: [&str; 7] = ["portion", "swap", "timing", "order", "add", "remove", "other"];

pub fn calorie_estimate_schema() -> SchemaNode {
    let food_item = ObjectSchema::new()
        .required("name", SchemaNode::string())
        .required("display_name", SchemaNode::string())
        .required("category", SchemaNode::string())
        .required("cooking_method", SchemaNode::string())
        .required("grams", SchemaNode::non_negative())
        .required("kcal", SchemaNode::non_negative())
        .required("nutrition_per_100g", macros_schema(true))
        .required("confidence", SchemaNode::bounded(0.0, 1.0))
        .required("notes", SchemaNode::strings())
        .build();

    let calories_range = ObjectSchema::new()
        .required("low", SchemaNode::non_negative())
        .required("high", SchemaNode::non_negative())
        .build();

    ObjectSchema::new()
        .required(
            "items",
            SchemaNode::array_between(food_item, None, Some(MAX_ESTIMATE_ITEMS)),
        )
        .required("totals", macros_schema(true))
        .required("calories_range", calories_range)
        .required("assumptions", SchemaNode::strings())
        .required("warnings", SchemaNode::strings())
        .required("model_info", SchemaNode::string())
        .build()
}

pub fn meal_compare_schema() -> SchemaNode {
    let meal_evaluation = ObjectSchema::new()
        .required("target", SchemaNode::non_negative())
        .required("actual", SchemaNode::non_negative())
        .required("difference", SchemaNode::number())
        .required("status", SchemaNode::string())
        .required("percent_of_target", SchemaNode::non_negative())
        .build();

    let daily_evaluation = ObjectSchema::new()
        .required("target_daily", SchemaNode::non_negative())
        .required("consumed_so_far", SchemaNode::non_negative())
        .required("after_meal", SchemaNode::non_negative())
        .required("remaining", SchemaNode::number())
        .required("will_exceed_by", SchemaNode::number())
        .required("percent_of_daily_target_after_meal", SchemaNode::non_negative())
        .build();

    let flags = ObjectSchema::new()
        .required("per_meal_exceeded_any", SchemaNode::Boolean)
        .required("daily_exceeded_any", SchemaNode::Boolean)
        .required("over_per_meal", SchemaNode::strings())
        .required("over_daily", SchemaNode::strings())
        .build();

    let progress_bars = ObjectSchema::new()
        .required("per_meal_percent", per_macro(SchemaNode::non_negative()))
        .required("daily_percent_after_meal", per_macro(SchemaNode::non_negative()))
        .build();

    ObjectSchema::new()
        .required("per_meal_evaluation", per_macro(meal_evaluation))
        .required("daily_evaluation_post_meal", per_macro(daily_evaluation))
        .required("flags", flags)
        .required("progress_bars", progress_bars)
        .required("notes", SchemaNode::strings())
        .required("model_info", SchemaNode::string())
        .build()
}

pub fn meal_suggestions_schema() -> SchemaNode {
    let action = ObjectSchema::new()
        .required("kind", SchemaNode::one_of(&ACTION_KINDS))
        .required("text", SchemaNode::string())
        .optional("estimated_effect", SchemaNode::string())
        .build();

    ObjectSchema::new()
        .required(
            "actions",
            SchemaNode::array_between(action, None, Some(MAX_SUGGESTION_ACTIONS)),
        )
        .required("adjusted_macros_after_actions", macros_schema(true))
        .required("rationale", SchemaNode::strings())
        .required("model_info", SchemaNode::string())
        .build()
}

pub fn reminder_copy_schema() -> SchemaNode {
    ObjectSchema::new()
        .required("type", SchemaNode::string())
        .required("placeholders", SchemaNode::strings())
        .required(
            "lines",
            SchemaNode::array_between(SchemaNode::string(), None, Some(MAX_COPY_LINES)),
        )
        .required("model_info", SchemaNode::string())
        .build()
}

pub fn daily_summary_schema() -> SchemaNode {
    let points = || {
        SchemaNode::array_between(
            SchemaNode::string(),
            Some(SUMMARY_POINTS_MIN),
            Some(SUMMARY_POINTS_MAX),
        )
    };

    ObjectSchema::new()
        .required("summary_points", points())
        .required("next_day_focus", points())
        .required("macro_overview", per_macro(SchemaNode::string()))
        .required("alerts", SchemaNode::strings())
        .required("model_info", SchemaNode::string())
        .build()
}
