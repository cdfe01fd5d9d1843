use std::fmt;

use serde_json::Value;

use crate::domain::contract::schema::{ObjectSchema, SchemaNode};

/// One mismatch between a document and its schema, located by JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Checks `value` against a closed schema, collecting every violation.
pub fn validate(schema: &SchemaNode, value: &Value) -> Result<(), Vec<Violation>> {
    let mut violations = Vec::new();
    check_node(schema, value, "$", &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

/// Joins violations into a single reason string.
pub fn describe(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn check_node(node: &SchemaNode, value: &Value, path: &str, out: &mut Vec<Violation>) {
    match (node, value) {
        (SchemaNode::Object(object), Value::Object(_)) => check_object(object, value, path, out),
        (
            SchemaNode::Array {
                items,
                min_items,
                max_items,
            },
            Value::Array(elements),
        ) => {
            if let Some(min) = min_items.filter(|min| elements.len() < *min) {
                out.push(violation(
                    path,
                    format!("expected at least {min} items, found {}", elements.len()),
                ));
            }
            if let Some(max) = max_items.filter(|max| elements.len() > *max) {
                out.push(violation(
                    path,
                    format!("expected at most {max} items, found {}", elements.len()),
                ));
            }
            for (index, element) in elements.iter().enumerate() {
                check_node(items, element, &format!("{path}[{index}]"), out);
            }
        }
        (SchemaNode::String { allowed }, Value::String(s)) => {
            if let Some(values) = allowed.as_ref().filter(|v| !v.contains(&s.as_str())) {
                out.push(violation(
                    path,
                    format!("'{s}' is not one of {}", values.join(", ")),
                ));
            }
        }
        (SchemaNode::Number { minimum, maximum }, Value::Number(n)) => match n.as_f64() {
            Some(number) if number.is_finite() => {
                if let Some(min) = minimum.filter(|min| number < *min) {
                    out.push(violation(path, format!("{number} is below minimum {min}")));
                }
                if let Some(max) = maximum.filter(|max| number > *max) {
                    out.push(violation(path, format!("{number} is above maximum {max}")));
                }
            }
            _ => out.push(violation(path, "number is not finite")),
        },
        (SchemaNode::Boolean, Value::Bool(_)) => {}
        (expected, found) => out.push(violation(
            path,
            format!("expected {}, found {}", type_label(expected), value_label(found)),
        )),
    }
}

fn check_object(object: &ObjectSchema, value: &Value, path: &str, out: &mut Vec<Violation>) {
    let Some(map) = value.as_object() else {
        return;
    };

    for key in map.keys() {
        if object.field(key).is_none() {
            out.push(violation(
                &format!("{path}.{key}"),
                "property is not declared by the schema",
            ));
        }
    }

    for field in &object.fields {
        let field_path = format!("{path}.{}", field.name);
        match map.get(field.name) {
            None if field.required => {
                out.push(violation(&field_path, "required property is missing"));
            }
            None => {}
            Some(Value::Null) if !field.required => {}
            Some(child) => check_node(&field.node, child, &field_path, out),
        }
    }
}

fn violation(path: &str, message: impl Into<String>) -> Violation {
    Violation {
        path: path.to_string(),
        message: message.into(),
    }
}

fn type_label(node: &SchemaNode) -> &'static str {
    match node {
        SchemaNode::Object(_) => "object",
        SchemaNode::Array { .. } => "array",
        SchemaNode::String { .. } => "string",
        SchemaNode::Number { .. } => "number",
        SchemaNode::Boolean => "boolean",
    }
}

fn value_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
