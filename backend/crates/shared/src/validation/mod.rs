//! Request Validation
//!
//! A generic validator driven by [`rule::RuleSet`] tables. Tables are pure
//! data; this module is the only place that interprets them.
//!
//! ## Semantics
//! - Sanitizers run before checks and are written back into the body
//! - Scalars are checked through their textual form; body fields with text
//!   rules are written back as strings, numeric-only fields keep their type
//! - Fail-fast per field: only the first failing rule of a field is reported
//! - Exhaustive across fields: every field in the table is evaluated, and
//!   failures are reported in table order

pub mod rule;

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub use rule::{Check, FieldRule, Location, Rule, RuleSet, Sanitizer};

/// One failed field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
    /// The rejected value (`null` when the field was absent)
    pub value: Value,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value: value.unwrap_or(Value::Null),
        }
    }
}

/// Everything a rule table can look at
#[derive(Debug, Clone, Default)]
pub struct RequestInput {
    pub body: Value,
    pub query: HashMap<String, String>,
    pub path: HashMap<String, String>,
}

impl RequestInput {
    fn lookup(&self, location: Location, field: &str) -> Option<Value> {
        let value = match location {
            Location::Body => self.body.get(field).cloned(),
            Location::Query => self.query.get(field).cloned().map(Value::String),
            Location::Path => self.path.get(field).cloned().map(Value::String),
        };
        value.filter(|v| !v.is_null())
    }

    fn write_back(&mut self, field: &str, value: String) {
        if let Some(object) = self.body.as_object_mut() {
            object.insert(field.to_string(), Value::String(value));
        }
    }
}

/// Textual form a check runs against
///
/// Arrays and objects have none, so they fail every check.
fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Run `rules` against `input`
///
/// On success the input holds the sanitized body.
pub fn validate(rules: &RuleSet, input: &mut RequestInput) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    for field_rule in rules {
        let raw = input.lookup(field_rule.location, field_rule.field);

        if raw.is_none() && field_rule.optional {
            continue;
        }

        let mut text = raw.as_ref().map_or(Some(String::new()), as_text);

        if let (Some(value), Some(_)) = (text.as_mut(), raw.as_ref()) {
            for sanitizer in field_rule.sanitizers {
                *value = sanitizer.apply(value);
            }
            // Text fields reach the handler as strings, whatever scalar was sent
            if field_rule.location == Location::Body && field_rule.reads_text() {
                input.write_back(field_rule.field, value.clone());
            }
        }

        let failed = field_rule.rules.iter().find(|rule| match &text {
            Some(value) => !rule.check.passes(value),
            None => true,
        });

        if let Some(rule) = failed {
            errors.push(FieldError::new(field_rule.field, rule.message, raw));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
