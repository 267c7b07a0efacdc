//! Input validation for strict mode.
//!
//! Messages are written for the calling agent: they name the argument, say
//! what is wrong in Korean and suggest how to fix it.

use serde_json::Value;
use std::fmt;

/// Validation error with detailed, user-friendly messages.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// The argument that failed validation
    pub field: String,
    /// Human-readable error message in Korean
    pub message: String,
    /// Suggestion for how to fix the error
    pub suggestion: Option<String>,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            suggestion: None,
        }
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Create error for empty required field
    pub fn empty_field(field: &str, label: &str) -> Self {
        Self::new(field, format!("{}이(가) 비어 있습니다", label))
            .with_suggestion(format!("사용자가 말한 {}을(를) 그대로 전달해 주세요", label))
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, ". {}", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Collection of validation errors with formatted output.
#[derive(Debug, Default)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get formatted error message suitable for MCP response
    pub fn to_mcp_message(&self) -> String {
        if self.errors.is_empty() {
            return String::new();
        }

        let mut parts = vec![format!("입력 검증 실패: {}건\n", self.errors.len())];

        for (i, error) in self.errors.iter().enumerate() {
            parts.push(format!("{}. {}", i + 1, error));
        }

        parts.push(String::new());
        parts.push("입력을 확인한 뒤 다시 호출해 주세요.".to_string());

        parts.join("\n")
    }

    /// Ok if no errors, Err with formatted message otherwise
    pub fn into_result(self) -> Result<(), String> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self.to_mcp_message())
        }
    }
}

/// Validate that a string is not empty after trimming
pub fn validate_required(value: &str, field: &str, label: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Validate that a JSON value carries at least some text somewhere inside it
pub fn validate_has_text(value: &Value, field: &str, label: &str, errors: &mut ValidationErrors) {
    if collect_text(value).trim().is_empty() {
        errors.add(ValidationError::empty_field(field, label));
    }
}

/// Flatten every string (and number/bool) inside a JSON value into one line.
pub fn collect_text(value: &Value) -> String {
    let mut out = String::new();
    push_text(value, &mut out);
    out
}

fn push_text(value: &Value, out: &mut String) {
    match value {
        Value::Null => {}
        Value::String(text) => push_word(out, text),
        Value::Bool(flag) => push_word(out, &flag.to_string()),
        Value::Number(number) => push_word(out, &number.to_string()),
        Value::Array(items) => items.iter().for_each(|item| push_text(item, out)),
        Value::Object(map) => map.values().for_each(|item| push_text(item, out)),
    }
}

fn push_word(out: &mut String, word: &str) {
    if word.trim().is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(word.trim());
}
