// Rust guideline compliant 2026-02-06

//! Validation of pipeline documents against the field rules.

use crate::error::{PipelineError, Result};
use crate::schema::{FieldRule, Kind, SchemaKind};
use serde_json::Value;
use std::fmt;
use std::path::Path;
use tracing::debug;

/// One rule a document breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Document kind the rule belongs to.
    pub schema: SchemaKind,
    /// Field path, e.g. `adminAccounts[1]`.
    pub path: String,
    /// What is wrong.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            write!(f, "{}: {}", self.schema, self.message)
        } else {
            write!(f, "{}.{}: {}", self.schema, self.path, self.message)
        }
    }
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Kind the document satisfies, if any.
    pub matched: Option<SchemaKind>,
    /// Violations against every kind, when none matched.
    pub violations: Vec<Violation>,
}

impl ValidationReport {
    /// Whether the document satisfies at least one kind.
    pub fn is_valid(&self) -> bool {
        self.matched.is_some()
    }
}

/// Validates a parsed document against both kinds.
///
/// The first kind the document satisfies wins. Unknown fields are ignored.
pub fn validate_document(document: &Value) -> ValidationReport {
    let mut report = ValidationReport::default();

    for schema in SchemaKind::ALL {
        let violations = check_schema(schema, document);
        if violations.is_empty() {
            return ValidationReport {
                matched: Some(schema),
                violations: Vec::new(),
            };
        }
        report.violations.extend(violations);
    }

    report
}

/// Reads and validates one file.
///
/// # Returns
///
/// The validation report of the document.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid JSON.
pub fn validate_file(path: &Path) -> Result<ValidationReport> {
    let text = std::fs::read_to_string(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let document: Value = serde_json::from_str(&text).map_err(|e| PipelineError::InvalidJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let report = validate_document(&document);
    debug!(path = %path.display(), matched = ?report.matched, "Validated pipeline config");
    Ok(report)
}

fn check_schema(schema: SchemaKind, document: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    let Some(object) = document.as_object() else {
        violations.push(Violation {
            schema,
            path: String::new(),
            message: "expected a JSON object".to_string(),
        });
        return violations;
    };

    for rule in schema.rules() {
        let mut push = |path: String, message: String| {
            violations.push(Violation {
                schema,
                path,
                message,
            })
        };

        match object.get(rule.name) {
            None => {
                if rule.required {
                    push(rule.name.to_string(), "field required".to_string());
                }
            }
            Some(Value::Null) if !rule.required => {}
            Some(Value::Array(items)) if rule.many => {
                for (idx, item) in items.iter().enumerate() {
                    if let Err(message) = check_value(rule, item) {
                        push(format!("{}[{}]", rule.name, idx), message);
                    }
                }
            }
            Some(value) => {
                if let Err(message) = check_value(rule, value) {
                    push(rule.name.to_string(), message);
                }
            }
        }
    }

    violations
}

fn check_value(rule: &FieldRule, value: &Value) -> std::result::Result<(), String> {
    match rule.kind {
        Kind::Text { min, max, pattern } => {
            let Some(text) = value.as_str() else {
                return Err(expected("a string", rule.many));
            };
            let len = text.chars().count();
            if len < min {
                return Err(format!("must be at least {} characters", min));
            }
            if len > max {
                return Err(format!("must be at most {} characters", max));
            }
            if let Some(re) = pattern {
                if !re.is_match(text) {
                    return Err(format!("{:?} does not match {}", text, re.as_str()));
                }
            }
            Ok(())
        }
        Kind::Integer { min, max } => {
            let Some(number) = as_integer(value) else {
                return Err(expected("an integer", rule.many));
            };
            if number < min || number > max {
                return Err(format!("must be between {} and {}", min, max));
            }
            Ok(())
        }
        Kind::Choice(options) => match value.as_str() {
            Some(choice) if options.contains(&choice) => Ok(()),
            _ => Err(format!("must be one of: {}", options.join(", "))),
        },
        Kind::Object => {
            if value.is_object() {
                Ok(())
            } else {
                Err("expected an object".to_string())
            }
        }
    }
}

fn expected(what: &str, many: bool) -> String {
    if many {
        format!("expected {} or a list of them", what)
    } else {
        format!("expected {}", what)
    }
}

/// Integer coercion for numeric rules.
///
/// Accepts integers, whole floats, booleans (as 0 or 1) and strings holding
/// one of those numbers after trimming.
fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Bool(flag) => Some(i64::from(*flag)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole))
        }
        _ => value.as_i64().or_else(|| value.as_f64().and_then(whole)),
    }
}

fn whole(float: f64) -> Option<i64> {
    (float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64)
        .then(|| float as i64)
}
