//! Validation Utilities
//!
//! Payloads arrive as raw JSON so that a missing property and a property of
//! the wrong type can be told apart. [`PayloadFields`] performs that two-stage
//! check: every required field is tested for presence first, and only when
//! all are present are their types inspected.

use serde_json::Value;
use validator::ValidationErrors;

/// Outcome of the presence/type check on a raw payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldViolation {
    /// At least one required field is absent or empty.
    MissingProperty,
    /// All fields are present but at least one is not a string.
    WrongType,
}

/// Borrowed view over a JSON object for required-string extraction.
pub struct PayloadFields<'a> {
    payload: &'a Value,
}

impl<'a> PayloadFields<'a> {
    pub fn new(payload: &'a Value) -> Self {
        Self { payload }
    }

    /// Extract the named fields as strings, in order.
    ///
    /// Absent means missing, `null`, `false`, `0`, or an empty string.
    pub fn require_strings<const N: usize>(
        &self,
        names: [&str; N],
    ) -> Result<[&'a str; N], FieldViolation> {
        let values = names.map(|name| self.payload.get(name));

        if values.iter().any(|value| is_absent(*value)) {
            return Err(FieldViolation::MissingProperty);
        }

        let mut out = [""; N];
        for (slot, value) in out.iter_mut().zip(values) {
            *slot = value
                .and_then(Value::as_str)
                .ok_or(FieldViolation::WrongType)?;
        }

        Ok(out)
    }
}

fn is_absent(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::Bool(b)) => !b,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Array(_)) | Some(Value::Object(_)) => false,
    }
}

/// First human-readable message out of a set of validation errors.
pub fn validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|errs| errs.iter())
        .find_map(|e| e.message.clone().map(|m| m.to_string()))
        .unwrap_or_else(|| "Validation failed".into())
}
