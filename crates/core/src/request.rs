//! Analysis request types and input validation

use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::error::ValidationError;

/// Request body as received on the wire.
///
/// Every field is optional at this stage so that a missing field is reported
/// as a validation failure instead of a deserialization error. Unknown fields
/// are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAnalysisRequest {
    #[serde(default)]
    pub age: Option<JsonValue>,
    #[serde(default)]
    pub gender: Option<JsonValue>,
    #[serde(default)]
    pub prescription: Option<JsonValue>,
}

/// A request whose required fields are all present and truthy.
///
/// Field values are kept as the exact text the client sent so they can be
/// interpolated into the prompt verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub age: String,
    pub gender: String,
    pub prescription: String,
}

impl RawAnalysisRequest {
    /// Read a request from an arbitrary JSON body; anything but an object is rejected.
    pub fn from_value(value: JsonValue) -> Result<Self, ValidationError> {
        match value {
            JsonValue::Object(_) => {
                serde_json::from_value(value).map_err(|_| ValidationError::NotAnObject)
            }
            _ => Err(ValidationError::NotAnObject),
        }
    }

    /// Check that `age`, `gender` and `prescription` are all present and truthy.
    ///
    /// Fields are checked in that order and the first failure is returned.
    /// The raw request is only borrowed, so repeated calls yield the same verdict.
    pub fn validate(&self) -> Result<AnalysisRequest, ValidationError> {
        let age = require("age", self.age.as_ref())?;
        let gender = require("gender", self.gender.as_ref())?;
        let prescription = require("prescription", self.prescription.as_ref())?;

        Ok(AnalysisRequest {
            age,
            gender,
            prescription,
        })
    }
}

fn require(field: &'static str, value: Option<&JsonValue>) -> Result<String, ValidationError> {
    value
        .and_then(truthy_text)
        .ok_or(ValidationError::MissingField { field })
}

/// Render a truthy scalar as text; `None` for null, false, zero, empty string,
/// arrays and objects.
fn truthy_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) if !s.is_empty() => Some(s.clone()),
        JsonValue::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(number_text(n)),
        JsonValue::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Integral floats (`75.0`) render without a fractional part, like `75`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
