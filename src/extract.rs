// 🔍 Field Extractor - Monetary value extraction from nested JSON
// Both submission snapshots carry amounts as strings ("3000.00") or numbers;
// everything funnels through coerce() so the two shapes reduce to the same f64.

use serde_json::Value;

// ============================================================================
// ERROR TAXONOMY
// ============================================================================

/// Fatal extraction errors. Anything here aborts the run before a report is
/// written; non-fatal conditions (pattern not found, field mismatch) are
/// modeled as data, not errors.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditError {
    /// Required structure is absent: a section, a role entry, or an asserted
    /// total with no default policy.
    MissingField { field: String },

    /// Value exists but is unusable: non-numeric, or negative where
    /// negativity is disallowed.
    InvalidValue { field: String, value: String },
}

impl AuditError {
    pub fn missing(field: impl Into<String>) -> Self {
        AuditError::MissingField {
            field: field.into(),
        }
    }

    pub fn invalid(field: impl Into<String>, value: impl Into<String>) -> Self {
        AuditError::InvalidValue {
            field: field.into(),
            value: value.into(),
        }
    }

    /// The field the error refers to
    pub fn field(&self) -> &str {
        match self {
            AuditError::MissingField { field } => field,
            AuditError::InvalidValue { field, .. } => field,
        }
    }
}

impl std::fmt::Display for AuditError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuditError::MissingField { field } => {
                write!(f, "missing required field: {}", field)
            }
            AuditError::InvalidValue { field, value } => {
                write!(f, "invalid value for field {}: {}", field, value)
            }
        }
    }
}

impl std::error::Error for AuditError {}

// ============================================================================
// VALUE COERCION
// ============================================================================

/// Coerce a JSON value to f64. Accepts numbers and numeric strings;
/// everything else is an InvalidValue naming the offending field.
pub fn coerce(field: &str, value: &Value) -> Result<f64, AuditError> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| AuditError::invalid(field, n.to_string())),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| AuditError::invalid(field, s.clone())),
        other => Err(AuditError::invalid(field, other.to_string())),
    }
}

fn check_sign(field: &str, amount: f64, allow_negative: bool) -> Result<f64, AuditError> {
    if !allow_negative && amount < 0.0 {
        return Err(AuditError::invalid(field, format!("{:.2}", amount)));
    }
    Ok(amount)
}

// ============================================================================
// AMOUNT EXTRACTION
// ============================================================================

/// Extract an amount that may legitimately be absent. Missing key or
/// explicit null is None; present values must coerce and be non-negative.
pub fn optional_amount(container: &Value, field: &str) -> Result<Option<f64>, AuditError> {
    match container.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let amount = coerce(field, value)?;
            check_sign(field, amount, false)?;
            Ok(Some(amount))
        }
    }
}

/// Extract an optional itemized amount, defaulting a missing key to zero.
/// Negative values are rejected.
pub fn amount(container: &Value, field: &str) -> Result<f64, AuditError> {
    Ok(optional_amount(container, field)?.unwrap_or(0.0))
}

/// Same as amount(), with the non-negativity check waived.
pub fn amount_allow_negative(container: &Value, field: &str) -> Result<f64, AuditError> {
    match container.get(field) {
        None | Some(Value::Null) => Ok(0.0),
        Some(value) => coerce(field, value),
    }
}

/// Extract an asserted total that must be present. Missing key is a fatal
/// MissingField, not a zero default.
pub fn required_amount(container: &Value, field: &str) -> Result<f64, AuditError> {
    let value = required(container, field)?;
    let amount = coerce(field, value)?;
    check_sign(field, amount, false)
}

/// Required amount where negativity is expected (discretionary income).
pub fn required_amount_allow_negative(container: &Value, field: &str) -> Result<f64, AuditError> {
    let value = required(container, field)?;
    coerce(field, value)
}

// ============================================================================
// STRUCTURE NAVIGATION
// ============================================================================

/// Look up a required key on a container.
pub fn required<'a>(container: &'a Value, field: &str) -> Result<&'a Value, AuditError> {
    match container.get(field) {
        None | Some(Value::Null) => Err(AuditError::missing(field)),
        Some(value) => Ok(value),
    }
}

/// Descend a nested path of required keys. The error names the full dotted
/// path so the console message identifies where the structure broke.
pub fn section<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value, AuditError> {
    let mut current = root;
    for (depth, key) in path.iter().enumerate() {
        current = match current.get(key) {
            None | Some(Value::Null) => {
                return Err(AuditError::missing(path[..=depth].join(".")));
            }
            Some(value) => value,
        };
    }
    Ok(current)
}

/// A required section that must be a JSON array.
pub fn section_list<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Vec<Value>, AuditError> {
    let value = section(root, path)?;
    value
        .as_array()
        .ok_or_else(|| AuditError::invalid(path.join("."), "expected a list"))
}

// ============================================================================
// TESTS
// ============================================================================
