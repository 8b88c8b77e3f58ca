use super::*;

/// Reads a non-negative count from an untrusted JSON field, returning 0 for
/// anything that is missing or cannot be read as one.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn coerce_count(value: Option<&Value>) -> u64 {
  match value {
    Some(Value::Number(n)) => n.as_u64().or_else(|| {
      n.as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0)
        .map(|f| f.trunc() as u64)
    }),
    Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
    None
    | Some(Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_)) => {
      None
    }
  }
  .unwrap_or_default()
}

pub(crate) fn coerce_text(value: Option<&Value>) -> Option<String> {
  match value {
    Some(Value::String(s)) => Some(s.clone()),
    Some(Value::Number(n)) => Some(n.to_string()),
    None
    | Some(Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_)) => {
      None
    }
  }
}

pub(crate) fn permalink(id: u64) -> String {
  format!("{PERMALINK_BASE_URL}{id}")
}
