use serde_json::Value as JsonValue;

/// Type a raw CSV field the way dataframe loaders do: empty fields become
/// null, numeric-looking fields become numbers, everything else stays text.
pub fn parse_scalar(field: &str) -> JsonValue {
    if field.is_empty() {
        return JsonValue::Null;
    }
    if let Ok(integer) = field.parse::<i64>() {
        return JsonValue::from(integer);
    }
    if let Ok(float) = field.parse::<f64>() {
        // from_f64 rejects NaN and infinities, which then stay textual.
        if let Some(number) = serde_json::Number::from_f64(float) {
            return JsonValue::Number(number);
        }
    }
    JsonValue::String(field.to_string())
}
