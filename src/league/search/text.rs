use crate::model::FieldValue;

/// Case-insensitive substring test of a field against an already lowercased needle.
pub(crate) fn contains_text(value: FieldValue, needle: &str) -> bool {
    match value {
        FieldValue::Text(text) => text.to_lowercase().contains(needle),
        FieldValue::Number(number) => number.to_string().contains(needle),
        FieldValue::Structured(value) => serde_json::to_string(value)
            .map(|json| json.to_lowercase().contains(needle))
            .unwrap_or_default(),
        FieldValue::Absent => false,
    }
}
