use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::trace;

use crate::model::{FieldValue, Number};

const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];
const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d/%m/%Y"];

/// Reads a field as a calendar date. Anything that does not look like a date is `None`.
pub(crate) fn parse_date(value: FieldValue) -> Option<NaiveDate> {
    let date = match value {
        FieldValue::Text(text) => parse_date_str(text.trim()),
        FieldValue::Number(number) => epoch_millis(number)
            .and_then(DateTime::from_timestamp_millis)
            .map(|dt| dt.date_naive()),
        FieldValue::Structured(_) | FieldValue::Absent => None,
    };
    if date.is_none() && !value.is_absent() {
        trace!(?value, "field is not a date");
    }
    date
}

/// Dates as written: an offset timestamp keeps the calendar day of its own offset.
fn parse_date_str(text: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .map(|dt| dt.date())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        })
}

fn epoch_millis(number: Number) -> Option<i64> {
    match number {
        Number::I64(n) => Some(n),
        Number::U64(n) => i64::try_from(n).ok(),
        Number::F64(n) if n.is_finite() && n.fract() == 0.0 => Some(n as i64),
        Number::F64(_) => None,
    }
}
