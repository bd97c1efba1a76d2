use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A caller-defined record, as fetched from the hosted data store.
///
/// The shape is a plain JSON object, so rows deserialize verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub Map<String, Value>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, mostly useful when assembling fixtures.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = Value;

    /// Only JSON objects are records; anything else is handed back.
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// Read access to named fields, implemented by anything the search layer can filter.
///
/// # Example
///
/// ```
/// use league_core::{FieldValue, Fields};
///
/// struct Player {
///     name: String,
///     shirt: u8,
/// }
///
/// impl Fields for Player {
///     fn field(&self, name: &str) -> FieldValue<'_> {
///         match name {
///             "name" => FieldValue::Text(&self.name),
///             "shirt" => FieldValue::from(self.shirt),
///             _ => FieldValue::Absent,
///         }
///     }
/// }
/// ```
pub trait Fields {
    fn field(&self, name: &str) -> FieldValue<'_>;
}

impl Fields for Record {
    fn field(&self, name: &str) -> FieldValue<'_> {
        self.get(name).map(FieldValue::from).unwrap_or_default()
    }
}

/// The kind of a field value, borrowed from its record.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(Number),
    /// Objects, arrays and booleans.
    Structured(&'a Value),
    /// Missing key or `null`.
    #[default]
    Absent,
}

impl<'a> FieldValue<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Null => FieldValue::Absent,
            Value::String(s) => FieldValue::Text(s),
            Value::Number(n) => Number::from_json(n)
                .map(FieldValue::Number)
                .unwrap_or(FieldValue::Structured(value)),
            Value::Bool(_) | Value::Array(_) | Value::Object(_) => FieldValue::Structured(value),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(value: &'a str) -> Self {
        FieldValue::Text(value)
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

macro_rules! field_value_from_number {
    ($($ty:ty => $variant:ident as $target:ty),* $(,)?) => {
        $(
            impl From<$ty> for FieldValue<'_> {
                fn from(value: $ty) -> Self {
                    FieldValue::Number(Number::$variant(value as $target))
                }
            }
        )*
    };
}

field_value_from_number!(
    i8 => I64 as i64,
    i16 => I64 as i64,
    i32 => I64 as i64,
    i64 => I64 as i64,
    u8 => U64 as u64,
    u16 => U64 as u64,
    u32 => U64 as u64,
    u64 => U64 as u64,
    f32 => F64 as f64,
    f64 => F64 as f64,
);

/// A numeric field value, kept in its original flavour so the decimal form is exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    I64(i64),
    U64(u64),
    F64(f64),
}

impl Number {
    fn from_json(n: &serde_json::Number) -> Option<Self> {
        n.as_u64()
            .map(Number::U64)
            .or_else(|| n.as_i64().map(Number::I64))
            .or_else(|| n.as_f64().map(Number::F64))
    }
}

/// Plain decimals, switching to exponent form (`1e+21`, `1e-7`) outside `[1e-6, 1e21)`.
impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::I64(n) => write!(f, "{n}"),
            Number::U64(n) => write!(f, "{n}"),
            Number::F64(n) if *n != 0.0 && (n.abs() >= 1e21 || n.abs() < 1e-6) => {
                let exp = format!("{n:e}");
                match exp.split_once('e') {
                    Some((mantissa, power)) if !power.starts_with('-') => {
                        write!(f, "{mantissa}e+{power}")
                    }
                    _ => f.write_str(&exp),
                }
            }
            Number::F64(n) => write!(f, "{n}"),
        }
    }
}
