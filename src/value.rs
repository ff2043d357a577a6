//! Leaf payloads stored in a config tree.
//!
//! A leaf holds a single [`Value`]: either a scalar or a `List` of values.
//! `Json` carries anything the decoder could not map onto a scalar (nested
//! arrays or objects found inside a value node) so it can be written back
//! unchanged.

use serde::{Serialize, Serializer};
use serde_json::Number;

/// Tagged leaf value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    String(String),
    List(Vec<Value>),
    /// Opaque JSON kept verbatim.
    Json(serde_json::Value),
}

impl Value {
    /// Short name of the active variant, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Double(_) => "double",
            Value::String(_) => "string",
            Value::List(_) => "list",
            Value::Json(_) => "json",
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The element typed reads look at: the first element of a non-empty
    /// list, or the value itself for scalars.
    pub(crate) fn first_scalar(&self) -> Option<&Value> {
        match self {
            Value::List(items) => items.first(),
            other => Some(other),
        }
    }

    /// Natural JSON representation of this value.
    ///
    /// Non-finite doubles have no JSON form and encode as `null`.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(i) => serde_json::Value::from(*i),
            Value::Long(l) => serde_json::Value::from(*l),
            Value::Double(d) => double_to_json(*d),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::List(items) => {
                serde_json::Value::Array(items.iter().map(Value::to_json).collect())
            }
            Value::Json(json) => json.clone(),
        }
    }

    /// Decode one JSON element of a value node.
    ///
    /// The number's literal decides its type: with a `.` it is a `Double`,
    /// otherwise an integer (`1e3` included) stored as `Int` when it fits in
    /// 32 bits and `Long` when it fits in 64. Integers beyond that, fractions
    /// too large for `f64`, arrays and objects are kept as opaque JSON.
    pub fn from_json(json: &serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Number(n) => {
                let literal = n.to_string();
                let decoded = if literal.contains('.') {
                    n.as_f64().map(Value::Double)
                } else {
                    whole_number(&literal)
                        .map(|i| i32::try_from(i).map_or(Value::Long(i), Value::Int))
                };
                decoded.unwrap_or_else(|| Value::Json(json.clone()))
            }
            other => Value::Json(other.clone()),
        }
    }
}

/// Exact value of an integer literal such as `42`, `-7` or `1e3`.
///
/// `None` when the literal is not a whole number or does not fit in `i64`.
fn whole_number(literal: &str) -> Option<i64> {
    let (mantissa, exponent) = match literal.split_once(['e', 'E']) {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().ok()?),
        None => (literal, 0),
    };
    let mut value: i64 = mantissa.parse().ok()?;
    if exponent >= 0 {
        for _ in 0..exponent {
            if value == 0 {
                break;
            }
            value = value.checked_mul(10)?;
        }
    } else {
        for _ in 0..exponent.unsigned_abs() {
            if value == 0 {
                break;
            }
            if value % 10 != 0 {
                return None;
            }
            value /= 10;
        }
    }
    Some(value)
}

/// JSON number for a double, always written with a `.` so it decodes back
/// as a `Double`. Non-finite values become `null`.
fn double_to_json(d: f64) -> serde_json::Value {
    let Some(number) = Number::from_f64(d) else {
        return serde_json::Value::Null;
    };
    let literal = number.to_string();
    if literal.contains('.') {
        return serde_json::Value::Number(number);
    }
    let (mantissa, exponent) = literal
        .split_once(['e', 'E'])
        .unwrap_or((literal.as_str(), ""));
    let rewritten = if exponent.is_empty() {
        format!("{mantissa}.0")
    } else {
        format!("{mantissa}.0e{exponent}")
    };
    rewritten
        .parse::<Number>()
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Number(number))
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i32(*i),
            Value::Long(l) => serializer.serialize_i64(*l),
            Value::Double(d) => double_to_json(*d).serialize(serializer),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => items.serialize(serializer),
            Value::Json(json) => json.serialize(serializer),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i)
    }
}

impl From<i64> for Value {
    fn from(l: i64) -> Self {
        Value::Long(l)
    }
}

impl From<f64> for Value {
    fn from(d: f64) -> Self {
        Value::Double(d)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Value::Null)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(&json)
    }
}

/// Typed extraction from a stored [`Value`].
///
/// Returns `None` when the variant does not match; callers cannot tell a type
/// mismatch from an absent value.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.clone())
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromValue for i32 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(i) => Some(i64::from(*i)),
            Value::Long(l) => Some(*l),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Double(d) => Some(*d),
            _ => None,
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for serde_json::Value {
    fn from_value(value: &Value) -> Option<Self> {
        Some(value.to_json())
    }
}
