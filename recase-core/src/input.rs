use serde_json::Value;

use crate::Error;

/// Input to the conversion pipeline.
///
/// `Absent` stands for "no value provided" (a JSON `null`, a missing field)
/// and is distinct from an empty string, though both convert to `""`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input<'a> {
    Absent,
    Text(&'a str),
}

impl<'a> From<&'a str> for Input<'a> {
    fn from(s: &'a str) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<&'a String> for Input<'a> {
    fn from(s: &'a String) -> Self {
        Self::Text(s)
    }
}

impl<'a> From<Option<&'a str>> for Input<'a> {
    fn from(s: Option<&'a str>) -> Self {
        s.map_or(Self::Absent, Self::Text)
    }
}

impl<'a> TryFrom<&'a Value> for Input<'a> {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(Self::Absent),
            Value::String(s) => Ok(Self::Text(s)),
            other => Err(Error::InvalidInputType {
                found: json_type_name(other),
            }),
        }
    }
}

/// Name of a JSON value's type, as reported in errors.
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
