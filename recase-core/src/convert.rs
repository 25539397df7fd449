//! Conversion entry points.

use serde_json::Value;

use crate::{CaseStyle, Input, Result, normalize, reassemble, tokenize};

/// Convert `input` to `style`.
///
/// Absent input converts to an empty string without being tokenized.
pub fn format<'a>(input: impl Into<Input<'a>>, style: CaseStyle) -> String {
    match input.into() {
        Input::Absent => {
            log::debug!("absent input, returning empty {} result", style);
            String::new()
        }
        Input::Text(raw) => reassemble(&normalize(tokenize(raw)), style),
    }
}

/// Convert a loosely typed value to `style`.
///
/// Accepts a JSON string or `null`; every other type fails with
/// [`Error::InvalidInputType`](crate::Error::InvalidInputType).
pub fn format_value(value: &Value, style: CaseStyle) -> Result<String> {
    let input = Input::try_from(value)?;
    Ok(format(input, style))
}

/// Convert a string to camelCase (e.g., "hello_world" -> "helloWorld")
pub fn to_camel_case(s: &str) -> String {
    format(s, CaseStyle::Camel)
}

/// Convert a string to PascalCase (e.g., "hello_world" -> "HelloWorld")
pub fn to_pascal_case(s: &str) -> String {
    format(s, CaseStyle::Pascal)
}

/// Convert a string to kebab-case (e.g., "HelloWorld" -> "hello-world")
pub fn to_kebab_case(s: &str) -> String {
    format(s, CaseStyle::Kebab)
}

/// Convert a string to snake_case (e.g., "HelloWorld" -> "hello_world")
pub fn to_snake_case(s: &str) -> String {
    format(s, CaseStyle::Snake)
}
