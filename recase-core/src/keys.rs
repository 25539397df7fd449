//! Rewriting the keys of JSON documents.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::{CaseStyle, Error, Result, format};

/// Options for [`convert_keys`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyOptions {
    /// Style applied to every key.
    pub style: CaseStyle,
    /// Also rewrite keys of nested objects, including objects inside arrays.
    pub recursive: bool,
}

impl KeyOptions {
    pub fn new(style: CaseStyle) -> Self {
        Self {
            style,
            recursive: true,
        }
    }

    /// Only rewrite the keys of the top-level object.
    pub fn shallow(mut self) -> Self {
        self.recursive = false;
        self
    }
}

impl Default for KeyOptions {
    fn default() -> Self {
        Self::new(CaseStyle::default())
    }
}

/// Return a copy of `value` with its object keys converted.
///
/// Values are kept as-is; non-object roots are returned unchanged. Keys that
/// convert to an empty string (e.g. `"!!!"`) are kept verbatim. Two keys of one
/// object that convert to the same key are a [`Error::KeyCollision`].
pub fn convert_keys(value: &Value, options: KeyOptions) -> Result<Value> {
    convert_at(value, options, "", true)
}

fn convert_at(value: &Value, options: KeyOptions, path: &str, top: bool) -> Result<Value> {
    match value {
        Value::Object(map) if top || options.recursive => {
            convert_object(map, options, path).map(Value::Object)
        }
        Value::Array(items) if options.recursive => items
            .iter()
            .enumerate()
            .map(|(i, item)| convert_at(item, options, &format!("{path}/{i}"), false))
            .collect::<Result<Vec<_>>>()
            .map(Value::Array),
        other => Ok(other.clone()),
    }
}

fn convert_object(
    map: &Map<String, Value>,
    options: KeyOptions,
    path: &str,
) -> Result<Map<String, Value>> {
    // converted key -> original key, for collision reports
    let mut seen: IndexMap<String, &str> = IndexMap::with_capacity(map.len());
    let mut out = Map::with_capacity(map.len());

    for (key, value) in map {
        let mut converted = format(key.as_str(), options.style);
        if converted.is_empty() {
            converted = key.clone();
        }

        if let Some(first) = seen.get(&converted) {
            let path = if path.is_empty() { "/" } else { path };
            return Err(Error::KeyCollision {
                path: path.to_string(),
                key: converted,
                first: first.to_string(),
                second: key.clone(),
            });
        }

        let child_path = format!("{path}/{}", escape_pointer_token(&converted));
        let child = convert_at(value, options, &child_path, false)?;
        seen.insert(converted.clone(), key.as_str());
        out.insert(converted, child);
    }

    log::trace!("converted {} keys at '{}'", out.len(), path);
    Ok(out)
}

/// Escape a key for use as a JSON Pointer reference token.
fn escape_pointer_token(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}
