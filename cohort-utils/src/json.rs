use anyhow::{anyhow, Result};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::{Map, Value};
use std::{fs, path::Path};

pub fn dejsonify<'a, T>(json_str: &'a str) -> serde_json::Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str::<T>(json_str)
}

/// Serializes with object keys sorted at every nesting level, so repeated
/// runs over identical data produce byte-identical documents.
pub fn jsonify<T>(obj: &T) -> String
where
    T: Serialize,
{
    let value = serde_json::to_value(obj).expect("to_value failed on serializable object");
    sort_keys(&value).to_string()
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(fields) => {
            let mut keys: Vec<&String> = fields.keys().collect();
            keys.sort();
            let mut sorted = Map::new();
            for key in keys {
                sorted.insert(key.clone(), sort_keys(&fields[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        _ => value.clone(),
    }
}

pub fn write_json_file<T>(path: &Path, obj: &T) -> Result<()>
where
    T: Serialize,
{
    fs::write(path, jsonify(obj)).map_err(|e| anyhow!("Failed to write {:?}: {}", path, e))
}

pub fn read_json_file<T>(path: &Path) -> Result<T>
where
    T: DeserializeOwned,
{
    let raw =
        fs::read_to_string(path).map_err(|e| anyhow!("Failed to read {:?}: {}", path, e))?;
    dejsonify(&raw).map_err(|e| anyhow!("Failed to parse {:?}: {}", path, e))
}
