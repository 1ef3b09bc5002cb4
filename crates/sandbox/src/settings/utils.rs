/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Utility functions for reading YAML and JSON settings.
 * Works only with in-memory strings (no file I/O).
 */

use crate::error::ParseError;
use serde_json::Value;
use yaml_rust::{Yaml, YamlLoader};

/// Parse YAML or JSON content from a string.
///
/// The format is taken from the file extension when one is given; otherwise
/// JSON is tried first, then YAML.
///
/// # Errors
///
/// Returns `ParseError::InvalidJson` or `ParseError::InvalidYaml` if the
/// content cannot be parsed.
pub fn parse_yaml_or_json(content: &str, file_path: Option<&str>) -> Result<Value, ParseError> {
    if let Some(path) = file_path {
        let path_lower = path.to_lowercase();
        if path_lower.ends_with(".json") {
            return parse_json(content).map_err(ParseError::InvalidJson);
        }
        if path_lower.ends_with(".yaml") || path_lower.ends_with(".yml") {
            return parse_yaml(content).map_err(ParseError::InvalidYaml);
        }
    }

    match parse_json(content) {
        Ok(value) => Ok(value),
        Err(_) => parse_yaml(content).map_err(ParseError::InvalidYaml),
    }
}

fn parse_json(content: &str) -> Result<Value, String> {
    serde_json::from_str(content).map_err(|e| format!("JSON parse error: {e}"))
}

fn parse_yaml(content: &str) -> Result<Value, String> {
    let docs =
        YamlLoader::load_from_str(content).map_err(|e| format!("YAML parse error: {e}"))?;

    // An empty document is an empty settings file.
    let Some(doc) = docs.first() else {
        return Ok(Value::Object(serde_json::Map::new()));
    };

    yaml_to_json_value(doc).ok_or_else(|| "Failed to convert YAML to JSON value".to_string())
}

/// Convert a yaml-rust value into a `serde_json::Value`.
fn yaml_to_json_value(yaml: &Yaml) -> Option<Value> {
    match yaml {
        Yaml::Real(s) => s
            .parse::<f64>()
            .ok()
            .and_then(|f| serde_json::Number::from_f64(f).map(Value::Number))
            .or_else(|| Some(Value::String(s.clone()))),
        Yaml::Integer(i) => Some(Value::from(*i)),
        Yaml::String(s) => Some(Value::String(s.clone())),
        Yaml::Boolean(b) => Some(Value::Bool(*b)),
        Yaml::Array(items) => Some(Value::Array(
            items.iter().filter_map(yaml_to_json_value).collect(),
        )),
        Yaml::Hash(hash) => {
            let mut map = serde_json::Map::new();
            for (k, v) in hash {
                if let (Some(key), Some(value)) = (yaml_key(k), yaml_to_json_value(v)) {
                    map.insert(key, value);
                }
            }
            Some(Value::Object(map))
        }
        Yaml::Null => Some(Value::Null),
        Yaml::BadValue | Yaml::Alias(_) => None,
    }
}

fn yaml_key(yaml: &Yaml) -> Option<String> {
    match yaml {
        Yaml::String(s) | Yaml::Real(s) => Some(s.clone()),
        Yaml::Integer(i) => Some(i.to_string()),
        Yaml::Boolean(b) => Some(b.to_string()),
        _ => None,
    }
}
