/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Sandbox settings: the partial configuration a host passes in, layered over
 * the playground defaults. Settings can also be read from YAML/JSON.
 */

pub mod utils;

use crate::error::ParseError;
use crate::options::Configuration;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

pub use utils::parse_yaml_or_json;

/// Language variant of the main file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Filetype {
    #[default]
    Ts,
    Js,
    Dts,
}

impl Filetype {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ts => "ts",
            Self::Js => "js",
            Self::Dts => "d.ts",
        }
    }

    /// JavaScript is the permissive variant.
    #[must_use]
    pub const fn is_permissive(self) -> bool {
        matches!(self, Self::Js)
    }

    /// Editor language id
    #[must_use]
    pub const fn language(self) -> &'static str {
        match self {
            Self::Js => "javascript",
            Self::Ts | Self::Dts => "typescript",
        }
    }
}

impl fmt::Display for Filetype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Filetype {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ts" => Ok(Self::Ts),
            "js" => Ok(Self::Js),
            "d.ts" => Ok(Self::Dts),
            other => Err(ParseError::InvalidFieldType(format!(
                "filetype must be one of ts, js, d.ts (got {other})"
            ))),
        }
    }
}

/// Settings for creating a sandbox.
///
/// [`SandboxConfig::default`] gives the playground defaults; hosts override
/// individual fields.
#[derive(Debug, Clone, PartialEq)]
pub struct SandboxConfig {
    /// Initial text, used when the URL carries no code
    pub text: String,
    /// Id of the element the editor is mounted into
    pub dom_id: Option<String>,
    /// Host handle of an element to append the editor to, instead of `dom_id`
    pub element_to_append: Option<String>,
    /// Compiler options layered over the sandbox defaults
    pub compiler_options: Configuration,
    /// Fetch type declarations for imports as they appear
    pub acquire_types: bool,
    pub filetype: Filetype,
    /// Apply `// @option: value` directives from the source text
    pub support_twoslash_compiler_options: bool,
    /// Use `text` as-is instead of looking at the URL fragment
    pub suppress_automatically_getting_default_text: bool,
    /// Ignore compiler options in the URL query
    pub suppress_automatically_getting_compiler_flags: bool,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            text: String::new(),
            dom_id: Some(String::new()),
            element_to_append: None,
            compiler_options: Configuration::new(),
            acquire_types: true,
            filetype: Filetype::Ts,
            support_twoslash_compiler_options: false,
            suppress_automatically_getting_default_text: false,
            suppress_automatically_getting_compiler_flags: false,
        }
    }
}

impl SandboxConfig {
    /// Parse settings from YAML or JSON; see [`parse_yaml_or_json`].
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` if the content cannot be parsed or a field has
    /// the wrong type.
    pub fn parse(content: &str, file_path: Option<&str>) -> Result<Self, ParseError> {
        Self::from_value(&parse_yaml_or_json(content, file_path)?)
    }

    /// Layer a parsed settings object over the defaults.
    ///
    /// Keys use the playground's camelCase names (`domID`, `compilerOptions`,
    /// ...). Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFieldType` when the value is not an object
    /// or a known field has the wrong type.
    pub fn from_value(value: &Value) -> Result<Self, ParseError> {
        let object = value.as_object().ok_or_else(|| {
            ParseError::InvalidFieldType("settings must be an object".to_string())
        })?;

        let mut config = Self::default();
        for (key, value) in object {
            match key.as_str() {
                "text" => config.text = expect_str(key, value)?.to_string(),
                "domID" => config.dom_id = expect_optional_str(key, value)?,
                "elementToAppend" => config.element_to_append = expect_optional_str(key, value)?,
                "compilerOptions" => config.compiler_options = Configuration::from_json(value)?,
                "acquireTypes" => config.acquire_types = expect_bool(key, value)?,
                "filetype" => config.filetype = expect_str(key, value)?.parse()?,
                "supportTwoslashCompilerOptions" => {
                    config.support_twoslash_compiler_options = expect_bool(key, value)?;
                }
                "suppressAutomaticallyGettingDefaultText" => {
                    config.suppress_automatically_getting_default_text = expect_bool(key, value)?;
                }
                "suppressAutomaticallyGettingCompilerFlags" => {
                    config.suppress_automatically_getting_compiler_flags =
                        expect_bool(key, value)?;
                }
                _ => {}
            }
        }
        Ok(config)
    }
}

fn expect_str<'a>(key: &str, value: &'a Value) -> Result<&'a str, ParseError> {
    value
        .as_str()
        .ok_or_else(|| ParseError::InvalidFieldType(format!("{key} must be a string")))
}

fn expect_optional_str(key: &str, value: &Value) -> Result<Option<String>, ParseError> {
    if value.is_null() {
        Ok(None)
    } else {
        expect_str(key, value).map(|s| Some(s.to_string()))
    }
}

fn expect_bool(key: &str, value: &Value) -> Result<bool, ParseError> {
    value
        .as_bool()
        .ok_or_else(|| ParseError::InvalidFieldType(format!("{key} must be a boolean")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::{OptionValue, ScriptTarget};
    use serde_json::json;

    #[test]
    fn test_defaults() {
        let config = SandboxConfig::default();
        assert_eq!(config.text, "");
        assert_eq!(config.dom_id.as_deref(), Some(""));
        assert!(config.acquire_types);
        assert_eq!(config.filetype, Filetype::Ts);
        assert!(!config.support_twoslash_compiler_options);
        assert!(config.compiler_options.is_empty());
    }

    #[test]
    fn test_filetype_round_trip_and_variant() {
        for filetype in [Filetype::Ts, Filetype::Js, Filetype::Dts] {
            assert_eq!(filetype.as_str().parse::<Filetype>().unwrap(), filetype);
        }
        assert!(Filetype::Js.is_permissive());
        assert!(!Filetype::Dts.is_permissive());
        assert_eq!(Filetype::Js.language(), "javascript");
        assert_eq!(Filetype::Dts.language(), "typescript");
        assert!("tsx".parse::<Filetype>().is_err());
    }

    #[test]
    fn test_parse_yaml_settings() {
        let yaml = r#"
text: "let a = 1"
domID: monaco-editor-embed
filetype: js
acquireTypes: false
supportTwoslashCompilerOptions: true
compilerOptions:
  strictNullChecks: true
  target: ES2020
unknownSetting: 3
"#;
        let config = SandboxConfig::parse(yaml, Some("playground.yaml")).unwrap();
        assert_eq!(config.text, "let a = 1");
        assert_eq!(config.dom_id.as_deref(), Some("monaco-editor-embed"));
        assert_eq!(config.filetype, Filetype::Js);
        assert!(!config.acquire_types);
        assert!(config.support_twoslash_compiler_options);
        assert_eq!(
            config.compiler_options.get("target"),
            Some(&OptionValue::from(ScriptTarget::Es2020))
        );
        assert_eq!(
            config.compiler_options.get("strictNullChecks"),
            Some(&OptionValue::Bool(true))
        );
    }

    #[test]
    fn test_from_value_null_dom_id() {
        let config = SandboxConfig::from_value(&json!({ "domID": null })).unwrap();
        assert_eq!(config.dom_id, None);
    }

    #[test]
    fn test_from_value_wrong_types() {
        assert!(matches!(
            SandboxConfig::from_value(&json!({ "acquireTypes": "yes" })),
            Err(ParseError::InvalidFieldType(_))
        ));
        assert!(matches!(
            SandboxConfig::from_value(&json!({ "filetype": "rs" })),
            Err(ParseError::InvalidFieldType(_))
        ));
        assert!(matches!(
            SandboxConfig::from_value(&json!({ "compilerOptions": { "lib": ["dom"] } })),
            Err(ParseError::InvalidOptionValue(_))
        ));
        assert!(SandboxConfig::from_value(&json!("ts")).is_err());
    }
}
