/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Compiler option values and the ordered configuration map.
 */

use crate::error::ParseError;
use serde_json::Value;
use std::fmt;

/// Declares a pass-through compiler enumeration with its numeric codes and
/// the names accepted in settings files.
macro_rules! compiler_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident = $code:literal, $label:literal;)+ }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Numeric code used by the embedded compiler
            #[must_use]
            pub const fn code(self) -> i64 {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            #[must_use]
            pub fn from_code(code: i64) -> Option<Self> {
                match code {
                    $($code => Some(Self::$variant),)+
                    _ => None,
                }
            }

            /// Case-insensitive lookup by name
            #[must_use]
            pub fn from_name(name: &str) -> Option<Self> {
                $(
                    if name.eq_ignore_ascii_case($label) {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $label,)+
                }
            }
        }
    };
}

compiler_enum! {
    /// `moduleResolution`
    ModuleResolutionKind {
        Classic = 1, "Classic";
        NodeJs = 2, "NodeJs";
        Node16 = 3, "Node16";
        NodeNext = 99, "NodeNext";
        Bundler = 100, "Bundler";
    }
}

compiler_enum! {
    /// `target`
    ScriptTarget {
        Es3 = 0, "ES3";
        Es5 = 1, "ES5";
        Es2015 = 2, "ES2015";
        Es2016 = 3, "ES2016";
        Es2017 = 4, "ES2017";
        Es2018 = 5, "ES2018";
        Es2019 = 6, "ES2019";
        Es2020 = 7, "ES2020";
        Es2021 = 8, "ES2021";
        Es2022 = 9, "ES2022";
        EsNext = 99, "ESNext";
        Json = 100, "JSON";
    }
}

compiler_enum! {
    /// `jsx`
    JsxEmit {
        None = 0, "None";
        Preserve = 1, "Preserve";
        React = 2, "React";
        ReactNative = 3, "ReactNative";
        ReactJsx = 4, "ReactJSX";
        ReactJsxDev = 5, "ReactJSXDev";
    }
}

compiler_enum! {
    /// `module`
    ModuleKind {
        None = 0, "None";
        CommonJs = 1, "CommonJS";
        Amd = 2, "AMD";
        Umd = 3, "UMD";
        System = 4, "System";
        Es2015 = 5, "ES2015";
        Es2020 = 6, "ES2020";
        Es2022 = 7, "ES2022";
        EsNext = 99, "ESNext";
        Node16 = 100, "Node16";
        NodeNext = 199, "NodeNext";
    }
}

/// An enumerated compiler option value.
///
/// These are opaque to the sandbox: they are compared and serialized (as
/// their numeric code), never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompilerEnum {
    ModuleResolution(ModuleResolutionKind),
    Target(ScriptTarget),
    Jsx(JsxEmit),
    Module(ModuleKind),
}

impl CompilerEnum {
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::ModuleResolution(kind) => kind.code(),
            Self::Target(target) => target.code(),
            Self::Jsx(jsx) => jsx.code(),
            Self::Module(module) => module.code(),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ModuleResolution(kind) => kind.name(),
            Self::Target(target) => target.name(),
            Self::Jsx(jsx) => jsx.name(),
            Self::Module(module) => module.name(),
        }
    }

    /// Resolve a settings-file value for one of the enumerated option keys.
    ///
    /// Returns `None` when `key` is not an enumerated option or the name/code
    /// is unknown.
    #[must_use]
    pub fn for_option(key: &str, value: &Value) -> Option<Self> {
        match key {
            "moduleResolution" => {
                lookup(value, ModuleResolutionKind::from_name, ModuleResolutionKind::from_code)
                    .map(Self::ModuleResolution)
            }
            "target" => lookup(value, ScriptTarget::from_name, ScriptTarget::from_code)
                .map(Self::Target),
            "jsx" => lookup(value, JsxEmit::from_name, JsxEmit::from_code).map(Self::Jsx),
            "module" => lookup(value, ModuleKind::from_name, ModuleKind::from_code)
                .map(Self::Module),
            _ => None,
        }
    }
}

fn lookup<T>(
    value: &Value,
    by_name: fn(&str) -> Option<T>,
    by_code: fn(i64) -> Option<T>,
) -> Option<T> {
    match value {
        Value::String(name) => by_name(name),
        Value::Number(n) => n.as_i64().and_then(by_code),
        _ => None,
    }
}

impl From<ModuleResolutionKind> for CompilerEnum {
    fn from(kind: ModuleResolutionKind) -> Self {
        Self::ModuleResolution(kind)
    }
}

impl From<ScriptTarget> for CompilerEnum {
    fn from(target: ScriptTarget) -> Self {
        Self::Target(target)
    }
}

impl From<JsxEmit> for CompilerEnum {
    fn from(jsx: JsxEmit) -> Self {
        Self::Jsx(jsx)
    }
}

impl From<ModuleKind> for CompilerEnum {
    fn from(module: ModuleKind) -> Self {
        Self::Module(module)
    }
}

/// A single compiler option value.
///
/// `PartialEq` is strict: values of different variants are never equal,
/// so `Bool(true) != Str("true")` and `Int(4) != Enum(Target(Es2017))`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionValue {
    Bool(bool),
    Int(i64),
    Str(String),
    Enum(CompilerEnum),
}

impl OptionValue {
    /// Coercive comparison used when deciding whether an incoming setting
    /// changes anything: booleans, integers, enum codes and numeric strings
    /// compare by their numeric value.
    #[must_use]
    pub fn loosely_equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Str(a), Self::Str(b)) => a == b,
            (a, b) if std::mem::discriminant(a) == std::mem::discriminant(b) => a == b,
            (a, b) => match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) => x == y,
                _ => false,
            },
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            Self::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Self::Int(i) => Some(*i as f64),
            Self::Enum(e) => Some(e.code() as f64),
            Self::Str(s) => {
                let trimmed = s.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok()
                }
            }
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Convert to JSON; enums become their numeric code.
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(b) => Value::Bool(*b),
            Self::Int(i) => Value::from(*i),
            Self::Str(s) => Value::String(s.clone()),
            Self::Enum(e) => Value::from(e.code()),
        }
    }

    /// Convert a settings-file value for `key`.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidOptionValue` for nulls, floats, arrays and
    /// objects, which no sandbox option accepts.
    pub fn from_json(key: &str, value: &Value) -> Result<Self, ParseError> {
        if let Some(e) = CompilerEnum::for_option(key, value) {
            return Ok(Self::Enum(e));
        }

        match value {
            Value::Bool(b) => Ok(Self::Bool(*b)),
            Value::Number(n) => n.as_i64().map(Self::Int).ok_or_else(|| {
                ParseError::InvalidOptionValue(format!("{key}: {n} is not an integer"))
            }),
            Value::String(s) => Ok(Self::Str(s.clone())),
            other => Err(ParseError::InvalidOptionValue(format!(
                "{key}: unsupported value {other}"
            ))),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Str(s) => f.write_str(s),
            Self::Enum(e) => write!(f, "{}", e.code()),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<CompilerEnum> for OptionValue {
    fn from(value: CompilerEnum) -> Self {
        Self::Enum(value)
    }
}

impl From<ModuleResolutionKind> for OptionValue {
    fn from(value: ModuleResolutionKind) -> Self {
        Self::Enum(value.into())
    }
}

impl From<ScriptTarget> for OptionValue {
    fn from(value: ScriptTarget) -> Self {
        Self::Enum(value.into())
    }
}

impl From<JsxEmit> for OptionValue {
    fn from(value: JsxEmit) -> Self {
        Self::Enum(value.into())
    }
}

impl From<ModuleKind> for OptionValue {
    fn from(value: ModuleKind) -> Self {
        Self::Enum(value.into())
    }
}

/// Compiler options keyed by name, in insertion order.
///
/// Inserting an existing key replaces the value in place; new keys are
/// appended. Equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    entries: Vec<(String, OptionValue)>,
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Insert or replace a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Option<OptionValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str, &OptionValue) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }

    /// Overlay `other` on top of `self`: keys in `other` win, absent keys
    /// are left alone.
    pub fn merge(&mut self, other: &Self) {
        for (key, value) in other.iter() {
            self.insert(key, value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn to_json(&self) -> Value {
        let map = self
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.to_json()))
            .collect::<serde_json::Map<_, _>>();
        Value::Object(map)
    }

    /// Build a configuration from a JSON object such as the
    /// `compilerOptions` block of a settings file.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidFieldType` if `value` is not an object, or
    /// `ParseError::InvalidOptionValue` for values no option accepts.
    pub fn from_json(value: &Value) -> Result<Self, ParseError> {
        let object = value.as_object().ok_or_else(|| {
            ParseError::InvalidFieldType("compilerOptions must be an object".to_string())
        })?;

        let mut config = Self::new();
        for (key, value) in object {
            config.insert(key.clone(), OptionValue::from_json(key, value)?);
        }
        Ok(config)
    }
}

impl PartialEq for Configuration {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, v)| other.get(k) == Some(v))
    }
}

impl Eq for Configuration {}

impl<K: Into<String>, V: Into<OptionValue>> FromIterator<(K, V)> for Configuration {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (key, value) in iter {
            config.insert(key, value);
        }
        config
    }
}

impl<K: Into<String>, V: Into<OptionValue>> Extend<(K, V)> for Configuration {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut config = Configuration::new();
        config.insert("a", true);
        config.insert("b", 1_i64);
        let previous = config.insert("a", false);

        assert_eq!(previous, Some(OptionValue::Bool(true)));
        assert_eq!(config.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(config.get("a"), Some(&OptionValue::Bool(false)));
    }

    #[test]
    fn test_merge_later_layer_wins() {
        let mut base: Configuration = [("a", true), ("b", false)].into_iter().collect();
        let overlay: Configuration = [("b", true), ("c", true)].into_iter().collect();
        base.merge(&overlay);

        assert_eq!(base.keys().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(base.get("b"), Some(&OptionValue::Bool(true)));
    }

    #[test]
    fn test_equality_ignores_order() {
        let a: Configuration = [("x", true), ("y", false)].into_iter().collect();
        let b: Configuration = [("y", false), ("x", true)].into_iter().collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_strict_equality_across_variants() {
        assert_ne!(OptionValue::Bool(true), OptionValue::Str("true".to_string()));
        assert_ne!(
            OptionValue::Int(4),
            OptionValue::Enum(CompilerEnum::Target(ScriptTarget::Es2017))
        );
    }

    #[test]
    fn test_loose_equality() {
        assert!(OptionValue::Int(1).loosely_equals(&OptionValue::Bool(true)));
        assert!(OptionValue::Int(4)
            .loosely_equals(&OptionValue::Enum(CompilerEnum::Target(ScriptTarget::Es2017))));
        assert!(OptionValue::Str("99".to_string()).loosely_equals(&OptionValue::Int(99)));
        assert!(!OptionValue::Bool(true).loosely_equals(&OptionValue::Str("true".to_string())));
        assert!(!OptionValue::Str("a".to_string()).loosely_equals(&OptionValue::Str("b".to_string())));
    }

    #[test]
    fn test_display_uses_enum_code() {
        assert_eq!(OptionValue::from(ModuleKind::EsNext).to_string(), "99");
        assert_eq!(OptionValue::Bool(false).to_string(), "false");
        assert_eq!(OptionValue::Int(-3).to_string(), "-3");
    }

    #[test]
    fn test_from_json_enum_names_and_codes() {
        let config = Configuration::from_json(&json!({
            "target": "es2020",
            "module": 1,
            "jsx": "preserve",
            "strict": true,
            "lib": "dom"
        }))
        .unwrap();

        assert_eq!(config.get("target"), Some(&OptionValue::from(ScriptTarget::Es2020)));
        assert_eq!(config.get("module"), Some(&OptionValue::from(ModuleKind::CommonJs)));
        assert_eq!(config.get("jsx"), Some(&OptionValue::from(JsxEmit::Preserve)));
        assert_eq!(config.get("strict"), Some(&OptionValue::Bool(true)));
        assert_eq!(config.get("lib"), Some(&OptionValue::Str("dom".to_string())));
    }

    #[test]
    fn test_from_json_unknown_enum_name_passes_through_as_string() {
        let config = Configuration::from_json(&json!({ "target": "ES1999" })).unwrap();
        assert_eq!(config.get("target"), Some(&OptionValue::Str("ES1999".to_string())));
    }

    #[test]
    fn test_from_json_rejects_floats_and_non_objects() {
        assert!(Configuration::from_json(&json!({ "maxNodeModuleJsDepth": 1.5 })).is_err());
        assert!(Configuration::from_json(&json!({ "paths": {} })).is_err());
        assert!(Configuration::from_json(&json!([1, 2])).is_err());
    }

    #[test]
    fn test_to_json_keeps_order() {
        let config: Configuration = [
            ("b", OptionValue::Bool(true)),
            ("a", OptionValue::from(JsxEmit::React)),
        ]
        .into_iter()
        .collect();
        let text = serde_json::to_string(&config.to_json()).unwrap();
        assert_eq!(text, r#"{"b":true,"a":2}"#);
    }
}
