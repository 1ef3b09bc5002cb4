/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Options module: compiler option values, the sandbox defaults table, and
 * reading option overrides out of URL query parameters.
 */

pub mod defaults;
pub mod params;
pub mod value;

pub use defaults::resolve_defaults;
pub use params::{coerce_param, extract_from_params, parse_leading_int};
pub use value::{
    CompilerEnum, Configuration, JsxEmit, ModuleKind, ModuleResolutionKind, OptionValue,
    ScriptTarget,
};

/// Return the entries of `current` whose value differs from `defaults`.
///
/// Comparison is strict (see [`OptionValue`]); a key missing from
/// `defaults` always counts as different.
#[must_use]
pub fn diff_against(current: &Configuration, defaults: &Configuration) -> Configuration {
    current
        .iter()
        .filter(|(key, value)| defaults.get(key) != Some(*value))
        .map(|(key, value)| (key, value.clone()))
        .collect()
}
