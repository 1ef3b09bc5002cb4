/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */

use crate::location::QueryParams;
use crate::options::value::{Configuration, OptionValue};

/// Read compiler option overrides out of the URL query.
///
/// Only keys present in `defaults` are considered. Values are coerced:
/// `"true"`/`"false"` become booleans, anything with a leading base-10
/// integer becomes that integer (`"42abc"` is 42), and everything else is
/// dropped. String- and enum-valued options therefore cannot be set from the
/// URL.
#[must_use]
pub fn extract_from_params(defaults: &Configuration, params: &QueryParams) -> Configuration {
    defaults
        .keys()
        .filter_map(|key| {
            let value = coerce_param(params.get(key)?)?;
            Some((key, value))
        })
        .collect()
}

/// Coerce a raw query value into a boolean or integer option value.
#[must_use]
pub fn coerce_param(raw: &str) -> Option<OptionValue> {
    match raw {
        "true" => Some(OptionValue::Bool(true)),
        "false" => Some(OptionValue::Bool(false)),
        _ => parse_leading_int(raw).map(OptionValue::Int),
    }
}

/// Parse the leading base-10 integer of `raw`.
///
/// Leading whitespace and a single sign are skipped, parsing stops at the
/// first non-digit, and at least one digit is required. Values that do not
/// fit in an `i64` are rejected.
#[must_use]
pub fn parse_leading_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = &digits[..end];
    if negative {
        format!("-{magnitude}").parse().ok()
    } else {
        magnitude.parse().ok()
    }
}
