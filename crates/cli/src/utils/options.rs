//! Parsing helpers for command line option arguments

use crate::error::{CliError, CliResult};
use playground_sandbox::options::coerce_param;
use playground_sandbox::share::SYMBOLIC_VERSIONS;
use playground_sandbox::{Configuration, OptionValue, SelectionRange};
use semver::Version;
use strsim::levenshtein;

/// Parse `key=value` assignments into compiler options.
///
/// Values are coerced like URL query values (`true`/`false`, then a leading
/// integer) and kept as strings otherwise.
pub fn parse_assignments(assignments: &[String]) -> CliResult<Configuration> {
    let mut options = Configuration::new();
    for raw in assignments {
        let (key, value) = raw.split_once('=').ok_or_else(|| {
            CliError::Message(format!("Invalid option '{raw}'. Expected key=value"))
        })?;
        let key = key.trim();
        if key.is_empty() {
            return Err(CliError::Message(format!(
                "Invalid option '{raw}'. Option name is empty"
            )));
        }
        let value = coerce_param(value).unwrap_or_else(|| OptionValue::Str(value.to_string()));
        options.insert(key, value);
    }
    Ok(options)
}

/// Keys of `options` that `known` has no entry for, each with up to three
/// close matches.
pub fn unknown_keys(options: &Configuration, known: &Configuration) -> Vec<(String, Vec<String>)> {
    options
        .keys()
        .filter(|key| !known.contains_key(key))
        .map(|key| (key.to_string(), find_similar_names(key, known.keys())))
        .collect()
}

fn find_similar_names<'a>(name: &str, candidates: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut similar = Vec::new();
    for candidate in candidates {
        let distance = levenshtein(name, candidate);
        if distance > 0 && distance <= name.len().max(candidate.len()) / 2 {
            similar.push((candidate.to_string(), distance));
        }
    }
    // Sort by distance and return top 3
    similar.sort_by_key(|(_, d)| *d);
    similar.into_iter().take(3).map(|(name, _)| name).collect()
}

/// Parse `line:column-line:column`, or `line:column` for a caret.
pub fn parse_selection(raw: &str) -> CliResult<SelectionRange> {
    let invalid = || {
        CliError::Message(format!(
            "Invalid selection '{raw}'. Expected line:column-line:column"
        ))
    };

    let position = |s: &str| -> CliResult<(u32, u32)> {
        let (line, column) = s.trim().split_once(':').ok_or_else(invalid)?;
        let line = line.parse().map_err(|_| invalid())?;
        let column = column.parse().map_err(|_| invalid())?;
        Ok((line, column))
    };

    match raw.split_once('-') {
        Some((start, end)) => {
            let (start_line, start_column) = position(start)?;
            let (end_line, end_column) = position(end)?;
            Ok(SelectionRange::new(start_line, start_column, end_line, end_column))
        }
        None => {
            let (line, column) = position(raw)?;
            Ok(SelectionRange::caret(line, column))
        }
    }
}

/// A warning for compiler versions that are neither symbolic nor semver.
pub fn version_warning(version: &str) -> Option<String> {
    if version.is_empty() || SYMBOLIC_VERSIONS.contains(&version) {
        return None;
    }
    match Version::parse(version) {
        Ok(_) => None,
        Err(e) => Some(format!("'{version}' is not a valid compiler version ({e})")),
    }
}
