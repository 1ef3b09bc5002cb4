/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Shareable URL building: compiler option diffs, compiler version, editor
 * selection and filetype go in the query; the source text goes in the
 * fragment.
 */

use crate::codec::TextCodec;
use crate::location::QueryParams;
use crate::options::{diff_against, Configuration};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};


/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Version tags that must be pinned to the loaded compiler version before
/// being shared.
pub const SYMBOLIC_VERSIONS: [&str; 2] = ["Nightly", "next"];

/// Selection query keys.
pub const SELECTION_KEYS: [&str; 4] = ["ssl", "ssc", "pln", "pc"];

/// An editor selection, 1-based as the editor reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionRange {
    pub start_line: u32,
    pub start_column: u32,
    pub end_line: u32,
    pub end_column: u32,
}

impl SelectionRange {
    #[must_use]
    pub const fn new(start_line: u32, start_column: u32, end_line: u32, end_column: u32) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// A caret with no selected text.
    #[must_use]
    pub const fn caret(line: u32, column: u32) -> Self {
        Self::new(line, column, line, column)
    }

    /// True when the selection covers more than a single position.
    #[must_use]
    pub const fn is_range(&self) -> bool {
        self.start_line != self.end_line || self.start_column != self.end_column
    }
}

/// Everything needed to build a shareable URL.
///
/// `ambient_query` is the query of the page the user is currently on; only
/// its `lib` and `ts` entries are read.
#[derive(Debug, Clone)]
pub struct ShareRequest<'a> {
    pub current: &'a Configuration,
    pub defaults: &'a Configuration,
    pub source_text: &'a str,
    pub selection: Option<SelectionRange>,
    pub filetype: &'a str,
    pub default_filetype: &'a str,
    pub ambient_query: &'a QueryParams,
    pub current_version: &'a str,
    pub overrides: Option<&'a [(String, Option<String>)]>,
}

impl<'a> ShareRequest<'a> {
    /// A request for a TypeScript file with no selection, no ambient query
    /// and no overrides.
    #[must_use]
    pub fn new(current: &'a Configuration, defaults: &'a Configuration, source_text: &'a str) -> Self {
        Self {
            current,
            defaults,
            source_text,
            selection: None,
            filetype: "ts",
            default_filetype: "ts",
            ambient_query: QueryParams::empty(),
            current_version: "",
            overrides: None,
        }
    }

    #[must_use]
    pub fn with_selection(mut self, selection: Option<SelectionRange>) -> Self {
        self.selection = selection;
        self
    }

    #[must_use]
    pub fn with_filetype(mut self, filetype: &'a str) -> Self {
        self.filetype = filetype;
        self
    }

    #[must_use]
    pub fn with_ambient_query(mut self, ambient_query: &'a QueryParams, current_version: &'a str) -> Self {
        self.ambient_query = ambient_query;
        self.current_version = current_version;
        self
    }

    #[must_use]
    pub fn with_overrides(mut self, overrides: &'a [(String, Option<String>)]) -> Self {
        self.overrides = Some(overrides);
        self
    }
}

/// Ordered query entries where `None` marks a key as cleared.
#[derive(Debug, Default)]
struct UrlParams {
    entries: Vec<(String, Option<String>)>,
}

impl UrlParams {
    fn set(&mut self, key: &str, value: Option<String>) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    fn to_query_string(&self) -> String {
        self.entries
            .iter()
            .filter_map(|(key, value)| {
                let value = value.as_deref()?;
                Some(format!("{key}={}", utf8_percent_encode(value, URI_COMPONENT)))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Build the query and fragment of a shareable playground URL.
///
/// Returns `?k1=v1&k2=v2#code/<data>`, or `#code/<data>` when no parameter
/// survives. Never fails.
#[must_use]
pub fn build_shareable_url(request: &ShareRequest<'_>, codec: &dyn TextCodec) -> String {
    let diff = diff_against(request.current, request.defaults);
    let hash = format!("code/{}", codec.compress(request.source_text));

    let mut params = UrlParams::default();
    for (key, value) in diff.iter() {
        params.set(key, Some(value.to_string()));
    }

    // `lib` is copied into `ts` as-is; a later `ts` wins.
    for param in ["lib", "ts"] {
        if let Some(value) = request.ambient_query.get(param) {
            let version = if param == "ts" && SYMBOLIC_VERSIONS.contains(&value) {
                request.current_version
            } else {
                value
            };
            params.set("ts", Some(version.to_string()));
        }
    }

    match request.selection.filter(SelectionRange::is_range) {
        Some(selection) => {
            params.set("ssl", Some(selection.start_line.to_string()));
            params.set("ssc", Some(selection.start_column.to_string()));
            params.set("pln", Some(selection.end_line.to_string()));
            params.set("pc", Some(selection.end_column.to_string()));
        }
        None => {
            for key in SELECTION_KEYS {
                params.set(key, None);
            }
        }
    }

    if request.filetype != request.default_filetype {
        params.set("filetype", Some(request.filetype.to_string()));
    }

    if let Some(overrides) = request.overrides {
        for (key, value) in overrides {
            params.set(key, value.clone());
        }
    }

    let query = params.to_query_string();
    if query.is_empty() {
        format!("#{hash}")
    } else {
        format!("?{query}#{hash}")
    }
}
