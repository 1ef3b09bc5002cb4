/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Page location parsing: the query parameters and fragment a playground
 * page was opened with.
 */

use crate::error::SandboxError;
use url::{form_urlencoded, Url};

/// Base used to resolve relative references such as `?ts=5.0#code/...`.
const LOCAL_BASE: &str = "http://localhost/";

/// Parsed URL query parameters, in the order they appeared.
///
/// Duplicate keys are kept; [`QueryParams::get`] returns the first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

static EMPTY_QUERY: QueryParams = QueryParams { pairs: Vec::new() };

impl QueryParams {
    /// Parse an `application/x-www-form-urlencoded` query, with or without
    /// the leading `?`.
    #[must_use]
    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        Self {
            pairs: form_urlencoded::parse(query.as_bytes())
                .into_owned()
                .collect(),
        }
    }

    /// A shared empty query.
    #[must_use]
    pub fn empty() -> &'static Self {
        &EMPTY_QUERY
    }

    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// The query and fragment of a playground page URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    query: QueryParams,
    hash: String,
}

impl PageLocation {
    /// Parse an absolute URL or a relative reference (`?a=b#code/...`,
    /// `#code/...`).
    ///
    /// # Errors
    ///
    /// Returns `SandboxError::Location` if the input is not a valid URL.
    pub fn parse(input: &str) -> Result<Self, SandboxError> {
        let url = Url::parse(LOCAL_BASE)
            .and_then(|base| base.join(input.trim()))
            .map_err(|e| SandboxError::Location(format!("{input}: {e}")))?;

        Ok(Self {
            query: url.query().map(QueryParams::parse).unwrap_or_default(),
            hash: url.fragment().unwrap_or_default().to_string(),
        })
    }

    /// Build a location from an already-split query and fragment. A leading
    /// `#` on `hash` is stripped.
    #[must_use]
    pub fn from_parts(query: QueryParams, hash: &str) -> Self {
        Self {
            query,
            hash: hash.strip_prefix('#').unwrap_or(hash).to_string(),
        }
    }

    #[must_use]
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// The fragment without its leading `#`.
    #[must_use]
    pub fn hash(&self) -> &str {
        &self.hash
    }
}
