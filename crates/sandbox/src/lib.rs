//! Playground Sandbox Library
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.
//!
//! This library resolves the compiler options of a code playground session and
//! builds shareable URLs that restore the session. It works only with in-memory
//! data (no file I/O); the editor and the compiler's language service are
//! supplied by the host through traits.
//!
//! # Example
//!
//! ```rust
//! use playground_sandbox::{
//!     build_shareable_url, extract_from_params, resolve_defaults, Base64Codec,
//!     Configuration, QueryParams, ShareRequest,
//! };
//!
//! let defaults = resolve_defaults(false, &Configuration::new());
//! let query = QueryParams::parse("?strictNullChecks=false&noSuchOption=1");
//!
//! let mut current = defaults.clone();
//! current.merge(&extract_from_params(&defaults, &query));
//!
//! let request = ShareRequest::new(&current, &defaults, "let a = 1");
//! let url = build_shareable_url(&request, &Base64Codec);
//! assert!(url.starts_with("?strictNullChecks=false#code/"));
//! ```

pub mod codec;
pub mod error;
pub mod location;
pub mod options;
pub mod sandbox;
pub mod settings;
pub mod share;

// Re-export the public API
pub use codec::{initial_code, Base64Codec, TextCodec};
pub use error::{ParseError, SandboxError};
pub use location::{PageLocation, QueryParams};
pub use options::{
    diff_against, extract_from_params, resolve_defaults, CompilerEnum, Configuration, JsxEmit,
    ModuleKind, ModuleResolutionKind, OptionValue, ScriptTarget,
};
pub use sandbox::host::{
    EditorModel, EmitOutput, ExtraLib, LanguageService, OutputFile, TwoslashOptions,
    TypeAcquisition,
};
pub use sandbox::{default_file_path, Sandbox, SandboxBuilder};
pub use settings::{Filetype, SandboxConfig};
pub use share::{build_shareable_url, SelectionRange, ShareRequest};

/// Parse sandbox settings from a YAML/JSON string
///
/// This function works on in-memory strings only (no file I/O).
///
/// # Errors
///
/// Returns `SandboxError::Parse` if the input is invalid YAML/JSON or a field
/// has the wrong type.
pub fn parse_settings(content: &str, file_path: Option<&str>) -> Result<SandboxConfig, SandboxError> {
    Ok(SandboxConfig::parse(content, file_path)?)
}

/// The options a session opened at `location` starts with: the defaults for
/// `filetype` (after `overrides`) with the query's options layered on top.
#[must_use]
pub fn session_options(
    filetype: Filetype,
    overrides: &Configuration,
    location: &PageLocation,
) -> (Configuration, Configuration) {
    let defaults = resolve_defaults(filetype.is_permissive(), overrides);
    let mut current = defaults.clone();
    current.merge(&extract_from_params(&defaults, location.query()));
    (defaults, current)
}
