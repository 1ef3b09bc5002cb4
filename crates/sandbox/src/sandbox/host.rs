/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Traits implemented by the hosting page: the editor widget, the compiler's
 * language service, and the optional auxiliary features.
 */

use crate::error::SandboxError;
use crate::options::Configuration;
use crate::share::SelectionRange;
use serde::{Deserialize, Serialize};

/// The editor's text model
pub trait EditorModel {
    fn value(&self) -> String;
    fn set_value(&mut self, text: &str);
    /// Current selection, if the editor has focus
    fn selection(&self) -> Option<SelectionRange>;
    /// Model URI, e.g. `file:///input.tsx`
    fn uri(&self) -> String;
}

/// The compiler's language service running in the worker
pub trait LanguageService {
    fn set_compiler_options(&mut self, options: &Configuration);

    /// Register an extra declaration file with the language service.
    fn add_extra_lib(&mut self, code: &str, path: &str);

    /// # Errors
    ///
    /// Returns `SandboxError::Worker` if the worker cannot emit.
    fn emit_output(&self, file_uri: &str) -> Result<EmitOutput, SandboxError>;

    /// Syntax tree of `text` compiled as `file_path`, as the host serializes it.
    ///
    /// # Errors
    ///
    /// Returns `SandboxError::Worker` if no program could be built.
    fn syntax_tree(
        &self,
        file_path: &str,
        text: &str,
        options: &Configuration,
    ) -> Result<serde_json::Value, SandboxError>;
}

/// Finds imports in the source and fetches their type declarations.
pub trait TypeAcquisition {
    /// Declarations for imports not seen before.
    fn detect_new_imports(&mut self, code: &str) -> Vec<ExtraLib>;
}

/// Reads inline `// @option: value` compiler directives.
pub trait TwoslashOptions {
    fn extract(&self, code: &str) -> Configuration;
}

/// A declaration file to add to the runtime
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraLib {
    pub path: String,
    pub code: String,
}

/// Files emitted by the worker for the main model
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitOutput {
    pub output_files: Vec<OutputFile>,
    #[serde(default)]
    pub emit_skipped: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFile {
    pub name: String,
    pub text: String,
    #[serde(default)]
    pub write_byte_order_mark: bool,
}

impl EmitOutput {
    /// First emitted JavaScript file (`.js` or `.jsx`)
    #[must_use]
    pub fn javascript(&self) -> Option<&OutputFile> {
        self.output_files
            .iter()
            .find(|o| o.name.ends_with(".js") || o.name.ends_with(".jsx"))
    }

    /// First emitted declaration file
    #[must_use]
    pub fn declarations(&self) -> Option<&OutputFile> {
        self.output_files.iter().find(|o| o.name.ends_with(".d.ts"))
    }
}
