//! Offline host for the sandbox: an in-memory editor buffer and a language
//! service that records options but has no compiler behind it.

use crate::codec::LzStringCodec;
use crate::error::CliResult;
use playground_sandbox::{
    Configuration, EditorModel, EmitOutput, LanguageService, PageLocation, Sandbox, SandboxConfig,
    SandboxError, SelectionRange,
};
use tracing::debug;

pub type OfflineSandbox = Sandbox<BufferEditor, OfflineService>;

/// Open a sandbox on `location` with the offline host.
pub fn open_session(
    settings: SandboxConfig,
    location: &PageLocation,
    selection: Option<SelectionRange>,
) -> CliResult<OfflineSandbox> {
    let sandbox = Sandbox::builder(settings, BufferEditor::new(selection), OfflineService)
        .codec(LzStringCodec)
        .build(location)?;
    Ok(sandbox)
}

/// Editor model backed by a string
#[derive(Debug, Default)]
pub struct BufferEditor {
    text: String,
    selection: Option<SelectionRange>,
}

impl BufferEditor {
    pub fn new(selection: Option<SelectionRange>) -> Self {
        Self {
            text: String::new(),
            selection,
        }
    }
}

impl EditorModel for BufferEditor {
    fn value(&self) -> String {
        self.text.clone()
    }

    fn set_value(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn selection(&self) -> Option<SelectionRange> {
        self.selection
    }

    fn uri(&self) -> String {
        "file:///input.ts".to_string()
    }
}

/// Language service stand-in; the CLI never emits.
#[derive(Debug, Default)]
pub struct OfflineService;

impl LanguageService for OfflineService {
    fn set_compiler_options(&mut self, options: &Configuration) {
        debug!(count = options.len(), "compiler options applied");
    }

    fn add_extra_lib(&mut self, _code: &str, path: &str) {
        debug!(path, "ignoring extra lib");
    }

    fn emit_output(&self, _file_uri: &str) -> Result<EmitOutput, SandboxError> {
        Err(SandboxError::Worker(
            "no compiler is available from the command line".to_string(),
        ))
    }

    fn syntax_tree(
        &self,
        _file_path: &str,
        _text: &str,
        _options: &Configuration,
    ) -> Result<serde_json::Value, SandboxError> {
        Err(SandboxError::Worker(
            "no compiler is available from the command line".to_string(),
        ))
    }
}
