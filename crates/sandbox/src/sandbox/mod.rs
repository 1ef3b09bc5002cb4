/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 *
 * Sandbox module - binds an editor model to the compiler's language service
 *
 * This module handles:
 * - Resolving compiler options from defaults, settings and the page URL
 * - Keeping the language service in sync with option changes
 * - Pass-through accessors for text, emit output and syntax trees
 * - Debounced type acquisition and inline option directives
 */

pub mod debounce;
pub mod host;


use crate::codec::{initial_code, Base64Codec, TextCodec};
use crate::error::SandboxError;
use crate::location::{PageLocation, QueryParams};
use crate::options::{
    extract_from_params, resolve_defaults, CompilerEnum, Configuration, JsxEmit, OptionValue,
};
use crate::settings::{Filetype, SandboxConfig};
use crate::share::{build_shareable_url, ShareRequest};
use debounce::Debouncer;
use host::{EditorModel, EmitOutput, LanguageService, TwoslashOptions, TypeAcquisition};
use std::time::Instant;
use tracing::{debug, info};

type SettingsListener = Box<dyn FnMut(&Configuration)>;

/// Path of the main file: `input.<filetype>`, with an `x` suffix when JSX is
/// enabled (never for `d.ts`).
#[must_use]
pub fn default_file_path(filetype: Filetype, options: &Configuration) -> String {
    let is_jsx = !matches!(
        options.get("jsx"),
        Some(OptionValue::Int(0) | OptionValue::Enum(CompilerEnum::Jsx(JsxEmit::None)))
    );
    if is_jsx && filetype != Filetype::Dts {
        format!("input.{filetype}x")
    } else {
        format!("input.{filetype}")
    }
}

/// Collects the collaborators for a [`Sandbox`].
pub struct SandboxBuilder<E, S> {
    config: SandboxConfig,
    editor: E,
    service: S,
    codec: Box<dyn TextCodec>,
    type_acquisition: Option<Box<dyn TypeAcquisition>>,
    twoslash: Option<Box<dyn TwoslashOptions>>,
}

impl<E: EditorModel, S: LanguageService> SandboxBuilder<E, S> {
    /// Replace the default [`Base64Codec`].
    #[must_use]
    pub fn codec(mut self, codec: impl TextCodec + 'static) -> Self {
        self.codec = Box::new(codec);
        self
    }

    #[must_use]
    pub fn type_acquisition(mut self, acquisition: impl TypeAcquisition + 'static) -> Self {
        self.type_acquisition = Some(Box::new(acquisition));
        self
    }

    #[must_use]
    pub fn twoslash(mut self, twoslash: impl TwoslashOptions + 'static) -> Self {
        self.twoslash = Some(Box::new(twoslash));
        self
    }

    /// Set up the sandbox for a page opened at `location`.
    ///
    /// # Errors
    ///
    /// Returns `SandboxError::Config` when the settings name neither a DOM id
    /// nor an element to append the editor to.
    pub fn build(self, location: &PageLocation) -> Result<Sandbox<E, S>, SandboxError> {
        let Self {
            config,
            mut editor,
            service,
            codec,
            type_acquisition,
            twoslash,
        } = self;

        if config.dom_id.is_none() && config.element_to_append.is_none() {
            return Err(SandboxError::Config(
                "neither a DOM id nor an element to append was provided".to_string(),
            ));
        }

        let text = if config.suppress_automatically_getting_default_text {
            config.text.clone()
        } else {
            initial_code(&config.text, location, codec.as_ref())
        };

        let compiler_defaults =
            resolve_defaults(config.filetype.is_permissive(), &config.compiler_options);

        let mut compiler_options = compiler_defaults.clone();
        if !config.suppress_automatically_getting_compiler_flags {
            let from_query = extract_from_params(&compiler_defaults, location.query());
            if !from_query.is_empty() {
                info!(options = %from_query.to_json(), "found compiler options in query params");
            }
            compiler_options.merge(&from_query);
        }

        // allowJs = false makes no sense for a JavaScript file
        if config.filetype == Filetype::Js {
            compiler_options.insert("allowJs", true);
        }

        let filepath = default_file_path(config.filetype, &compiler_options);
        editor.set_value(&text);

        let mut sandbox = Sandbox {
            config,
            editor,
            service,
            codec,
            type_acquisition,
            twoslash,
            compiler_defaults,
            compiler_options,
            filepath,
            debouncer: Debouncer::default(),
            did_update_compiler_settings: None,
        };

        info!(options = %sandbox.compiler_options.to_json(), "set compiler options");
        sandbox.service.set_compiler_options(&sandbox.compiler_options);

        if sandbox.config.acquire_types {
            let code = sandbox.editor.value();
            sandbox.acquire_types(&code);
        }

        sandbox.text_updated();
        Ok(sandbox)
    }
}

/// An editor model bound to the compiler's language service.
pub struct Sandbox<E, S> {
    config: SandboxConfig,
    editor: E,
    service: S,
    codec: Box<dyn TextCodec>,
    type_acquisition: Option<Box<dyn TypeAcquisition>>,
    twoslash: Option<Box<dyn TwoslashOptions>>,
    compiler_defaults: Configuration,
    compiler_options: Configuration,
    filepath: String,
    debouncer: Debouncer,
    did_update_compiler_settings: Option<SettingsListener>,
}

impl<E: EditorModel, S: LanguageService> Sandbox<E, S> {
    #[must_use]
    pub fn builder(config: SandboxConfig, editor: E, service: S) -> SandboxBuilder<E, S> {
        SandboxBuilder {
            config,
            editor,
            service,
            codec: Box::new(Base64Codec),
            type_acquisition: None,
            twoslash: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    /// `"typescript"` or `"javascript"`
    #[must_use]
    pub fn language(&self) -> &'static str {
        self.config.filetype.language()
    }

    #[must_use]
    pub fn filepath(&self) -> &str {
        &self.filepath
    }

    #[must_use]
    pub fn editor(&self) -> &E {
        &self.editor
    }

    #[must_use]
    pub fn service(&self) -> &S {
        &self.service
    }

    #[must_use]
    pub fn codec(&self) -> &dyn TextCodec {
        self.codec.as_ref()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.editor.value()
    }

    pub fn set_text(&mut self, text: &str) {
        self.editor.set_value(text);
    }

    /// Options the session started from
    #[must_use]
    pub fn compiler_defaults(&self) -> &Configuration {
        &self.compiler_defaults
    }

    #[must_use]
    pub fn compiler_options(&self) -> &Configuration {
        &self.compiler_options
    }

    /// Merge `opts` into the current options, skipping values that already
    /// match. Nothing happens when no value changes.
    pub fn update_compiler_settings(&mut self, mut opts: Configuration) {
        let current = &self.compiler_options;
        opts.retain(|key, value| !current.get(key).is_some_and(|c| c.loosely_equals(value)));
        if opts.is_empty() {
            return;
        }

        info!(options = %opts.to_json(), "updating compiler options");
        self.compiler_options.merge(&opts);
        self.apply_compiler_options();
    }

    /// Set a single option, even if unchanged.
    pub fn update_compiler_setting(&mut self, key: &str, value: impl Into<OptionValue>) {
        let value = value.into();
        info!(key, %value, "setting compiler option");
        self.compiler_options.insert(key, value);
        self.apply_compiler_options();
    }

    /// Replace all current options.
    pub fn set_compiler_settings(&mut self, opts: Configuration) {
        info!(options = %opts.to_json(), "setting compiler options");
        self.compiler_options = opts;
        self.apply_compiler_options();
    }

    /// Called with the new options after every change.
    pub fn set_did_update_compiler_settings(
        &mut self,
        listener: impl FnMut(&Configuration) + 'static,
    ) {
        self.did_update_compiler_settings = Some(Box::new(listener));
    }

    fn apply_compiler_options(&mut self) {
        self.service.set_compiler_options(&self.compiler_options);
        if let Some(listener) = self.did_update_compiler_settings.as_mut() {
            listener(&self.compiler_options);
        }
    }

    /// # Errors
    ///
    /// Propagates worker failures.
    pub fn emit_result(&self) -> Result<EmitOutput, SandboxError> {
        self.service.emit_output(&self.editor.uri())
    }

    /// The emitted JavaScript, or an empty string when nothing was emitted.
    ///
    /// # Errors
    ///
    /// Propagates worker failures.
    pub fn runnable_js(&self) -> Result<String, SandboxError> {
        let result = self.emit_result()?;
        Ok(result
            .javascript()
            .map(|file| file.text.clone())
            .unwrap_or_default())
    }

    /// # Errors
    ///
    /// Returns `SandboxError::Worker` when no declaration file was emitted.
    pub fn dts_for_code(&self) -> Result<String, SandboxError> {
        let result = self.emit_result()?;
        result
            .declarations()
            .map(|file| file.text.clone())
            .ok_or_else(|| SandboxError::Worker("no declaration file was emitted".to_string()))
    }

    /// # Errors
    ///
    /// Propagates worker failures.
    pub fn ast(&self) -> Result<serde_json::Value, SandboxError> {
        self.service
            .syntax_tree(&self.filepath, &self.editor.value(), &self.compiler_options)
    }

    /// Shareable query and fragment for the current state.
    ///
    /// `ambient` is the query of the page the sandbox runs on, and
    /// `current_version` the version of the loaded compiler.
    #[must_use]
    pub fn share_url(
        &self,
        ambient: &QueryParams,
        current_version: &str,
        overrides: Option<&[(String, Option<String>)]>,
    ) -> String {
        let text = self.editor.value();
        let mut request = ShareRequest::new(&self.compiler_options, &self.compiler_defaults, &text)
            .with_selection(self.editor.selection())
            .with_filetype(self.config.filetype.as_str())
            .with_ambient_query(ambient, current_version);
        request.overrides = overrides;
        build_shareable_url(&request, self.codec.as_ref())
    }

    /// Record an edit. Auxiliary features run on the next [`poll`] after the
    /// debounce delay.
    ///
    /// [`poll`]: Sandbox::poll
    pub fn on_content_changed(&mut self, now: Instant) {
        self.debouncer.notify(now);
    }

    /// Run the debounced features if due. Returns `true` when they ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        if self.debouncer.poll(now) {
            self.text_updated();
            true
        } else {
            false
        }
    }

    /// When the next [`poll`] will do work
    ///
    /// [`poll`]: Sandbox::poll
    #[must_use]
    pub fn next_poll(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    fn text_updated(&mut self) {
        let code = self.editor.value();

        if self.config.support_twoslash_compiler_options {
            if let Some(twoslash) = &self.twoslash {
                let opts = twoslash.extract(&code);
                self.update_compiler_settings(opts);
            }
        }

        if self.config.acquire_types {
            self.acquire_types(&code);
        }
    }

    fn acquire_types(&mut self, code: &str) {
        let Some(acquisition) = self.type_acquisition.as_mut() else {
            return;
        };
        for lib in acquisition.detect_new_imports(code) {
            self.service.add_extra_lib(&lib.code, &lib.path);
            debug!(path = %lib.path, "added declaration file to runtime");
        }
    }
}
