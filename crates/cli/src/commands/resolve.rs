//! Resolve command implementation

use crate::error::{CliError, CliResult};
use crate::host::{open_session, OfflineSandbox};
use crate::utils::config::load_settings;
use playground_sandbox::{diff_against, OptionValue, PageLocation};
use serde_json::json;

pub struct Options {
    pub url: Option<String>,
    pub filetype: Option<String>,
    pub config: Option<String>,
    pub format: String,
}

/// Print the compiler options a playground URL resolves to
pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(e) => {
            eprintln!("✗ Resolve failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<String> {
    let format = options.format.to_lowercase();
    if format != "text" && format != "json" {
        return Err(CliError::Message(format!(
            "Unsupported format: {}. Supported formats: text, json",
            options.format
        )));
    }

    let mut settings = load_settings(options.config.as_deref())?;
    if let Some(filetype) = &options.filetype {
        settings.filetype = filetype.parse()?;
    }
    settings.suppress_automatically_getting_default_text = true;

    let location = match &options.url {
        Some(url) => PageLocation::parse(url)?,
        None => PageLocation::default(),
    };
    let sandbox = open_session(settings, &location, None)?;

    if format == "json" {
        render_json(&sandbox)
    } else {
        Ok(render_text(&sandbox))
    }
}

fn render_json(sandbox: &OfflineSandbox) -> CliResult<String> {
    let changed = diff_against(sandbox.compiler_options(), sandbox.compiler_defaults());
    let output = json!({
        "filetype": sandbox.config().filetype.as_str(),
        "filepath": sandbox.filepath(),
        "compilerOptions": sandbox.compiler_options().to_json(),
        "changed": changed.keys().collect::<Vec<_>>(),
    });
    serde_json::to_string_pretty(&output)
        .map_err(|e| CliError::Message(format!("Failed to serialize options: {e}")))
}

fn render_text(sandbox: &OfflineSandbox) -> String {
    let defaults = sandbox.compiler_defaults();
    let mut lines = vec![format!(
        "{} ({})",
        sandbox.filepath(),
        sandbox.language()
    )];

    for (key, value) in sandbox.compiler_options().iter() {
        match defaults.get(key) {
            Some(default) if default == value => {
                lines.push(format!("    {key}: {}", describe(value)));
            }
            Some(default) => lines.push(format!(
                "  * {key}: {} (default: {})",
                describe(value),
                describe(default)
            )),
            None => lines.push(format!("  * {key}: {}", describe(value))),
        }
    }
    lines.join("\n")
}

fn describe(value: &OptionValue) -> String {
    match value {
        OptionValue::Enum(e) => format!("{} ({})", e.name(), e.code()),
        other => other.to_string(),
    }
}
