//! Share command implementation

use crate::error::{CliError, CliResult};
use crate::host::open_session;
use crate::utils::config::{load_settings, read_project_config};
use crate::utils::options::{parse_assignments, parse_selection, unknown_keys, version_warning};
use playground_sandbox::share::SYMBOLIC_VERSIONS;
use playground_sandbox::PageLocation;
use std::fs;

pub struct Options {
    pub file: String,
    pub config: Option<String>,
    pub filetype: Option<String>,
    pub set: Vec<String>,
    pub selection: Option<String>,
    pub from_url: Option<String>,
    pub ts_version: Option<String>,
    pub base_url: Option<String>,
}

/// Print a shareable URL for a source file
pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(url) => {
            println!("{url}");
            0
        }
        Err(e) => {
            eprintln!("✗ Share failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<String> {
    let source = fs::read_to_string(&options.file).map_err(|e| {
        CliError::Message(format!("Failed to read source file {}: {e}", options.file))
    })?;

    let mut settings = load_settings(options.config.as_deref())?;
    if let Some(filetype) = &options.filetype {
        settings.filetype = filetype.parse()?;
    }
    settings.text = source;
    settings.suppress_automatically_getting_default_text = true;

    let location = match &options.from_url {
        Some(url) => PageLocation::parse(url)?,
        None => PageLocation::default(),
    };
    let selection = options
        .selection
        .as_deref()
        .map(parse_selection)
        .transpose()?;

    let mut sandbox = open_session(settings, &location, selection)?;

    let assignments = parse_assignments(&options.set)?;
    for (key, suggestions) in unknown_keys(&assignments, sandbox.compiler_defaults()) {
        if suggestions.is_empty() {
            eprintln!("⚠ Warning: '{key}' is not a playground option; it will always be shared");
        } else {
            eprintln!(
                "⚠ Warning: '{key}' is not a playground option. Did you mean: {}?",
                suggestions.join(", ")
            );
        }
    }
    sandbox.update_compiler_settings(assignments);

    let project = read_project_config()?;
    let version = match options
        .ts_version
        .as_deref()
        .or(project.default_version.as_deref())
    {
        Some(version) => version,
        None => match location.query().get("ts") {
            Some(ts) if SYMBOLIC_VERSIONS.contains(&ts) => {
                return Err(CliError::Message(format!(
                    "ts={ts} must be pinned to a concrete compiler version: pass --ts-version or set defaultVersion in .playground/config.yaml"
                )));
            }
            _ => "",
        },
    };
    if let Some(warning) = version_warning(version) {
        eprintln!("⚠ Warning: {warning}");
    }

    let base_url = options.base_url.as_deref().unwrap_or(project.base_url());
    let url = sandbox.share_url(location.query(), version, None);
    Ok(format!("{base_url}{url}"))
}
