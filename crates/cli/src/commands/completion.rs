//! Shell completion command implementation

use crate::error::{CliError, CliResult};
use crate::get_cli_command;
use clap_complete::{generate, Shell};
use std::io::{self, Write};

pub struct Options {
    pub shell: String,
}

/// Write a completion script for the requested shell to stdout
pub fn run(options: &Options) -> i32 {
    match run_inner(options, &mut io::stdout()) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("✗ Completion generation failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn parse_shell(name: &str) -> CliResult<Shell> {
    if name.trim().is_empty() {
        return Err(CliError::Message(
            "Shell name is required. Supported shells: bash, zsh, fish".to_string(),
        ));
    }
    match name.to_lowercase().as_str() {
        "bash" => Ok(Shell::Bash),
        "zsh" => Ok(Shell::Zsh),
        "fish" => Ok(Shell::Fish),
        _ => Err(CliError::Message(format!(
            "Unsupported shell: {name}. Supported shells: bash, zsh, fish"
        ))),
    }
}

fn run_inner(options: &Options, out: &mut dyn Write) -> CliResult<()> {
    let shell = parse_shell(&options.shell)?;
    let mut cmd = get_cli_command();
    generate(shell, &mut cmd, "playground", out);
    Ok(())
}
