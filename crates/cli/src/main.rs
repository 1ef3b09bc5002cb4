//! Playground CLI
//!
//! Copyright 2025 Release Workshop Ltd
//! Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
//! See the LICENSE file in the project root for details.

mod codec;
mod commands;
mod error;
mod host;
#[cfg(test)]
mod test_helpers;
mod utils;

use clap::{CommandFactory, Parser, Subcommand};
use commands::{completion, decode, resolve, share};
use tracing_subscriber::EnvFilter;

/// Playground CLI - Build and inspect shareable playground URLs
#[derive(Parser)]
#[command(name = "playground")]
#[command(about = "Playground CLI - Build and inspect shareable playground URLs", long_about = None)]
#[command(version)]
struct Cli {
    /// Log debug output to stderr (overrides RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a shareable URL for a source file
    Share {
        /// Path to the source file
        #[arg(long)]
        file: String,
        /// Path to a sandbox settings file (defaults to playground.yaml if present)
        #[arg(long)]
        config: Option<String>,
        /// Filetype of the source: ts, js or d.ts
        #[arg(long)]
        filetype: Option<String>,
        /// Compiler option to set, as key=value (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE")]
        set: Vec<String>,
        /// Editor selection, as line:column-line:column
        #[arg(long)]
        selection: Option<String>,
        /// Page URL the session was opened from
        #[arg(long)]
        from_url: Option<String>,
        /// Compiler version to pin Nightly/next to
        #[arg(long)]
        ts_version: Option<String>,
        /// Base URL of the playground page
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Print the compiler options a playground URL resolves to
    Resolve {
        /// Playground page URL
        #[arg(long)]
        url: Option<String>,
        /// Filetype of the session: ts, js or d.ts
        #[arg(long)]
        filetype: Option<String>,
        /// Path to a sandbox settings file (defaults to playground.yaml if present)
        #[arg(long)]
        config: Option<String>,
        /// Output format: text or json
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Print the source text embedded in a playground URL
    Decode {
        /// Playground page URL
        #[arg(long)]
        url: String,
    },
    /// Generate shell completion scripts
    Completion {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

/// The clap command tree, used for completion generation
pub fn get_cli_command() -> clap::Command {
    Cli::command()
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match cli.command {
        Commands::Share {
            file,
            config,
            filetype,
            set,
            selection,
            from_url,
            ts_version,
            base_url,
        } => {
            let opts = share::Options {
                file,
                config,
                filetype,
                set,
                selection,
                from_url,
                ts_version,
                base_url,
            };
            share::run(&opts)
        }
        Commands::Resolve {
            url,
            filetype,
            config,
            format,
        } => {
            let opts = resolve::Options {
                url,
                filetype,
                config,
                format,
            };
            resolve::run(&opts)
        }
        Commands::Decode { url } => {
            let opts = decode::Options { url };
            decode::run(&opts)
        }
        Commands::Completion { shell } => {
            let opts = completion::Options { shell };
            completion::run(&opts)
        }
    };

    std::process::exit(exit_code);
}
