//! Decode command implementation

use crate::codec::LzStringCodec;
use crate::error::{CliError, CliResult};
use playground_sandbox::{initial_code, PageLocation, TextCodec};

pub struct Options {
    pub url: String,
}

/// Print the source text embedded in a playground URL
pub fn run(options: &Options) -> i32 {
    match run_inner(options) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(e) => {
            eprintln!("✗ Decode failed");
            eprintln!("  Error: {e}");
            1
        }
    }
}

fn run_inner(options: &Options) -> CliResult<String> {
    let location = PageLocation::parse(&options.url)?;
    let hash = location.hash();

    if let Some(data) = hash.strip_prefix("code/") {
        return LzStringCodec.decompress(data.trim()).ok_or_else(|| {
            CliError::Message("The code fragment could not be decoded".to_string())
        });
    }
    if hash.starts_with("src=") {
        return Ok(initial_code("", &location, &LzStringCodec));
    }

    Err(CliError::Message(
        "URL has no code fragment (expected #code/... or #src=...)".to_string(),
    ))
}
