/*!
 * Copyright 2025 Release Workshop Ltd
 * Licensed under the Elastic License 2.0; you may not use this file except in compliance with the Elastic License 2.0.
 * See the LICENSE file in the project root for details.
 */
use thiserror::Error;

/// Top-level error type for the sandbox
///
/// Option resolution and URL building never fail; these errors come from
/// reading settings, parsing page locations, and setting up a sandbox.
#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid location: {0}")]
    Location(String),

    #[error("Worker error: {0}")]
    Worker(String),
}

/// Errors for YAML/JSON settings parsing
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid YAML: {0}")]
    InvalidYaml(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid field type: {0}")]
    InvalidFieldType(String),

    #[error("Invalid compiler option value: {0}")]
    InvalidOptionValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_error_from_parse_error() {
        let parse_error = ParseError::InvalidYaml("test".to_string());
        let sandbox_error: SandboxError = parse_error.into();
        match sandbox_error {
            SandboxError::Parse(e) => match e {
                ParseError::InvalidYaml(msg) => assert_eq!(msg, "test"),
                _ => panic!("Expected InvalidYaml"),
            },
            _ => panic!("Expected Parse variant"),
        }
    }

    #[test]
    fn test_parse_error_variants() {
        let error1 = ParseError::InvalidJson("json error".to_string());
        assert!(error1.to_string().contains("json error"));

        let error2 = ParseError::InvalidFieldType("filetype".to_string());
        assert!(error2.to_string().contains("filetype"));

        let error3 = ParseError::InvalidOptionValue("target".to_string());
        assert!(error3.to_string().contains("target"));
    }

    #[test]
    fn test_sandbox_error_variants() {
        let error1 = SandboxError::Config("no element".to_string());
        assert!(error1.to_string().starts_with("Configuration error"));

        let error2 = SandboxError::Location("bad url".to_string());
        assert!(error2.to_string().contains("bad url"));

        let error3 = SandboxError::Worker("no output".to_string());
        assert!(error3.to_string().contains("no output"));
    }
}
