//! Config file reading utilities

use crate::error::{CliError, CliResult};
use playground_sandbox::SandboxConfig;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Project config, relative to the working directory
pub const PROJECT_CONFIG_PATH: &str = ".playground/config.yaml";

/// Sandbox settings picked up when `--config` is not given
pub const DEFAULT_SETTINGS_PATH: &str = "playground.yaml";

pub const DEFAULT_BASE_URL: &str = "https://www.typescriptlang.org/play";

/// Full config file structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    /// Version that `Nightly`/`next` links are pinned to
    pub default_version: Option<String>,
    /// Playground page shared URLs point at
    pub base_url: Option<String>,
}

impl ConfigFile {
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Read a project config file, or `None` if it does not exist.
pub fn read_config_file(config_path: &Path) -> CliResult<Option<ConfigFile>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| CliError::Message(format!("Failed to read config file: {e}")))?;

    // An empty file is an empty config
    if content.trim().is_empty() {
        return Ok(Some(ConfigFile::default()));
    }

    let config = serde_yaml::from_str(&content).map_err(|e| {
        CliError::Message(format!(
            "Failed to parse config file {}: {e}",
            config_path.display()
        ))
    })?;
    Ok(Some(config))
}

/// Read `.playground/config.yaml`, falling back to defaults.
pub fn read_project_config() -> CliResult<ConfigFile> {
    Ok(read_config_file(Path::new(PROJECT_CONFIG_PATH))?.unwrap_or_default())
}

/// Load sandbox settings from `path`, or from `playground.yaml` if present.
///
/// A missing explicit path is an error; a missing default file is not.
pub fn load_settings(path: Option<&str>) -> CliResult<SandboxConfig> {
    let path = match path {
        Some(p) => {
            if !Path::new(p).exists() {
                return Err(CliError::Message(format!("Settings file not found: {p}")));
            }
            p
        }
        None if Path::new(DEFAULT_SETTINGS_PATH).exists() => DEFAULT_SETTINGS_PATH,
        None => return Ok(SandboxConfig::default()),
    };

    let content = fs::read_to_string(path)?;
    Ok(SandboxConfig::parse(&content, Some(path))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::DirGuard;
    use playground_sandbox::{Filetype, OptionValue};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_read_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "defaultVersion: 5.4.5\nbaseUrl: http://localhost:8000/play\n").unwrap();

        let config = read_config_file(&path).unwrap().unwrap();
        assert_eq!(config.default_version.as_deref(), Some("5.4.5"));
        assert_eq!(config.base_url(), "http://localhost:8000/play");
    }

    #[test]
    fn test_read_config_file_missing_and_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        assert_eq!(read_config_file(&path).unwrap(), None);

        fs::write(&path, "").unwrap();
        let config = read_config_file(&path).unwrap().unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_read_config_file_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yaml");
        fs::write(&path, "baseUrl: [unclosed").unwrap();
        assert!(matches!(read_config_file(&path), Err(CliError::Message(_))));
    }

    #[test]
    #[serial]
    fn test_read_project_config_from_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path()).unwrap();
        assert_eq!(read_project_config().unwrap(), ConfigFile::default());

        fs::create_dir_all(".playground").unwrap();
        fs::write(PROJECT_CONFIG_PATH, "defaultVersion: 5.0.4\n").unwrap();
        assert_eq!(
            read_project_config().unwrap().default_version.as_deref(),
            Some("5.0.4")
        );
    }

    #[test]
    #[serial]
    fn test_load_settings_default_file() {
        let temp_dir = TempDir::new().unwrap();
        let _guard = DirGuard::new(temp_dir.path()).unwrap();
        assert_eq!(load_settings(None).unwrap(), SandboxConfig::default());

        fs::write(
            DEFAULT_SETTINGS_PATH,
            "filetype: js\ncompilerOptions:\n  noImplicitAny: false\n",
        )
        .unwrap();
        let settings = load_settings(None).unwrap();
        assert_eq!(settings.filetype, Filetype::Js);
        assert_eq!(
            settings.compiler_options.get("noImplicitAny"),
            Some(&OptionValue::Bool(false))
        );
    }

    #[test]
    fn test_load_settings_missing_explicit_path() {
        let result = load_settings(Some("/nonexistent/playground.yaml"));
        assert!(matches!(result, Err(CliError::Message(msg)) if msg.contains("not found")));
    }
}
