// HitMapper - platform/config.rs
//
// Optional config.toml loading with startup validation.
//
// Only diagnostics are configurable. The filtered client address and the
// expected field count are compile-time constants and have no config keys.

use crate::util::constants;
use crate::util::error::ConfigError;
use std::path::Path;

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated configuration derived from config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapperConfig {
    /// Logging level string (for init before tracing is available).
    pub log_level: Option<String>,
}

/// Load and validate the config file at `path`.
///
/// Returns the validated config plus a list of non-fatal warnings for values
/// that were rejected and replaced by defaults. Runs before logging is
/// initialised, so warnings are returned rather than logged.
///
/// The file was named explicitly on the command line, so a missing,
/// oversized, or unparseable file is an error rather than a silent fallback.
pub fn load_config(path: &Path) -> Result<(MapperConfig, Vec<String>), ConfigError> {
    let metadata = std::fs::metadata(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if metadata.len() > constants::MAX_CONFIG_FILE_SIZE {
        return Err(ConfigError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_CONFIG_FILE_SIZE,
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: RawConfig = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(validate(raw))
}

/// Validate each field against named constants, accumulating warnings.
fn validate(raw: RawConfig) -> (MapperConfig, Vec<String>) {
    let mut warnings = Vec::new();
    let mut config = MapperConfig::default();

    if let Some(level) = raw.logging.level {
        let lower = level.to_lowercase();
        if constants::VALID_LOG_LEVELS.contains(&lower.as_str()) {
            config.log_level = Some(lower);
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: {}. Using default ({}).",
                constants::VALID_LOG_LEVELS.join(", "),
                constants::DEFAULT_LOG_LEVEL,
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_valid_level_is_accepted() {
        let file = write_config("[logging]\nlevel = \"DEBUG\"\n");
        let (config, warnings) = load_config(file.path()).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = write_config("");
        let (config, warnings) = load_config(file.path()).unwrap();
        assert_eq!(config, MapperConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let file = write_config("[mapper]\ntarget_ip = \"1.2.3.4\"\n[logging]\nlevel = \"info\"\n");
        let (config, warnings) = load_config(file.path()).unwrap();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_invalid_level_warns_and_falls_back() {
        let file = write_config("[logging]\nlevel = \"loud\"\n");
        let (config, warnings) = load_config(file.path()).unwrap();
        assert_eq!(config.log_level, None);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("loud"));
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        let file = write_config("[logging\nlevel = ");
        let result = load_config(file.path());
        assert!(
            matches!(result, Err(ConfigError::TomlParse { .. })),
            "got {result:?}"
        );
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_config(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })), "got {result:?}");
    }

    #[test]
    fn test_oversized_file_is_rejected() {
        let padding = "#".repeat(constants::MAX_CONFIG_FILE_SIZE as usize + 1);
        let file = write_config(&padding);
        let result = load_config(file.path());
        assert!(
            matches!(result, Err(ConfigError::FileTooLarge { .. })),
            "got {result:?}"
        );
    }
}
