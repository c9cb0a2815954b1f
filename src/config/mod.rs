use std::path::Path;

use configparser::ini::Ini;
use thiserror::Error;

const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("failed to read config file '{path}': {reason}")]
  Read { path: String, reason: String },

  #[error("failed to parse config: {0}")]
  Parse(String),
}

/// Log configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
  /// Log file path, if not set, logs will be printed to stdout
  pub file: Option<String>,
  /// Log level, default is "info"
  pub level: String,
}

impl Default for LogConfig {
  fn default() -> Self {
    Self {
      file: None,
      level: DEFAULT_LOG_LEVEL.to_string(),
    }
  }
}

/// Service configuration.
///
/// Read from an INI file with `[server]` and `[log]` sections; every key is
/// optional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
  /// HTTP listening address
  pub server_addr: String,

  /// Log configuration
  pub log: LogConfig,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      server_addr: DEFAULT_SERVER_ADDR.to_string(),
      log: LogConfig::default(),
    }
  }
}

impl Config {
  /// Load configuration from an INI file
  pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let path = path.as_ref();
    let mut ini = Ini::new();
    ini.load(path).map_err(|reason| ConfigError::Read {
      path: path.display().to_string(),
      reason,
    })?;
    Ok(Self::from_ini(&ini))
  }

  /// Parse configuration from INI text
  pub fn from_ini_str(text: &str) -> Result<Self, ConfigError> {
    let mut ini = Ini::new();
    ini.read(text.to_string()).map_err(ConfigError::Parse)?;
    Ok(Self::from_ini(&ini))
  }

  fn from_ini(ini: &Ini) -> Self {
    let defaults = Self::default();
    Self {
      server_addr: non_empty(ini.get("server", "addr")).unwrap_or(defaults.server_addr),
      log: LogConfig {
        file: non_empty(ini.get("log", "file")),
        level: non_empty(ini.get("log", "level")).unwrap_or(defaults.log.level),
      },
    }
  }
}

fn non_empty(value: Option<String>) -> Option<String> {
  value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;

  #[test]
  fn test_default_config() {
    let config = Config::from_ini_str("").unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.server_addr, "0.0.0.0:8080");
    assert_eq!(config.log.level, "info");
    assert_eq!(config.log.file, None);
  }

  #[test]
  fn test_parse_config() {
    let config_str = r#"
[server]
addr = 127.0.0.1:9090

[log]
level = debug
file = /tmp/kasir.log
"#;

    let config = Config::from_ini_str(config_str).unwrap();
    assert_eq!(config.server_addr, "127.0.0.1:9090");
    assert_eq!(config.log.level, "debug");
    assert_eq!(config.log.file.as_deref(), Some("/tmp/kasir.log"));
  }

  #[test]
  fn test_partial_config_keeps_defaults() {
    let config = Config::from_ini_str("[log]\nlevel = warn\n").unwrap();
    assert_eq!(config.server_addr, "0.0.0.0:8080");
    assert_eq!(config.log.level, "warn");
  }

  #[test]
  fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[server]\naddr = 0.0.0.0:3000").unwrap();
    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.server_addr, "0.0.0.0:3000");
  }

  #[test]
  fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = Config::from_file(dir.path().join("absent.ini"));
    assert!(matches!(result, Err(ConfigError::Read { .. })));
  }
}
