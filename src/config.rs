//! Runtime configuration: port, question pool path and static asset directory.
//!
//! Precedence: env vars > TOML file at QUIZ_CONFIG_PATH > defaults.

use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATA_PATH: &str = "./data/global_warming.json";
pub const DEFAULT_STATIC_DIR: &str = "./static";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
  pub port: u16,
  pub data_path: PathBuf,
  pub static_dir: PathBuf,
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      port: DEFAULT_PORT,
      data_path: PathBuf::from(DEFAULT_DATA_PATH),
      static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
    }
  }
}

/// Optional overrides accepted in the TOML file. Missing keys keep defaults.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct FileConfig {
  #[serde(default)] pub port: Option<u16>,
  #[serde(default)] pub data_path: Option<PathBuf>,
  #[serde(default)] pub static_dir: Option<PathBuf>,
}

impl AppConfig {
  /// Resolve from the process environment.
  pub fn from_env() -> Self {
    let file = load_file_config_from_env().unwrap_or_default();
    Self::resolve(file, |key| std::env::var(key).ok())
  }

  /// Layer env lookups over file values over defaults.
  pub fn resolve(file: FileConfig, env: impl Fn(&str) -> Option<String>) -> Self {
    let defaults = AppConfig::default();

    let port = match env("PORT") {
      Some(p) => p.parse::<u16>().unwrap_or_else(|e| {
        error!(target: "daily_quiz", port = %p, error = %e, "Ignoring invalid PORT");
        file.port.unwrap_or(defaults.port)
      }),
      None => file.port.unwrap_or(defaults.port),
    };
    let data_path = env("QUIZ_DATA_PATH")
      .filter(|s| !s.is_empty())
      .map(PathBuf::from)
      .or(file.data_path)
      .unwrap_or(defaults.data_path);
    let static_dir = env("QUIZ_STATIC_DIR")
      .filter(|s| !s.is_empty())
      .map(PathBuf::from)
      .or(file.static_dir)
      .unwrap_or(defaults.static_dir);

    Self { port, data_path, static_dir }
  }
}

/// Attempt to load `FileConfig` from QUIZ_CONFIG_PATH. On any parsing/IO error, returns None.
pub fn load_file_config_from_env() -> Option<FileConfig> {
  let path = std::env::var("QUIZ_CONFIG_PATH").ok()?;
  match std::fs::read_to_string(&path) {
    Ok(s) => match toml::from_str::<FileConfig>(&s) {
      Ok(cfg) => {
        info!(target: "daily_quiz", %path, "Loaded config (TOML)");
        Some(cfg)
      }
      Err(e) => {
        error!(target: "daily_quiz", %path, error = %e, "Failed to parse TOML config");
        None
      }
    },
    Err(e) => {
      error!(target: "daily_quiz", %path, error = %e, "Failed to read TOML config file");
      None
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |k: &str| map.get(k).cloned()
  }

  #[test]
  fn defaults_when_nothing_is_set() {
    let cfg = AppConfig::resolve(FileConfig::default(), env_of(&[]));
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.port, 8000);
  }

  #[test]
  fn env_overrides_file_overrides_defaults() {
    let file: FileConfig = toml::from_str("port = 9000\ndata_path = \"/srv/pool.json\"").expect("toml");
    let cfg = AppConfig::resolve(file, env_of(&[("PORT", "9100")]));
    assert_eq!(cfg.port, 9100);
    assert_eq!(cfg.data_path, PathBuf::from("/srv/pool.json"));
    assert_eq!(cfg.static_dir, PathBuf::from(DEFAULT_STATIC_DIR));
  }

  #[test]
  fn invalid_port_falls_back() {
    let file = FileConfig { port: Some(7000), ..Default::default() };
    let cfg = AppConfig::resolve(file, env_of(&[("PORT", "http")]));
    assert_eq!(cfg.port, 7000);
  }
}
