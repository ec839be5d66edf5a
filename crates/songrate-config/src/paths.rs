use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Variable de entorno que fuerza un directorio base (modo portable / tests).
pub const BASE_DIR_ENV: &str = "SONGRATE_BASE_DIR";

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
  #[error("toml error: {0}")]
  Toml(#[from] toml::de::Error),
  #[error("directories error: could not determine home directory")]
  Directories,
  #[error("other: {0}")]
  Other(String),
}

/// Directorios que usa songrate. Sólo hay configuración: los registros
/// de una sesión nunca se guardan en disco.
#[derive(Debug, Clone)]
pub struct SongratePaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl SongratePaths {
  pub fn new() -> Result<Self, ConfigError> {
    if let Ok(env_base) = std::env::var(BASE_DIR_ENV) {
      return Self::from_base(Path::new(&env_base));
    }

    let proj_dirs = ProjectDirs::from("com", "songrate", "songrate").ok_or(ConfigError::Directories)?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir: config_dir.clone(), config_dir })
  }

  /// Coloca todo bajo `base` (`base/config`), creando los directorios.
  pub fn from_base(base: &Path) -> Result<Self, ConfigError> {
    let config_dir = base.join("config");
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir: base.to_path_buf(), config_dir })
  }

  pub fn detect() -> Result<Self, ConfigError> {
    Self::new()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("songrate.toml")
  }
}
