mod backend;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use paths::{BASE_DIR_ENV, ConfigError, SongratePaths};

use once_cell::sync::Lazy;

// Singleton del backend de config (SONGRATE_BASE_DIR / sistema). Se guarda el
// error de inicialización en vez de abortar: quien lo use decide qué hacer.
static CONFIG_BACKEND: Lazy<Result<TomlConfigBackend, ConfigError>> = Lazy::new(build_backend);

fn build_backend() -> Result<TomlConfigBackend, ConfigError> {
  Ok(TomlConfigBackend::new(SongratePaths::detect()?))
}

/// Backend global de configuración.
///
/// Falla (sin pánico) si no se pudo determinar o crear el directorio de
/// configuración.
pub fn config_backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  Result::as_ref(&*CONFIG_BACKEND).map_err(|e| ConfigError::Other(format!("config directory unavailable: {e}")))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::paths::tests::EnvVarGuard;
  use serial_test::serial;

  #[test]
  #[serial]
  fn unusable_base_dir_is_an_error() {
    let _env = EnvVarGuard::new(BASE_DIR_ENV, "/dev/null/songrate");

    assert!(matches!(build_backend(), Err(ConfigError::Io(_))));
  }
}
