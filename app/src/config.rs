use serde::{Deserialize, Serialize};
use songrate_config::{ConfigBackend, ConfigError, config_backend};

/// Sección `[entry]`: opciones de la pantalla de entrada.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct EntryConfig {
  /// Catálogo fijo de descripciones que se ofrecen en el selector.
  #[serde(default = "default_descriptions")]
  pub descriptions: Vec<String>,
}

fn default_descriptions() -> Vec<String> {
  ["Catchy", "Relaxing", "Energetic", "Emotional", "Nostalgic", "Overrated"].map(String::from).to_vec()
}

impl Default for EntryConfig {
  fn default() -> Self {
    EntryConfig { descriptions: default_descriptions() }
  }
}

impl EntryConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  /// Variante para tests: inyectar un backend distinto.
  ///
  /// Las descripciones se guardan recortadas y sin entradas vacías; si no
  /// queda ninguna se usa el catálogo por defecto.
  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let mut cfg: EntryConfig = backend.load_section_with_default("entry")?;
    cfg.descriptions =
      cfg.descriptions.iter().map(|d| d.trim()).filter(|d| !d.is_empty()).map(str::to_string).collect();
    if cfg.descriptions.is_empty() {
      cfg.descriptions = default_descriptions();
    }
    backend.save_section("entry", &cfg)?;
    Ok(cfg)
  }
}

/// Sección `[log]`: filtro por defecto de `tracing` cuando no hay `RUST_LOG`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LogConfig {
  #[serde(default = "default_filter")]
  pub filter: String,
}

fn default_filter() -> String {
  "info".to_string()
}

impl Default for LogConfig {
  fn default() -> Self {
    LogConfig { filter: default_filter() }
  }
}

impl LogConfig {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(config_backend()?)
  }

  pub fn load_from<B: ConfigBackend>(backend: &B) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default("log")?;
    backend.save_section("log", &cfg)?;
    Ok(cfg)
  }
}
