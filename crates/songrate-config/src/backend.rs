use crate::paths::{ConfigError, SongratePaths};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use tracing::debug;

// Usa toml_edit para escritura preservando comentarios
use toml_edit::{DocumentMut, Item, Table};

pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;

  /// Como `load_section`, pero un archivo o sección ausente da `T::default()`.
  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default;

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: SongratePaths,
}

impl TomlConfigBackend {
  pub fn new(paths: SongratePaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &SongratePaths {
    &self.paths
  }

  fn read_table(&self) -> Result<Option<toml::Table>, ConfigError> {
    let path = self.paths.config_file();
    let content = match fs::read_to_string(&path) {
      Ok(c) => c,
      Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
      Err(e) => return Err(e.into()),
    };

    Ok(Some(toml::from_str(&content)?))
  }
}

fn decode_section<T: DeserializeOwned>(section: &str, value: &toml::Value) -> Result<T, ConfigError> {
  value.clone().try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let path = self.paths.config_file();
    let table = self
      .read_table()?
      .ok_or_else(|| ConfigError::Other(format!("config file {} does not exist", path.display())))?;

    let value = table
      .get(section)
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {}", path.display())))?;

    decode_section(section, value)
  }

  fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(table) = self.read_table()? else {
      debug!(section, "config file not found, using defaults");
      return Ok(T::default());
    };

    let Some(value) = table.get(section) else {
      debug!(section, "config section not found, using defaults");
      return Ok(T::default());
    };

    decode_section(section, value)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    // 1) Leer config actual como DocumentMut o crear doc vacío si no existe.
    let mut doc: DocumentMut = match fs::read_to_string(&path) {
      Ok(content) => content
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("parse toml_edit doc: {e}")))?,
      Err(e) if e.kind() == ErrorKind::NotFound => DocumentMut::new(),
      Err(e) => return Err(e.into()),
    };

    // 2) Serializar la sección con `toml` (serde) y volver a parsearla como
    //    tabla de toml_edit. `section_str` no lleva cabecera: "foo = 1\n".
    let section_str = toml::to_string(value)
      .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
    let section_doc = section_str
      .parse::<DocumentMut>()
      .map_err(|e| ConfigError::Other(format!("parse section as doc: {e}")))?;

    // 3) Reemplazar sólo esa sección; el resto del documento queda intacto.
    let mut table = Table::new();
    for (key, item) in section_doc.as_table().iter() {
      table.insert(key, item.clone());
    }
    doc[section] = Item::Table(table);

    crate::io::atomic_write_str(&path, &doc.to_string())?;
    debug!(section, path = %path.display(), "config section saved");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    name: String,
    tags: Vec<String>,
  }

  fn backend_in(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(SongratePaths::from_base(dir).unwrap())
  }

  #[test]
  fn missing_file_yields_default() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());

    let sample: Sample = backend.load_section_with_default("sample").unwrap();
    assert_eq!(sample, Sample::default());
    assert!(backend.load_section::<Sample>("sample").is_err());
  }

  #[test]
  fn save_then_load_round_trips() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    let sample = Sample { name: "songs".into(), tags: vec!["a".into(), "b".into()] };

    backend.save_section("sample", &sample).unwrap();

    assert_eq!(backend.load_section::<Sample>("sample").unwrap(), sample);
    assert_eq!(backend.load_section_with_default::<Sample>("other").unwrap(), Sample::default());
  }

  #[test]
  fn save_preserves_other_sections_and_comments() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    let path = backend.paths().config_file();
    fs::write(&path, "# keep me\n[log]\nfilter = \"debug\" # verbose\n").unwrap();

    backend.save_section("sample", &Sample { name: "x".into(), tags: vec![] }).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("# keep me"));
    assert!(written.contains("# verbose"));
    assert!(written.contains("[sample]"));
  }

  #[test]
  fn malformed_section_is_reported() {
    let tmp = tempdir().unwrap();
    let backend = backend_in(tmp.path());
    fs::write(backend.paths().config_file(), "[sample]\nname = 3\n").unwrap();

    let err = backend.load_section_with_default::<Sample>("sample").unwrap_err();
    assert!(matches!(err, ConfigError::Other(msg) if msg.contains("[sample]")));
  }
}
