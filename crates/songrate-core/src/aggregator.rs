use std::fmt;

use tracing::debug;

use crate::domain::record::NOT_AVAILABLE;
use crate::domain::{AvgRating, Rating, SongRecord};
use crate::errors::{CoreError, InputError};

/// Mensaje único que devuelve [`RecordAggregator::render_all`] sin registros.
pub const NO_ENTRIES: &str = "No song entries recorded yet.";

/// Contenedor en memoria de hasta [`RecordAggregator::CAPACITY`] valoraciones.
///
/// Conserva el orden de inserción. Tiene dos estados, "con hueco" y "lleno",
/// y se decide cuál en cada inserción comparando el número de registros con la
/// capacidad. El agregador valida sus propias invariantes (título no vacío,
/// rating en `[1, 5]`) aunque la pantalla de entrada ya lo haga antes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordAggregator {
  records: Vec<SongRecord>,
}

/// Registro mejor valorado: etiqueta y rating, ambos como texto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighestRated {
  pub label: String,
  pub rating: String,
}

impl HighestRated {
  fn not_available() -> Self {
    Self { label: NOT_AVAILABLE.to_string(), rating: NOT_AVAILABLE.to_string() }
  }
}

impl From<HighestRated> for (String, String) {
  fn from(h: HighestRated) -> Self {
    (h.label, h.rating)
  }
}

impl fmt::Display for HighestRated {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} ({})", self.label, self.rating)
  }
}

impl RecordAggregator {
  pub const CAPACITY: usize = 4;

  pub fn new() -> Self {
    Self { records: Vec::with_capacity(Self::CAPACITY) }
  }

  /// Reconstruye un agregador a partir de registros ya validados.
  ///
  /// Falla si hay más registros que capacidad.
  pub fn from_records(records: Vec<SongRecord>) -> Result<Self, CoreError> {
    if records.len() > Self::CAPACITY {
      return Err(CoreError::CapacityExceeded { capacity: Self::CAPACITY });
    }
    Ok(Self { records })
  }

  pub fn capacity(&self) -> usize {
    Self::CAPACITY
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub fn is_full(&self) -> bool {
    self.records.len() >= Self::CAPACITY
  }

  pub fn remaining(&self) -> usize {
    Self::CAPACITY.saturating_sub(self.records.len())
  }

  pub fn records(&self) -> &[SongRecord] {
    &self.records
  }

  /// Inserta una valoración. Devuelve `true` si se guardó.
  ///
  /// Cualquier rechazo (lleno, título vacío, rating fuera de rango) devuelve
  /// `false` sin modificar el agregador.
  pub fn insert(&mut self, title: &str, artist: &str, comment: &str, rating: i64) -> bool {
    self.try_insert(title, artist, comment, rating).is_ok()
  }

  /// Igual que [`RecordAggregator::insert`] pero indica el motivo del rechazo.
  ///
  /// Devuelve el número de registros tras la inserción.
  pub fn try_insert(&mut self, title: &str, artist: &str, comment: &str, rating: i64) -> Result<usize, CoreError> {
    if self.is_full() {
      debug!(capacity = Self::CAPACITY, "insert rejected: aggregator is full");
      return Err(CoreError::CapacityExceeded { capacity: Self::CAPACITY });
    }

    let rating = u8::try_from(rating).ok().and_then(Rating::new).ok_or(InputError::RatingOutOfRange(rating))?;
    let record = SongRecord::new(title, artist, comment, rating)?;
    self.push(record)
  }

  /// Añade un registro ya construido.
  pub fn push(&mut self, record: SongRecord) -> Result<usize, CoreError> {
    if self.is_full() {
      return Err(CoreError::CapacityExceeded { capacity: Self::CAPACITY });
    }

    debug!(title = record.title(), rating = record.rating().value(), "record stored");
    self.records.push(record);
    Ok(self.records.len())
  }

  /// Media tipada de todas las valoraciones.
  pub fn average(&self) -> AvgRating {
    AvgRating::from_ratings(self.records.iter().map(SongRecord::rating))
  }

  /// Media aritmética de las valoraciones; `0.0` si no hay registros.
  pub fn mean_rating(&self) -> f64 {
    self.average().value()
  }

  /// Registro mejor valorado.
  ///
  /// Recorre en orden de inserción con comparación estricta, así que ante un
  /// empate gana el primero que alcanzó el máximo.
  pub fn highest_rated(&self) -> HighestRated {
    if self.records.is_empty() {
      return HighestRated::not_available();
    }

    let mut best_rating = 0u8;
    let mut best_label = NOT_AVAILABLE;

    for record in &self.records {
      let current = record.rating().value();
      if current > best_rating {
        best_rating = current;
        best_label = record.label();
      }
    }

    HighestRated { label: best_label.to_string(), rating: best_rating.to_string() }
  }

  /// Un bloque de texto por registro, en orden de inserción.
  pub fn render_all(&self) -> Vec<String> {
    if self.records.is_empty() {
      return vec![NO_ENTRIES.to_string()];
    }

    self.records.iter().map(SongRecord::render).collect()
  }
}
