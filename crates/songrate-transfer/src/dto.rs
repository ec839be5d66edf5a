use serde::{Deserialize, Serialize};
use songrate_core::RecordAggregator;
use songrate_core::domain::{Rating, SongRecord};
use songrate_core::errors::InputError;
use songrate_core::ports::TransferError;

/// Versión actual del formato de intercambio.
pub const FORMAT_VERSION: u32 = 1;

/// Forma serializada de un [`SongRecord`].
///
/// Independiente de la representación interna del dominio: el rating viaja
/// como entero y se vuelve a validar al reconstruir.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordDto {
  pub title: String,
  pub artist: Option<String>,
  pub comment: String,
  pub rating: u8,
}

impl From<&SongRecord> for RecordDto {
  fn from(record: &SongRecord) -> Self {
    RecordDto {
      title: record.title().to_string(),
      artist: record.artist().map(str::to_string),
      comment: record.comment().unwrap_or_default().to_string(),
      rating: record.rating().value(),
    }
  }
}

impl TryFrom<RecordDto> for SongRecord {
  type Error = InputError;

  fn try_from(dto: RecordDto) -> Result<Self, Self::Error> {
    let rating = Rating::try_from(dto.rating)?;
    SongRecord::new(&dto.title, dto.artist.as_deref().unwrap_or_default(), &dto.comment, rating)
  }
}

/// Sobre versionado con el contenido completo de un [`RecordAggregator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionEnvelope {
  pub version: u32,
  pub entry_count: usize,
  pub entries: Vec<RecordDto>,
}

impl From<&RecordAggregator> for SessionEnvelope {
  fn from(aggregator: &RecordAggregator) -> Self {
    let entries: Vec<RecordDto> = aggregator.records().iter().map(RecordDto::from).collect();
    SessionEnvelope { version: FORMAT_VERSION, entry_count: entries.len(), entries }
  }
}

impl TryFrom<SessionEnvelope> for RecordAggregator {
  type Error = TransferError;

  fn try_from(envelope: SessionEnvelope) -> Result<Self, Self::Error> {
    if envelope.version != FORMAT_VERSION {
      return Err(TransferError::UnsupportedVersion { found: envelope.version, expected: FORMAT_VERSION });
    }

    if envelope.entry_count != envelope.entries.len() {
      return Err(TransferError::Corrupt(format!(
        "entry_count is {} but {} entries are present",
        envelope.entry_count,
        envelope.entries.len()
      )));
    }

    let records = envelope
      .entries
      .into_iter()
      .enumerate()
      .map(|(i, dto)| SongRecord::try_from(dto).map_err(|e| TransferError::Corrupt(format!("entry {i}: {e}"))))
      .collect::<Result<Vec<_>, _>>()?;

    RecordAggregator::from_records(records).map_err(|e| TransferError::Corrupt(e.to_string()))
  }
}
