use serde::Deserialize;
use songrate_core::RecordAggregator;
use songrate_core::ports::{SessionCodec, TransferError};
use tracing::debug;

use crate::dto::{FORMAT_VERSION, SessionEnvelope};

/// Adapter de [`SessionCodec`] que usa JSON como formato de intercambio.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSessionCodec;

/// Sólo la versión, para rechazar formatos futuros antes de mirar el resto.
#[derive(Deserialize)]
struct VersionProbe {
  version: u32,
}

impl JsonSessionCodec {
  pub fn new() -> Self {
    Self
  }
}

impl SessionCodec for JsonSessionCodec {
  fn encode(&self, aggregator: &RecordAggregator) -> Result<Vec<u8>, TransferError> {
    let envelope = SessionEnvelope::from(aggregator);
    let bytes = serde_json::to_vec(&envelope).map_err(|e| TransferError::Encode(e.to_string()))?;
    debug!(entries = envelope.entry_count, bytes = bytes.len(), "session encoded");
    Ok(bytes)
  }

  fn decode(&self, bytes: &[u8]) -> Result<RecordAggregator, TransferError> {
    let probe: VersionProbe = serde_json::from_slice(bytes).map_err(|e| TransferError::Decode(e.to_string()))?;
    if probe.version != FORMAT_VERSION {
      return Err(TransferError::UnsupportedVersion { found: probe.version, expected: FORMAT_VERSION });
    }

    let envelope: SessionEnvelope =
      serde_json::from_slice(bytes).map_err(|e| TransferError::Decode(e.to_string()))?;
    let aggregator = RecordAggregator::try_from(envelope)?;
    debug!(entries = aggregator.len(), "session decoded");
    Ok(aggregator)
  }
}
