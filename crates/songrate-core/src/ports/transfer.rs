use crate::aggregator::RecordAggregator;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
  #[error("encode error: {0}")]
  Encode(String),

  #[error("decode error: {0}")]
  Decode(String),

  #[error("unsupported payload version {found} (expected {expected})")]
  UnsupportedVersion { found: u32, expected: u32 },

  #[error("corrupt payload: {0}")]
  Corrupt(String),
}

/// Port que abstrae cómo viaja un [`RecordAggregator`] entre pantallas.
///
/// El formato de los bytes es decisión del adapter. Lo único que exige el
/// dominio es que `decode(encode(x))` reproduzca los mismos registros, en el
/// mismo orden.
pub trait SessionCodec {
  fn encode(&self, aggregator: &RecordAggregator) -> Result<Vec<u8>, TransferError>;
  fn decode(&self, bytes: &[u8]) -> Result<RecordAggregator, TransferError>;
}
