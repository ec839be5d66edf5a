use std::fmt;

use songrate_core::RecordAggregator;
use songrate_core::ports::SessionCodec;
use tracing::warn;

const NOT_AVAILABLE: &str = "N/A";

/// Pantalla de resumen: sólo lee del agregador recibido, nunca lo modifica.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryScreen {
  entries: Vec<String>,
  average: String,
  highest: String,
  placeholder: bool,
}

impl SummaryScreen {
  /// Abre el resumen a partir del payload que envía la pantalla de entrada.
  ///
  /// Sin payload, o con uno que no se puede decodificar, muestra valores
  /// `N/A` en lugar de fallar.
  pub fn open<C: SessionCodec>(payload: Option<&[u8]>, codec: &C) -> Self {
    let Some(bytes) = payload else {
      warn!("summary opened without a session payload");
      return Self::placeholder();
    };

    match codec.decode(bytes) {
      Ok(aggregator) => Self::from_aggregator(&aggregator),
      Err(e) => {
        warn!(error = %e, "could not decode session payload");
        Self::placeholder()
      }
    }
  }

  pub fn from_aggregator(aggregator: &RecordAggregator) -> Self {
    let average = aggregator.average();

    Self {
      entries: aggregator.render_all(),
      average: format!("Average rating: {:.2} {}", average.value(), average.stars()),
      highest: format!("Highest-rated song: {}", aggregator.highest_rated()),
      placeholder: false,
    }
  }

  pub fn placeholder() -> Self {
    Self {
      entries: Vec::new(),
      average: format!("Average rating: {NOT_AVAILABLE}"),
      highest: format!("Highest-rated song: {NOT_AVAILABLE}"),
      placeholder: true,
    }
  }

  pub fn entries(&self) -> &[String] {
    &self.entries
  }

  pub fn average_line(&self) -> &str {
    &self.average
  }

  pub fn highest_line(&self) -> &str {
    &self.highest
  }

  /// `true` si no llegó ningún agregador válido.
  pub fn is_placeholder(&self) -> bool {
    self.placeholder
  }
}

impl fmt::Display for SummaryScreen {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "{}", self.highest)?;
    writeln!(f, "{}", self.average)?;
    for entry in &self.entries {
      writeln!(f, "{entry}")?;
    }
    Ok(())
  }
}
