use std::fmt;

use songrate_core::InputError;

/// Cuánto tiempo se muestra un aviso.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeDuration {
  Short,
  /// Aviso bloqueante: el usuario tiene que leerlo antes de seguir.
  Long,
}

/// Aviso visible que produce la pantalla de entrada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
  Added { total: usize },
  Rejected(InputError),
  Full { capacity: usize },
  LimitReached { capacity: usize },
}

impl Notice {
  pub fn duration(&self) -> NoticeDuration {
    match self {
      Notice::Full { .. } => NoticeDuration::Long,
      _ => NoticeDuration::Short,
    }
  }

  pub fn is_error(&self) -> bool {
    matches!(self, Notice::Rejected(_) | Notice::Full { .. })
  }
}

impl fmt::Display for Notice {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Notice::Added { total } => write!(f, "Entry added successfully! Total entries: {total}"),
      Notice::Rejected(InputError::BlankTitle) => write!(f, "Error: Song name cannot be empty."),
      Notice::Rejected(InputError::RatingNotNumeric(_)) => write!(f, "Invalid rating selected."),
      Notice::Rejected(InputError::RatingOutOfRange(_)) => write!(f, "Rating must be between 1 and 5."),
      Notice::Rejected(InputError::UnknownDescription(_)) => {
        write!(f, "Please choose a description from the list.")
      }
      Notice::Full { capacity } => write!(f, "Maximum {capacity} entries reached. Cannot add more."),
      Notice::LimitReached { capacity } => write!(f, "Maximum {capacity} entries reached."),
    }
  }
}
