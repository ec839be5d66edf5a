use songrate_core::domain::Rating;
use songrate_core::ports::{SessionCodec, TransferError};
use songrate_core::{CoreError, InputError, RecordAggregator};
use tracing::{debug, info};

use crate::config::EntryConfig;
use crate::notice::Notice;

/// Valores tal como llegan de los widgets: texto sin validar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryForm {
  pub title: String,
  pub artist: String,
  /// Valor elegido en el selector de rating.
  pub rating: String,
  /// Valor elegido en el selector de descripciones.
  pub description: String,
}

/// Campos ya validados, listos para el agregador.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ValidEntry {
  title: String,
  artist: String,
  comment: String,
  rating: Rating,
}

/// Pantalla de entrada: recoge y valida valoraciones y es dueña del
/// [`RecordAggregator`] de la sesión.
pub struct EntryScreen {
  aggregator: RecordAggregator,
  descriptions: Vec<String>,
}

impl EntryScreen {
  pub fn new(config: &EntryConfig) -> Self {
    Self { aggregator: RecordAggregator::new(), descriptions: config.descriptions.clone() }
  }

  pub fn descriptions(&self) -> &[String] {
    &self.descriptions
  }

  pub fn aggregator(&self) -> &RecordAggregator {
    &self.aggregator
  }

  /// Estado del botón "Add entry".
  pub fn add_enabled(&self) -> bool {
    !self.aggregator.is_full()
  }

  /// Aviso a mostrar cuando la lista ya está llena.
  pub fn limit_notice(&self) -> Option<Notice> {
    self.aggregator.is_full().then(|| Notice::LimitReached { capacity: self.aggregator.capacity() })
  }

  /// Aviso bloqueante si se intenta abrir el formulario con la lista llena.
  pub fn full_notice(&self) -> Option<Notice> {
    self.aggregator.is_full().then(|| Notice::Full { capacity: self.aggregator.capacity() })
  }

  fn validate(&self, form: &EntryForm) -> Result<ValidEntry, InputError> {
    let title = form.title.trim();
    if title.is_empty() {
      return Err(InputError::BlankTitle);
    }

    let rating: Rating = form.rating.parse()?;

    let description = form.description.trim();
    if !self.descriptions.iter().any(|d| d.trim() == description) {
      return Err(InputError::UnknownDescription(description.to_string()));
    }

    Ok(ValidEntry {
      title: title.to_string(),
      artist: form.artist.trim().to_string(),
      comment: description.to_string(),
      rating,
    })
  }

  /// Valida el formulario y, si es correcto, lo inserta.
  ///
  /// Una entrada inválida nunca llega al agregador.
  pub fn submit(&mut self, form: &EntryForm) -> Notice {
    let entry = match self.validate(form) {
      Ok(entry) => entry,
      Err(e) => {
        debug!(error = %e, "entry rejected by form validation");
        return Notice::Rejected(e);
      }
    };

    match self.aggregator.try_insert(&entry.title, &entry.artist, &entry.comment, i64::from(entry.rating.value())) {
      Ok(total) => {
        info!(total, "entry added");
        Notice::Added { total }
      }
      Err(CoreError::CapacityExceeded { capacity }) => Notice::Full { capacity },
      Err(CoreError::InvalidInput(e)) => Notice::Rejected(e),
    }
  }

  /// Empaqueta el agregador para la pantalla de resumen.
  pub fn open_summary<C: SessionCodec>(&self, codec: &C) -> Result<Vec<u8>, TransferError> {
    codec.encode(&self.aggregator)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::notice::NoticeDuration;
  use songrate_transfer::JsonSessionCodec;

  fn form(title: &str, rating: &str, description: &str) -> EntryForm {
    EntryForm {
      title: title.into(),
      artist: "Artist".into(),
      rating: rating.into(),
      description: description.into(),
    }
  }

  fn screen() -> EntryScreen {
    EntryScreen::new(&EntryConfig::default())
  }

  #[test]
  fn valid_entry_is_added() {
    let mut screen = screen();
    let notice = screen.submit(&form("  Hey Jude ", "5", "Catchy"));

    assert_eq!(notice, Notice::Added { total: 1 });
    assert_eq!(notice.to_string(), "Entry added successfully! Total entries: 1");
    assert_eq!(screen.aggregator().records()[0].title(), "Hey Jude");
  }

  #[test]
  fn invalid_input_never_reaches_the_aggregator() {
    let mut screen = screen();

    let cases = [
      (form(" ", "3", "Catchy"), "Error: Song name cannot be empty."),
      (form("Song", "three", "Catchy"), "Invalid rating selected."),
      (form("Song", "0", "Catchy"), "Rating must be between 1 and 5."),
      (form("Song", "6", "Catchy"), "Rating must be between 1 and 5."),
      (form("Song", "3", "Spicy"), "Please choose a description from the list."),
    ];

    for (form, message) in cases {
      let notice = screen.submit(&form);
      assert!(notice.is_error());
      assert_eq!(notice.to_string(), message);
    }

    assert!(screen.aggregator().is_empty());
  }

  #[test]
  fn padded_catalog_entry_can_be_chosen() {
    let config = EntryConfig { descriptions: vec![" Loud ".into(), "Quiet".into()] };
    let mut screen = EntryScreen::new(&config);
    let picked = screen.descriptions()[0].clone();

    assert_eq!(screen.submit(&form("Song", "3", &picked)), Notice::Added { total: 1 });
    assert_eq!(screen.aggregator().records()[0].comment(), Some("Loud"));
  }

  #[test]
  fn full_notice_only_when_full() {
    assert_eq!(screen().full_notice(), None);
  }

  #[test]
  fn title_is_checked_before_rating() {
    let mut screen = screen();
    assert_eq!(screen.submit(&form("", "x", "nope")), Notice::Rejected(InputError::BlankTitle));
  }

  #[test]
  fn full_list_gives_blocking_notice_and_disables_add() {
    let mut screen = screen();
    for i in 0..4 {
      assert_eq!(screen.submit(&form(&format!("S{i}"), "4", "Relaxing")), Notice::Added { total: i + 1 });
    }

    assert!(!screen.add_enabled());
    assert_eq!(screen.full_notice(), Some(Notice::Full { capacity: 4 }));
    assert_eq!(screen.limit_notice().map(|n| n.to_string()), Some("Maximum 4 entries reached.".into()));

    let notice = screen.submit(&form("Extra", "4", "Relaxing"));
    assert_eq!(notice, Notice::Full { capacity: 4 });
    assert_eq!(notice.duration(), NoticeDuration::Long);
    assert_eq!(notice.to_string(), "Maximum 4 entries reached. Cannot add more.");
    assert_eq!(screen.aggregator().len(), 4);
  }

  #[test]
  fn open_summary_encodes_current_state() {
    let mut screen = screen();
    screen.submit(&form("Song", "2", "Overrated"));

    let codec = JsonSessionCodec::new();
    let payload = screen.open_summary(&codec).unwrap();
    assert_eq!(codec.decode(&payload).unwrap(), *screen.aggregator());
  }
}
