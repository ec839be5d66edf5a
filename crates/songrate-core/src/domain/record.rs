use crate::domain::rating::Rating;
use crate::errors::InputError;

/// Texto mostrado cuando un campo no tiene valor.
pub const NOT_AVAILABLE: &str = "N/A";

/// Una valoración de canción registrada por el usuario.
///
/// Los campos son privados: un `SongRecord` siempre tiene título no vacío
/// y una [`Rating`] válida.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SongRecord {
  /// Título de la canción, sin espacios sobrantes.
  title: String,

  /// Intérprete. Texto libre y opcional.
  artist: Option<String>,

  /// Etiqueta descriptiva elegida del catálogo de descripciones.
  comment: String,

  /// Valoración de 1 a 5.
  rating: Rating,
}

impl SongRecord {
  /// Construye un registro validando el título.
  ///
  /// Un artista en blanco se guarda como ausente.
  pub fn new(title: &str, artist: &str, comment: &str, rating: Rating) -> Result<Self, InputError> {
    let title = title.trim();
    if title.is_empty() {
      return Err(InputError::BlankTitle);
    }

    Ok(Self {
      title: title.to_string(),
      artist: non_blank(artist).map(str::to_string),
      comment: comment.trim().to_string(),
      rating,
    })
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn artist(&self) -> Option<&str> {
    self.artist.as_deref()
  }

  pub fn comment(&self) -> Option<&str> {
    non_blank(&self.comment)
  }

  pub fn rating(&self) -> Rating {
    self.rating
  }

  /// Etiqueta usada para destacar el registro.
  ///
  /// Orden de preferencia: comentario, título, artista, `"N/A"`.
  pub fn label(&self) -> &str {
    self.comment().or_else(|| non_blank(&self.title)).or_else(|| self.artist()).unwrap_or(NOT_AVAILABLE)
  }

  /// Bloque de texto multilínea con todos los campos del registro.
  pub fn render(&self) -> String {
    format!(
      "Song Title: {}\nArtist: {}\nDescription: {}\nRating: {}/5 ({})\n{}",
      self.title,
      self.artist().unwrap_or(NOT_AVAILABLE),
      self.comment().unwrap_or(NOT_AVAILABLE),
      self.rating,
      self.rating.feedback(),
      DIVIDER,
    )
  }
}

const DIVIDER: &str = "-----------------------------------";

fn non_blank(s: &str) -> Option<&str> {
  let trimmed = s.trim();
  (!trimmed.is_empty()).then_some(trimmed)
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rating(v: u8) -> Rating {
    Rating::new(v).unwrap()
  }

  #[test]
  fn blank_title_is_rejected() {
    assert_eq!(SongRecord::new("   ", "x", "Catchy", rating(3)), Err(InputError::BlankTitle));
  }

  #[test]
  fn fields_are_trimmed_and_blank_artist_is_absent() {
    let record = SongRecord::new("  Hey Jude ", "  ", " Catchy ", rating(4)).unwrap();
    assert_eq!(record.title(), "Hey Jude");
    assert_eq!(record.artist(), None);
    assert_eq!(record.comment(), Some("Catchy"));
  }

  #[test]
  fn label_prefers_comment_then_title() {
    let with_comment = SongRecord::new("Song", "Band", "Relaxing", rating(2)).unwrap();
    assert_eq!(with_comment.label(), "Relaxing");

    let without_comment = SongRecord::new("Song", "Band", "", rating(2)).unwrap();
    assert_eq!(without_comment.label(), "Song");
  }

  #[test]
  fn render_lists_fields_in_order() {
    let record = SongRecord::new("Yesterday", "", "Emotional", rating(5)).unwrap();
    assert_eq!(
      record.render(),
      "Song Title: Yesterday\n\
       Artist: N/A\n\
       Description: Emotional\n\
       Rating: 5/5 (Absolutely love this song!!!)\n\
       -----------------------------------"
    );
  }
}
