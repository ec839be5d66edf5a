use serde::{Deserialize, Serialize};
use std::{fmt, num::IntErrorKind, str::FromStr};

use crate::errors::InputError;

/// Valoración de una canción en estrellas enteras, de 1 a 5 (inclusive).
///
/// No existe una `Rating` fuera de rango: el único camino para construirla
/// es [`Rating::new`] (o [`FromStr`]), que valida los límites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
  /// Valor mínimo permitido.
  pub const MIN: u8 = 1;
  /// Valor máximo permitido.
  pub const MAX: u8 = 5;

  /// Crea una `Rating` si `value` está en `[1, 5]`; en otro caso `None`.
  pub fn new(value: u8) -> Option<Self> {
    (Self::MIN..=Self::MAX).contains(&value).then_some(Self(value))
  }

  pub fn value(&self) -> u8 {
    self.0
  }

  /// Frase de feedback asociada a esta valoración.
  pub fn feedback(&self) -> &'static str {
    feedback_for(i64::from(self.0))
  }
}

/// Frase de feedback para un valor de rating arbitrario.
///
/// Los valores fuera de `[1, 5]` no pueden venir de una [`Rating`], pero la
/// tabla tiene un caso por defecto igualmente.
pub fn feedback_for(value: i64) -> &'static str {
  match value {
    1 => "It's not a first song choice",
    2 => "It's not a bad song",
    3 => "It's alright",
    4 => "Now we getting there :)",
    5 => "Absolutely love this song!!!",
    _ => "No specific feedback for this rating.",
  }
}

impl TryFrom<u8> for Rating {
  type Error = InputError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Rating::new(value).ok_or(InputError::RatingOutOfRange(i64::from(value)))
  }
}

impl From<Rating> for u8 {
  fn from(rating: Rating) -> Self {
    rating.0
  }
}

impl FromStr for Rating {
  type Err = InputError;

  /// Interpreta el valor elegido en el selector de rating.
  ///
  /// Distingue entre texto no numérico y números fuera de rango. Un número
  /// que no cabe en `i64` se reporta como fuera de rango, saturado.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    let value: i64 = match trimmed.parse::<i64>() {
      Ok(v) => v,
      Err(e) if *e.kind() == IntErrorKind::PosOverflow => i64::MAX,
      Err(e) if *e.kind() == IntErrorKind::NegOverflow => i64::MIN,
      Err(_) => return Err(InputError::RatingNotNumeric(trimmed.to_string())),
    };

    u8::try_from(value)
      .ok()
      .and_then(Rating::new)
      .ok_or(InputError::RatingOutOfRange(value))
  }
}

impl fmt::Display for Rating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.0)
  }
}

/// Calificación promedio de un conjunto de valoraciones.
///
/// Distingue explícitamente entre:
/// - [`AvgRating::Unrated`]: no hay ninguna valoración registrada.
/// - [`AvgRating::Rated`]: media aritmética de una o más valoraciones.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AvgRating {
  #[default]
  Unrated,
  Rated(f64),
}

impl AvgRating {
  /// Calcula la media de `ratings`. Vacío → [`AvgRating::Unrated`].
  pub fn from_ratings<I>(ratings: I) -> Self
  where
    I: IntoIterator<Item = Rating>,
  {
    let (sum, count) =
      ratings.into_iter().fold((0u32, 0u32), |(sum, count), r| (sum + u32::from(r.value()), count + 1));

    if count == 0 {
      return AvgRating::Unrated;
    }

    AvgRating::Rated(f64::from(sum) / f64::from(count))
  }

  /// Valor numérico de la media; `0.0` si no hay valoraciones.
  pub fn value(&self) -> f64 {
    match self {
      AvgRating::Unrated => 0.0,
      AvgRating::Rated(avg) => *avg,
    }
  }

  /// Representación en estrellas.
  pub fn stars(&self) -> String {
    self.to_string()
  }
}

impl fmt::Display for AvgRating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    // Nota de diseño:
    // Usamos `floor` en vez de `round` para que:
    // - 4.1 → ★★★★☆
    // - 4.9 → ★★★★☆
    // y solo 5.0 llegue a ★★★★★.
    let full_stars = (self.value().floor() as usize).min(Rating::MAX as usize);
    let empty_stars = Rating::MAX as usize - full_stars;

    for _ in 0..full_stars {
      write!(f, "★")?;
    }
    for _ in 0..empty_stars {
      write!(f, "☆")?;
    }

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_rejects_out_of_range() {
    assert!(Rating::new(0).is_none());
    assert!(Rating::new(6).is_none());
    assert_eq!(Rating::new(1).map(|r| r.value()), Some(1));
    assert_eq!(Rating::new(5).map(|r| r.value()), Some(5));
  }

  #[test]
  fn parse_distinguishes_non_numeric_from_out_of_range() {
    assert_eq!(" 4 ".parse::<Rating>(), Ok(Rating(4)));
    assert_eq!("five".parse::<Rating>(), Err(InputError::RatingNotNumeric("five".into())));
    assert_eq!("".parse::<Rating>(), Err(InputError::RatingNotNumeric(String::new())));
    assert_eq!("7".parse::<Rating>(), Err(InputError::RatingOutOfRange(7)));
    assert_eq!("-2".parse::<Rating>(), Err(InputError::RatingOutOfRange(-2)));
    assert_eq!("300".parse::<Rating>(), Err(InputError::RatingOutOfRange(300)));
  }

  #[test]
  fn huge_numbers_are_out_of_range_not_garbage() {
    assert_eq!("99999999999999999999".parse::<Rating>(), Err(InputError::RatingOutOfRange(i64::MAX)));
    assert_eq!("-99999999999999999999".parse::<Rating>(), Err(InputError::RatingOutOfRange(i64::MIN)));
    assert_eq!("9e9".parse::<Rating>(), Err(InputError::RatingNotNumeric("9e9".into())));
  }

  #[test]
  fn feedback_table_covers_every_value() {
    assert_eq!(feedback_for(1), "It's not a first song choice");
    assert_eq!(feedback_for(2), "It's not a bad song");
    assert_eq!(feedback_for(3), "It's alright");
    assert_eq!(feedback_for(4), "Now we getting there :)");
    assert_eq!(feedback_for(5), "Absolutely love this song!!!");
    assert_eq!(feedback_for(0), "No specific feedback for this rating.");
    assert_eq!(feedback_for(6), "No specific feedback for this rating.");
    assert_eq!(Rating(3).feedback(), "It's alright");
  }

  #[test]
  fn avg_rating_of_nothing_is_unrated() {
    let avg = AvgRating::from_ratings(Vec::new());
    assert_eq!(avg, AvgRating::Unrated);
    assert_eq!(avg.value(), 0.0);
    assert_eq!(avg.stars(), "☆☆☆☆☆");
  }

  #[test]
  fn avg_rating_stars_use_floor() {
    let avg = AvgRating::from_ratings([Rating(5), Rating(4)]);
    assert_eq!(avg.value(), 4.5);
    assert_eq!(avg.stars(), "★★★★☆");

    let full = AvgRating::from_ratings([Rating(5), Rating(5)]);
    assert_eq!(full.stars(), "★★★★★");
  }

  #[test]
  fn serde_rejects_out_of_range_value() {
    let ok: Rating = serde_json_like("3").unwrap();
    assert_eq!(ok.value(), 3);
    assert!(serde_json_like("9").is_err());
  }

  // Deserializa un entero suelto sin arrastrar serde_json al núcleo.
  fn serde_json_like(text: &str) -> Result<Rating, serde::de::value::Error> {
    use serde::de::IntoDeserializer;
    let value: u8 = text.parse().unwrap();
    Rating::deserialize(value.into_deserializer())
  }
}
