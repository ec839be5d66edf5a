use std::io::{BufRead, Write};

use anyhow::Result;
use songrate_core::ports::SessionCodec;
use tracing::warn;

use crate::notice::{Notice, NoticeDuration};
use crate::screens::{EntryForm, EntryScreen, SummaryScreen};

/// Lee una línea sin el salto final. `None` al llegar a EOF.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
  let mut line = String::new();
  if input.read_line(&mut line)? == 0 {
    return Ok(None);
  }
  Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<Option<String>> {
  write!(output, "{label}")?;
  output.flush()?;
  read_line(input)
}

/// Muestra un aviso. Los avisos largos bloquean hasta que el usuario pulsa Enter.
///
/// Devuelve `false` si la entrada se cerró mientras se esperaba.
fn show_notice<R: BufRead, W: Write>(input: &mut R, output: &mut W, notice: &Notice) -> Result<bool> {
  let prefix = if notice.is_error() { "!" } else { "*" };
  writeln!(output, "{prefix} {notice}")?;

  match notice.duration() {
    NoticeDuration::Short => Ok(true),
    NoticeDuration::Long => Ok(prompt(input, output, "Press Enter to continue...")?.is_some()),
  }
}

/// Pide los campos de una entrada. `None` si el usuario cerró la entrada.
fn read_form<R: BufRead, W: Write>(input: &mut R, output: &mut W, screen: &EntryScreen) -> Result<Option<EntryForm>> {
  let Some(title) = prompt(input, output, "Song title: ")? else { return Ok(None) };
  let Some(artist) = prompt(input, output, "Artist: ")? else { return Ok(None) };
  let Some(rating) = prompt(input, output, "Rating (1-5): ")? else { return Ok(None) };

  for (i, description) in screen.descriptions().iter().enumerate() {
    writeln!(output, "  [{}] {description}", i + 1)?;
  }
  let Some(choice) = prompt(input, output, "Description: ")? else { return Ok(None) };

  // Se acepta el número del catálogo o el texto tal cual.
  let description = choice
    .trim()
    .parse::<usize>()
    .ok()
    .and_then(|n| n.checked_sub(1))
    .and_then(|i| screen.descriptions().get(i).cloned())
    .unwrap_or(choice);

  Ok(Some(EntryForm { title, artist, rating, description }))
}

fn show_summary<W: Write, C: SessionCodec>(output: &mut W, screen: &EntryScreen, codec: &C) -> Result<()> {
  let payload = match screen.open_summary(codec) {
    Ok(bytes) => Some(bytes),
    Err(e) => {
      warn!(error = %e, "could not hand the session to the summary screen");
      None
    }
  };

  let summary = SummaryScreen::open(payload.as_deref(), codec);
  writeln!(output, "\n== Details ==")?;
  write!(output, "{summary}")?;
  Ok(())
}

/// Bucle principal de la aplicación sobre una entrada/salida de texto.
///
/// Termina con la opción de salir o al llegar a EOF.
pub fn run_session<R, W, C>(mut input: R, mut output: W, mut screen: EntryScreen, codec: &C) -> Result<()>
where
  R: BufRead,
  W: Write,
  C: SessionCodec,
{
  loop {
    let aggregator = screen.aggregator();
    writeln!(output, "\n== Song ratings ({}/{}) ==", aggregator.len(), aggregator.capacity())?;
    if screen.add_enabled() {
      writeln!(output, "[1] Add entry")?;
    } else {
      writeln!(output, "[1] Add entry (list is full)")?;
    }
    writeln!(output, "[2] View details")?;
    writeln!(output, "[3] Exit")?;

    let Some(choice) = prompt(&mut input, &mut output, "> ")? else { break };

    match choice.trim() {
      "1" => {
        if let Some(notice) = screen.full_notice() {
          if !show_notice(&mut input, &mut output, &notice)? {
            break;
          }
          continue;
        }

        let Some(form) = read_form(&mut input, &mut output, &screen)? else { break };
        let notice = screen.submit(&form);
        if !show_notice(&mut input, &mut output, &notice)? {
          break;
        }

        if let Some(limit) = screen.limit_notice() {
          show_notice(&mut input, &mut output, &limit)?;
        }
      }
      "2" => show_summary(&mut output, &screen, codec)?,
      "3" => break,
      other => writeln!(output, "Unknown option: {other}")?,
    }
  }

  writeln!(output, "Bye!")?;
  output.flush()?;
  Ok(())
}
