mod config;
mod logging;
mod notice;
mod screens;
mod session;

use std::io;

use songrate_transfer::JsonSessionCodec;
use tracing::{info, warn};

pub use crate::config::{EntryConfig, LogConfig};
pub use crate::notice::{Notice, NoticeDuration};
pub use crate::screens::{EntryForm, EntryScreen, SummaryScreen};
pub use crate::session::run_session;

/// Arranca la aplicación sobre stdin/stdout.
///
/// Los fallos de configuración no son fatales: se registran y se usan los
/// valores por defecto.
pub fn run() -> anyhow::Result<()> {
  // --- Logging ---
  // El filtro sale de `[log]`, así que la config se lee antes de tener logs.
  let log_config = LogConfig::load();
  let filter = log_config.as_ref().map(|c| c.filter.clone()).unwrap_or_else(|_| LogConfig::default().filter);
  logging::init(&filter);
  if let Err(e) = &log_config {
    warn!(error = %e, "could not load [log] config, using defaults");
  }

  info!("Starting songrate v{}", env!("CARGO_PKG_VERSION"));

  // --- Entry screen ---
  let entry_config = EntryConfig::load().unwrap_or_else(|e| {
    warn!(error = %e, "could not load [entry] config, using defaults");
    EntryConfig::default()
  });
  let screen = EntryScreen::new(&entry_config);

  // --- Host loop ---
  let stdin = io::stdin();
  let stdout = io::stdout();
  run_session(stdin.lock(), stdout.lock(), screen, &JsonSessionCodec::new())?;

  info!("session finished");
  Ok(())
}
