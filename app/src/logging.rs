use tracing_subscriber::EnvFilter;

/// Inicializa el subscriber global de `tracing`.
///
/// `RUST_LOG` tiene prioridad sobre `default_filter`. Escribe en stderr: stdout
/// es la superficie de la aplicación. Llamarla dos veces no hace nada.
pub fn init(default_filter: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

  let _ = tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}
