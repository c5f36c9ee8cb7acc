use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// Honours `RUST_LOG` (e.g. `RUST_LOG=sparse_life=debug`), otherwise logs at `info`.
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .compact()
        .try_init();
}
