//! Tracing setup for the binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_level`. Output goes to stderr so that
/// rendered pages on stdout stay clean.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if let Err(e) = result {
        eprintln!("Logging already initialised: {}", e);
    }
}
