#![forbid(unsafe_code)]
#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
#![deny(missing_docs, unused_must_use)]

//! Terminal front end for the `tokenize` crate.
//!
//! Two actions and a readout: encode text (indices, text decoded back,
//! vocabulary size) and decode a JSON array of indices. All parsing of
//! caller input happens here; the tokenizer itself never fails.

/// Environment-driven settings.
pub mod config;
/// Error types.
pub mod error;
/// Output formatting.
pub mod render;
/// Line-oriented session owning one tokenizer.
pub mod session;

pub use config::{from_env, Config};
pub use error::{ConfigError, PlaygroundError};
pub use render::EncodeReport;
pub use session::{Reply, Session};

use tracing_subscriber::EnvFilter;

/// Installs the stderr `tracing` subscriber. `RUST_LOG` wins over
/// `config.log_filter`.
///
/// Returns `false` when a global subscriber was already installed; that one
/// stays in place.
pub fn init_logging(config: &Config) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();
    if !installed {
        tracing::debug!("tracing subscriber already installed, keeping it");
    }
    installed
}
