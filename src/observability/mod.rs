//! Structured logging.
//!
//! # Responsibilities
//! - Initialize the tracing subscriber once per binary
//!
//! # Design Decisions
//! - Diagnostics go to stderr: stdout carries the notification protocol
//!   lines (pid announcement, received payloads, confirmations) that
//!   operators and scripts read
//! - Filter defaults to `rtnotify=info`, overridable via `RUST_LOG`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rtnotify=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
