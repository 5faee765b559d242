//! Receiver drain loop.
//!
//! # Responsibilities
//! - Drain payload events one at a time until a terminal command arrives
//! - Report every received payload on stdout (the operator-facing surface)
//!
//! # Design Decisions
//! - The loop returns an [`Outcome`] instead of exiting or aborting itself,
//!   so the terminal paths are observable in tests; the binary performs the
//!   actual `exit(0)` / `abort()`
//! - A single consumer on the channel means no two dispatches ever overlap,
//!   matching a signal handler that blocks its own signal while running

use crate::command::Command;
use crate::signal::PayloadEvents;

/// Terminal result of the drain loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Payload 0: exit with success status.
    Exit,
    /// Payload 1: abort, producing a core dump.
    Abort,
    /// The delivery service dropped its half of the channel before a
    /// terminal command arrived (drain thread failure, or a fake service
    /// going away in tests).
    Disconnected,
}

/// Block on the event channel and dispatch payloads until one is terminal.
///
/// Payloads outside the command domain are logged and discarded; the wait
/// resumes as if the delivery had not happened.
pub async fn run(events: &mut PayloadEvents) -> Outcome {
    while let Some(payload) = events.recv().await {
        println!("Received signal with data: {}", payload);

        match Command::from_payload(payload) {
            Some(Command::Terminate) => {
                println!("Terminating gracefully...");
                return Outcome::Exit;
            }
            Some(Command::Abort) => {
                println!("Aborting with core dump...");
                return Outcome::Abort;
            }
            None => {
                tracing::debug!(payload, "payload outside command domain, ignored");
            }
        }
    }

    Outcome::Disconnected
}
