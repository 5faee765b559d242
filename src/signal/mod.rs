//! Signal delivery capability.
//!
//! # Responsibilities
//! - Name the reserved real-time signal (offset against SIGRTMIN)
//! - Install a handler and surface payloads as a channel of events
//! - Queue a signal with an attached integer payload to a target pid
//!
//! # Design Decisions
//! - Handler installation and the pending-signal queue are process-wide
//!   state owned by the OS, so both sit behind the [`SignalService`] trait;
//!   [`FakeSignalService`] backs tests with no real signals
//! - Real-time signals queue instead of coalescing, so a bounded channel
//!   drained by a single consumer is a faithful model of delivery

mod fake;
mod os;
mod service;

pub use fake::FakeSignalService;
pub use os::OsSignalService;
pub use service::{Payload, PayloadEvents, RtSignal, SignalError, SignalService};
