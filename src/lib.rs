//! Real-time signal notification pair.
//!
//! Two unrelated processes compose through the operating system's signal
//! queue: a long-lived **listener** installs a handler for one reserved
//! real-time signal and blocks until notified, and a short-lived
//! **notifier** queues that signal, carrying a single integer payload, to
//! the listener's pid. The listener interprets the payload as a command:
//! `0` exits gracefully, `1` aborts with a core dump, anything else is
//! ignored and the wait resumes.
//!
//! # Architecture Overview
//!
//! ```text
//!   notifier <pid> <data>          OS signal queue            listener
//!   ┌─────────────────┐   sigqueue   ┌────────┐   siginfo   ┌──────────────┐
//!   │ validate payload│─────────────▶│SIGRTMIN│────────────▶│ sigwait drain│
//!   │ request delivery│              │ + off  │             │      │       │
//!   └─────────────────┘              └────────┘             │      ▼ mpsc  │
//!                                                           │  drain loop  │
//!                                                           │ 0→exit 1→abrt│
//!                                                           └──────────────┘
//! ```
//!
//! Delivery is fire-and-forget: the notifier learns only whether the OS
//! accepted the queueing request, never whether the listener acted on it.
//!
//! The OS signal subsystem is process-wide mutable state, so it sits behind
//! the [`signal::SignalService`] capability. The asynchronous handler is
//! reproduced as message passing: payloads flow through a single-consumer
//! channel the listener drains one event at a time, which preserves the
//! guarantee that no two command dispatches ever run concurrently.

pub mod command;
pub mod listener;
pub mod notifier;
pub mod observability;
pub mod signal;

pub use command::Command;
pub use signal::{OsSignalService, RtSignal, SignalService};
