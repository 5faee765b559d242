//! The delivery capability trait and its shared types.

use thiserror::Error;
use tokio::sync::mpsc;

/// The integer command code attached to one signal delivery.
pub type Payload = i32;

/// Receiving half of the payload event channel returned by
/// [`SignalService::install`]. Single consumer: the listener's drain loop.
pub type PayloadEvents = mpsc::Receiver<Payload>;

/// Capacity of the in-process event channel. The OS pending-signal queue
/// sits in front of it, so this only bounds how far the forwarder runs
/// ahead of the drain loop.
pub(crate) const EVENT_BUFFER: usize = 32;

#[derive(Debug, Error)]
pub enum SignalError {
    #[error("signal offset {offset} does not name a real-time signal")]
    OffsetOutOfRange { offset: i32 },

    #[error("failed to install handler for signal {signal}: {source}")]
    Install {
        signal: i32,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to queue signal {signal} to pid {target}: {source}")]
    Delivery {
        signal: i32,
        target: libc::pid_t,
        #[source]
        source: std::io::Error,
    },
}

/// A validated real-time signal number.
///
/// SIGRTMIN is not a compile-time constant on Linux (libc reserves the
/// first few real-time slots for its threading runtime), so the number is
/// resolved and range-checked at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtSignal(i32);

impl RtSignal {
    /// Resolve `SIGRTMIN + offset`, rejecting offsets that leave the
    /// real-time range.
    pub fn from_offset(offset: i32) -> Result<Self, SignalError> {
        let number = libc::SIGRTMIN() + offset;
        if offset < 0 || number > libc::SIGRTMAX() {
            return Err(SignalError::OffsetOutOfRange { offset });
        }
        Ok(Self(number))
    }

    pub fn number(self) -> i32 {
        self.0
    }
}

/// Injected capability over the OS signal subsystem.
///
/// `install` is the listener's half, `send` the notifier's. Both halves go
/// through the same trait so an end-to-end scenario can run against
/// [`super::FakeSignalService`] inside one test process.
pub trait SignalService {
    /// Register interest in `signal` and return the event channel its
    /// payloads arrive on. Installation happens before this returns; a
    /// rejection by the OS is the only error.
    fn install(&self, signal: RtSignal) -> Result<PayloadEvents, SignalError>;

    /// Ask the OS to queue one delivery of `signal` carrying `payload` to
    /// the process named by `target`. Fire-and-forget on success.
    fn send(&self, target: libc::pid_t, signal: RtSignal, payload: Payload)
        -> Result<(), SignalError>;
}
