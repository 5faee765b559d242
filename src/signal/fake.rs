//! In-process loopback delivery, for tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use super::service::{Payload, PayloadEvents, RtSignal, SignalError, SignalService, EVENT_BUFFER};

type Registry = Arc<Mutex<HashMap<(libc::pid_t, i32), mpsc::Sender<Payload>>>>;

/// [`SignalService`] with no real signals behind it.
///
/// A shared delivery table maps (pid, signal number) to an event channel,
/// so listener and notifier logic can compose inside one test process.
/// Failure modes mirror the OS: sending to a pid with no installed handler
/// fails with ESRCH, overflowing the pending queue fails with EAGAIN.
#[derive(Clone)]
pub struct FakeSignalService {
    registry: Registry,
    local_pid: libc::pid_t,
}

impl FakeSignalService {
    /// A fresh delivery table with this endpoint acting as `local_pid`.
    pub fn new(local_pid: libc::pid_t) -> Self {
        Self {
            registry: Registry::default(),
            local_pid,
        }
    }

    /// Another endpoint ("process") sharing the same delivery table.
    pub fn peer(&self, local_pid: libc::pid_t) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            local_pid,
        }
    }
}

impl SignalService for FakeSignalService {
    fn install(&self, signal: RtSignal) -> Result<PayloadEvents, SignalError> {
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        self.registry
            .lock()
            .unwrap()
            .insert((self.local_pid, signal.number()), tx);
        Ok(rx)
    }

    fn send(
        &self,
        target: libc::pid_t,
        signal: RtSignal,
        payload: Payload,
    ) -> Result<(), SignalError> {
        let delivery = SignalError::Delivery {
            signal: signal.number(),
            target,
            source: std::io::Error::from_raw_os_error(libc::ESRCH),
        };

        let tx = match self
            .registry
            .lock()
            .unwrap()
            .get(&(target, signal.number()))
        {
            Some(tx) => tx.clone(),
            None => return Err(delivery),
        };

        tx.try_send(payload).map_err(|_| SignalError::Delivery {
            signal: signal.number(),
            target,
            source: std::io::Error::from_raw_os_error(libc::EAGAIN),
        })
    }
}
