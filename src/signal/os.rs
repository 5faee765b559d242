//! Real OS-backed delivery service.

use std::mem::MaybeUninit;

use tokio::sync::mpsc;

use super::service::{Payload, PayloadEvents, RtSignal, SignalError, SignalService, EVENT_BUFFER};

/// [`SignalService`] bound to the operating system.
///
/// `install` blocks the reserved signal and hands it to a dedicated drain
/// thread that consumes deliveries with `sigwaitinfo(2)`. Pulling straight
/// from the kernel's pending queue keeps real-time semantics intact: a
/// burst of queued deliveries is observed in full and in order, where an
/// asynchronous handler relay can coalesce same-numbered signals.
///
/// `send` queues the signal with `sigqueue(2)`, payload in the sigval.
#[derive(Debug, Default)]
pub struct OsSignalService;

impl OsSignalService {
    pub fn new() -> Self {
        Self
    }
}

impl SignalService for OsSignalService {
    /// The signal mask is per thread and inherited on spawn, so install
    /// early, while the process is still single-threaded: every thread
    /// created afterwards (the async runtime's included) inherits the
    /// blocked signal, leaving the drain thread as its only consumer.
    fn install(&self, signal: RtSignal) -> Result<PayloadEvents, SignalError> {
        let set = signal_set(signal);
        let rc = unsafe { libc::pthread_sigmask(libc::SIG_BLOCK, &set, std::ptr::null_mut()) };
        if rc != 0 {
            return Err(SignalError::Install {
                signal: signal.number(),
                source: std::io::Error::from_raw_os_error(rc),
            });
        }

        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        std::thread::Builder::new()
            .name("rtsig-drain".into())
            .spawn(move || drain(signal, set, tx))
            .map_err(|source| SignalError::Install {
                signal: signal.number(),
                source,
            })?;

        tracing::info!(signal = signal.number(), "handler installed");
        Ok(rx)
    }

    fn send(
        &self,
        target: libc::pid_t,
        signal: RtSignal,
        payload: Payload,
    ) -> Result<(), SignalError> {
        // Writing the sign-extended integer through the pointer member
        // puts it where a receiver reading sival_int expects it.
        let value = libc::sigval {
            sival_ptr: payload as libc::intptr_t as *mut libc::c_void,
        };

        if unsafe { libc::sigqueue(target, signal.number(), value) } == -1 {
            return Err(SignalError::Delivery {
                signal: signal.number(),
                target,
                source: std::io::Error::last_os_error(),
            });
        }

        tracing::debug!(target, signal = signal.number(), payload, "signal queued");
        Ok(())
    }
}

/// Consume queued deliveries one at a time, forwarding each payload onto
/// the event channel. Runs until the consumer goes away.
fn drain(signal: RtSignal, set: libc::sigset_t, tx: mpsc::Sender<Payload>) {
    loop {
        let mut info = MaybeUninit::<libc::siginfo_t>::uninit();
        if unsafe { libc::sigwaitinfo(&set, info.as_mut_ptr()) } == -1 {
            let err = std::io::Error::last_os_error();
            if err.raw_os_error() == Some(libc::EINTR) {
                continue;
            }
            tracing::error!(signal = signal.number(), %err, "sigwaitinfo failed, drain stopped");
            return;
        }
        let info = unsafe { info.assume_init() };

        // libc models the sigval union as its pointer member; the sender's
        // integer sits in the low bytes, recovered here by truncation.
        let payload = unsafe { info.si_value().sival_ptr as isize as i32 };
        tracing::debug!(payload, "signal delivery forwarded");
        if tx.blocking_send(payload).is_err() {
            return;
        }
    }
}

fn signal_set(signal: RtSignal) -> libc::sigset_t {
    unsafe {
        let mut set = MaybeUninit::<libc::sigset_t>::uninit();
        libc::sigemptyset(set.as_mut_ptr());
        libc::sigaddset(set.as_mut_ptr(), signal.number());
        set.assume_init()
    }
}
