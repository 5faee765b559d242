//! Sender side: validate, then request one delivery.
//!
//! Domain validation is the only check in the whole system; it runs before
//! any OS interaction so an out-of-domain payload never reaches the queue.

use thiserror::Error;

use crate::command::Command;
use crate::signal::{Payload, RtSignal, SignalError, SignalService};

#[derive(Debug, Error)]
pub enum NotifyError {
    /// Matches the operator-facing wording of the usage contract.
    #[error("Data must be 0 or 1.")]
    PayloadOutOfDomain(Payload),

    #[error(transparent)]
    Signal(#[from] SignalError),
}

/// Validate `payload` and ask the service to queue it to `target`.
///
/// Success means the OS accepted the queueing request, nothing more; there
/// is no channel back from the listener.
pub fn notify<S: SignalService>(
    service: &S,
    target: libc::pid_t,
    signal: RtSignal,
    payload: Payload,
) -> Result<(), NotifyError> {
    if !Command::payload_in_domain(payload) {
        return Err(NotifyError::PayloadOutOfDomain(payload));
    }

    service.send(target, signal, payload)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signal::{FakeSignalService, SignalService as _};

    fn rtmin() -> RtSignal {
        RtSignal::from_offset(0).unwrap()
    }

    #[test]
    fn out_of_domain_payload_rejected_before_delivery() {
        // Nothing is registered, so any delivery attempt would surface as
        // an ESRCH-backed Signal error. Seeing PayloadOutOfDomain proves
        // the service was never consulted.
        let service = FakeSignalService::new(200);
        let err = notify(&service, 100, rtmin(), 2).unwrap_err();
        assert!(matches!(err, NotifyError::PayloadOutOfDomain(2)));
    }

    #[test]
    fn missing_target_is_a_delivery_failure() {
        let service = FakeSignalService::new(200);
        let err = notify(&service, 100, rtmin(), 0).unwrap_err();
        match err {
            NotifyError::Signal(SignalError::Delivery { target, source, .. }) => {
                assert_eq!(target, 100);
                assert_eq!(source.raw_os_error(), Some(libc::ESRCH));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn accepted_delivery_reaches_the_listener() {
        let receiver = FakeSignalService::new(100);
        let mut events = receiver.install(rtmin()).unwrap();

        notify(&receiver.peer(200), 100, rtmin(), 1).unwrap();

        assert_eq!(events.recv().await, Some(1));
    }
}
