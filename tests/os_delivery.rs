//! Real OS delivery scenarios, by self-delivery.
//!
//! No test harness: the drain design requires the reserved signal to be
//! blocked while the process still has a single thread, and libtest runs
//! every `#[test]` on its own already-spawned thread with the signal
//! unblocked. Scenarios run sequentially from `main`; any failed
//! assertion fails the test binary.
//!
//! Terminal paths that would kill the process (exit, abort) are observed
//! through the drain loop's returned outcome instead.

use rtnotify::listener::{self, Outcome};
use rtnotify::notifier::{self, NotifyError};
use rtnotify::signal::{OsSignalService, RtSignal, SignalError, SignalService};

fn main() {
    let service = OsSignalService::new();
    // Offset away from SIGRTMIN so nothing else in this process can have
    // claimed the number.
    let signal = RtSignal::from_offset(3).expect("SIGRTMIN+3 in range");
    let mut events = service.install(signal).expect("install handler");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("build runtime");

    burst_is_drained_in_full_and_in_order(&service, signal, &mut events, &runtime);
    undefined_payload_ignored_then_terminate(&service, signal, &mut events, &runtime);
    delivery_to_missing_process_is_rejected(&service, signal);

    println!("ok");
}

/// Twenty distinct payloads queued back-to-back must all arrive, in
/// order. Real-time signals queue rather than coalesce; a delivery path
/// that loses part of a pending burst fails here.
fn burst_is_drained_in_full_and_in_order(
    service: &OsSignalService,
    signal: RtSignal,
    events: &mut rtnotify::signal::PayloadEvents,
    runtime: &tokio::runtime::Runtime,
) {
    let me = std::process::id() as libc::pid_t;
    for payload in 100..120 {
        service.send(me, signal, payload).expect("queue burst payload");
    }

    runtime.block_on(async {
        for expected in 100..120 {
            assert_eq!(events.recv().await, Some(expected), "burst payload lost or reordered");
        }
    });
}

/// The undefined payload must be drained and ignored before the terminate
/// command is honored.
fn undefined_payload_ignored_then_terminate(
    service: &OsSignalService,
    signal: RtSignal,
    events: &mut rtnotify::signal::PayloadEvents,
    runtime: &tokio::runtime::Runtime,
) {
    let me = std::process::id() as libc::pid_t;
    service.send(me, signal, 7).expect("queue payload 7");
    notifier::notify(service, me, signal, 0).expect("queue terminate");

    assert_eq!(runtime.block_on(listener::run(events)), Outcome::Exit);
}

fn delivery_to_missing_process_is_rejected(service: &OsSignalService, signal: RtSignal) {
    // Far above any kernel pid limit, so the pid cannot exist.
    let err = notifier::notify(service, libc::pid_t::MAX, signal, 0).unwrap_err();
    match err {
        NotifyError::Signal(SignalError::Delivery { source, .. }) => {
            assert_eq!(source.raw_os_error(), Some(libc::ESRCH));
        }
        other => panic!("unexpected error: {other}"),
    }
}
