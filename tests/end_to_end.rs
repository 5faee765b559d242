//! End-to-end scenario against the fake delivery service.
//!
//! The same scenarios run against the real OS in `tests/os_delivery.rs`,
//! which cannot use the libtest harness; this file keeps the harnessed,
//! signal-free variant.

use rtnotify::listener::{self, Outcome};
use rtnotify::notifier;
use rtnotify::signal::{FakeSignalService, RtSignal, SignalService};

// The operator's scenario: listener installs, a notifier addresses it by
// pid with payload 0, the listener drains it and terminates gracefully.
#[tokio::test]
async fn fake_pair_terminate_scenario() {
    const LISTENER_PID: libc::pid_t = 4321;

    let listener_end = FakeSignalService::new(LISTENER_PID);
    let signal = RtSignal::from_offset(0).expect("SIGRTMIN in range");
    let mut events = listener_end.install(signal).expect("install handler");

    let notifier_end = listener_end.peer(1234);
    notifier::notify(&notifier_end, LISTENER_PID, signal, 0).expect("delivery accepted");

    assert_eq!(listener::run(&mut events).await, Outcome::Exit);
}
