use clap::Parser;

use rtnotify::listener::{self, Outcome};
use rtnotify::observability;
use rtnotify::signal::{OsSignalService, RtSignal, SignalService};

#[derive(Parser)]
#[command(name = "listener")]
#[command(about = "Blocks until a real-time signal delivers a command payload", long_about = None)]
struct Cli {
    /// Offset from SIGRTMIN for the reserved signal (must match the notifier).
    #[arg(long, default_value_t = 0)]
    signal_offset: i32,
}

fn main() {
    observability::init();
    let cli = Cli::parse();

    let signal = match RtSignal::from_offset(cli.signal_offset) {
        Ok(signal) => signal,
        Err(err) => fatal(err),
    };

    // Install while this is still the only thread: the blocked mask must
    // be inherited by everything the runtime spawns, and a notifier driven
    // by the printed pid must never race an unregistered handler.
    let service = OsSignalService::new();
    let mut events = match service.install(signal) {
        Ok(events) => events,
        Err(err) => fatal(err),
    };

    println!("Receiver PID: {}", std::process::id());
    println!("Waiting for signals...");

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(err) => fatal(err),
    };

    match runtime.block_on(listener::run(&mut events)) {
        Outcome::Exit => {}
        Outcome::Abort => std::process::abort(),
        Outcome::Disconnected => fatal("signal delivery stream ended unexpectedly"),
    }
}

fn fatal(err: impl std::fmt::Display) -> ! {
    eprintln!("listener: {err}");
    std::process::exit(1);
}
