use clap::Parser;

use rtnotify::notifier::{self, NotifyError};
use rtnotify::observability;
use rtnotify::signal::{OsSignalService, RtSignal};

#[derive(Parser, Debug)]
#[command(name = "notifier")]
#[command(about = "Queues a real-time signal carrying a command payload", long_about = None)]
struct Cli {
    /// Target process identifier (the pid the listener printed).
    receiver_pid: libc::pid_t,

    /// Command payload: 0 terminates the listener gracefully, 1 aborts it.
    data: i32,

    /// Offset from SIGRTMIN for the reserved signal (must match the listener).
    #[arg(long, default_value_t = 0)]
    signal_offset: i32,
}

fn main() {
    observability::init();

    // Usage errors exit with EXIT_FAILURE, not clap's conventional 2;
    // --help and --version keep their success status.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            std::process::exit(code);
        }
    };

    let result = RtSignal::from_offset(cli.signal_offset)
        .map_err(NotifyError::from)
        .and_then(|signal| {
            notifier::notify(&OsSignalService::new(), cli.receiver_pid, signal, cli.data)
        });

    match result {
        Ok(()) => println!("Sent data {} to PID {}", cli.data, cli.receiver_pid),
        Err(err) => {
            eprintln!("notifier: {err}");
            std::process::exit(1);
        }
    }
}
