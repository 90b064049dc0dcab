use std::env;

use tracing_subscriber::EnvFilter;

mod cli;
mod settings;

fn main() {
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    init_logging();

    let args: Vec<String> = env::args().collect();
    std::process::exit(cli::run(args));
}

/// Diagnostics go to stderr so stdout stays clean for passwords.
fn init_logging() {
    let filter = EnvFilter::try_from_env("GENPASS_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
