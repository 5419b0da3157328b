//! Tracing setup shared by the binaries

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Install a debug-level subscriber on stderr when `verbose` is set.
///
/// Without it, library tracing stays silent and stdout carries only the
/// command output.
pub fn init(verbose: bool) {
    if !verbose {
        return;
    }

    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("warning: tracing subscriber already installed");
    }
    tracing::debug!("Verbose mode enabled");
}
