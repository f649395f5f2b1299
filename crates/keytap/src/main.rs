//! keytap entry point.
//!
//! Parses flags, installs logging, then hands off to the bridge:
//!
//! ```text
//! main()
//!  └─ start()
//!       ├─ resolve()           -- CLI + config.ini → port/baud
//!       ├─ SerialChannel::open -- the serial device
//!       ├─ load_mapping()      -- token=key1+key2 lines
//!       └─ BridgeLoop::run()   -- read → look up → EnigoInjector tap
//! ```
//!
//! Every fatal condition comes back here as a `BridgeError`, is logged once
//! at `error`, and ends the process with a non-zero exit status.

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use keytap::application::{bridge_loop::start, dispatch_keys::KeyDispatcher};
use keytap::cli::Args;
use keytap::infrastructure::{input_injection::desktop::EnigoInjector, serial::SerialChannel};

fn main() {
    if let Err(e) = run() {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialise structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!(config = %args.file.display(), "keytap starting");

    let dispatcher = KeyDispatcher::new(Arc::new(EnigoInjector::new()));
    start(&args.overrides(), &args.file, SerialChannel::open, dispatcher)?;

    Ok(())
}
