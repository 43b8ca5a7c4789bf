//! Greeting Sample Application Entry Point
//!
//! Runs `square -> greet -> print_result` on `5` and prints:
//!
//! ```text
//! Hello 25
//! Result: 25
//! ```
//!
//! Set `RUST_LOG` (e.g. `RUST_LOG=greeting=debug`) to see diagnostics on stderr.

use std::cell::RefCell;
use std::io;

use anyhow::Context;
use greeting::{DEFAULT_LOG_FILTER, GreetingConfig, run};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = GreetingConfig::default();
    tracing::debug!(?config, "configuration loaded");

    let stdout = RefCell::new(io::stdout().lock());
    run(&config, &stdout).context("greeting pipeline failed")?;

    tracing::debug!("greeting pipeline finished");
    Ok(())
}
