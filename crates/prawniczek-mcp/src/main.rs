//! Entry point: build the validated registry and emit it as JSON on stdout.

use std::io::Write as _;

use env_flags::env_flags;

use prawniczek_mcp::registry;

fn init_tracing() {
    env_flags! {
        /// Tracing filter, e.g. "info", "debug", or targets format.
        RUST_LOG: &str = "info";
        /// Preferred filter env (alias). If set, overrides RUST_LOG.
        TRACING_FILTER: &str = "";
        /// Pretty formatting for logs (ignored if TRACING_JSON=true).
        TRACING_PRETTY: bool = false;
        /// Compact single-line formatting for logs (ignored if TRACING_JSON=true)
        TRACING_COMPACT: bool = true;
        /// JSON formatting for logs
        TRACING_JSON: bool = false;
    }

    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, prelude::*};

    let rust_log = if !(*TRACING_FILTER).is_empty() {
        (*TRACING_FILTER).to_string()
    } else {
        (*RUST_LOG).to_string()
    };
    let filter = EnvFilter::try_new(rust_log).unwrap_or_else(|_| EnvFilter::new("info"));

    // Always write logs to stderr so the emitted JSON document on stdout
    // stays parseable.
    let base = tracing_subscriber::fmt::layer()
        .with_file(false)
        .with_line_number(false)
        .with_target(true)
        .with_ansi(true)
        .with_writer(std::io::stderr);
    let reg = tracing_subscriber::registry().with(filter);
    if *TRACING_JSON {
        if let Err(e) = reg.with(base.json()).try_init() {
            tracing::debug!("tracing already set: {:?}", e);
        }
    } else if *TRACING_COMPACT {
        if let Err(e) = reg.with(base.compact()).try_init() {
            tracing::debug!("tracing already set: {:?}", e);
        }
    } else if *TRACING_PRETTY {
        if let Err(e) = reg.with(base.pretty()).try_init() {
            tracing::debug!("tracing already set: {:?}", e);
        }
    } else if let Err(e) = reg.with(base).try_init() {
        tracing::debug!("tracing already set: {:?}", e);
    }
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    tracing::info!("building prawniczek registry");
    let config = registry::build()?;
    tracing::info!(
        "registry validated (tools={}, golden_prompts={})",
        config.metadata.tools.len(),
        config.golden_prompts.len()
    );

    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &config)?;
    writeln!(stdout)?;
    Ok(())
}
