//! UCI front end.
//!
//! Usage: `minimax_uci [--config <engine.toml>]`. Logs go to stderr and are
//! filtered by `RUST_LOG` (default `warn`); stdout carries only UCI traffic.

mod uci;

use anyhow::{bail, Context, Result};
use minimax_engine::EngineConfig;
use std::io::{self, BufRead};
use tracing_subscriber::EnvFilter;

use crate::uci::{Flow, UciSession};

fn parse_args(args: &[String]) -> Result<EngineConfig> {
    let mut config = EngineConfig::default();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config requires a path");
                };
                config = EngineConfig::load(path)
                    .with_context(|| format!("loading config from {path}"))?;
                i += 1;
            }
            other => bail!("unknown argument: {other}"),
        }
        i += 1;
    }
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    tracing::info!(depth = config.depth, "engine configured");

    // UCI engines communicate via stdin/stdout.
    let mut session = UciSession::new(config);
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if session.handle_line(&line, &mut stdout)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
