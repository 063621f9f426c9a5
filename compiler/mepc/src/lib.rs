//! The `mep` command-line front end.
//!
//! Argument parsing lives in [`options`], execution in [`commands`]; both
//! work on plain strings so they can be tested without a process.

use std::sync::Once;

pub mod commands;
pub mod options;

pub use commands::{run, CliError};
pub use options::{parse_args, Action, DomainKind, Invocation, UsageError};

pub const USAGE: &str = "\
Usage: mep <command> [arguments]

Commands:
  eval <domain> <expression> [--let NAME=VALUE]...   Evaluate an expression
  vars <domain> <expression> [--let NAME=VALUE]...   List undefined variables
  rewrite <domain> <expression> [--let NAME=VALUE]... Show the rewritten call form
  sat <expression>                                   Check a logic expression for satisfiability
  table <expression>                                 Print a logic truth table

Domains: real, logic, vector, array

Environment:
  RUST_LOG       Enable logging (e.g. RUST_LOG=mep_solver=trace)
  MEP_LOG_TREE   Render spans as an indented tree";

static TRACING_INIT: Once = Once::new();

/// Install a subscriber when `RUST_LOG` is set; otherwise stay silent.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os("MEP_LOG_TREE").is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
