//! Pipeline logging
//!
//! The front end narrates its work through `tracing`: stray-semicolon
//! warnings from the block parsers, stage progress from the pipeline, and
//! per-call detail from the evaluator. Verbosity is a cascade driven by
//! repeated `-v` flags; the `CANDIC_LOG` environment variable overrides it
//! with a full filter directive when finer control is needed.
//!
//! # Usage
//!
//! ```rust
//! use candic::util::logger::{self, Verbosity};
//!
//! logger::init(Verbosity::Quiet);
//! tracing::warn!("empty statement");
//! ```

use tracing_subscriber::filter::{EnvFilter, LevelFilter};

/// How much of the pipeline's work to narrate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Warnings and errors only (the default)
    Quiet,
    /// Run outcomes and summaries
    Progress,
    /// Per-stage pipeline detail: tokenizing, preprocessing, parsing,
    /// evaluation calls
    Pipeline,
}

impl Verbosity {
    /// Map a repeated `-v` flag count from the command line
    pub fn from_flag_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Progress,
            _ => Verbosity::Pipeline,
        }
    }

    fn filter(self) -> LevelFilter {
        match self {
            Verbosity::Quiet => LevelFilter::WARN,
            Verbosity::Progress => LevelFilter::INFO,
            Verbosity::Pipeline => LevelFilter::DEBUG,
        }
    }
}

/// Install the global subscriber
///
/// Diagnostics carry their own source positions, so the output stays bare:
/// no timestamps, no module targets. Safe to call more than once; later
/// calls keep the first subscriber.
pub fn init(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_env("CANDIC_LOG")
        .unwrap_or_else(|_| EnvFilter::default().add_directive(verbosity.filter().into()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .compact()
        .try_init();
}
