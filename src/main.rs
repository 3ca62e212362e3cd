//! Candi compiler front end - CLI

use anyhow::{Context, Result};
use candic::util::logger::{self, Verbosity};
use candic::{NAME, VERSION};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;

/// Front end for the Candi programming language
#[derive(Parser, Debug)]
#[command(name = "candic")]
#[command(version = VERSION)]
#[command(about = NAME, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    /// Increase verbosity (-v: run outcomes, -vv: pipeline stages);
    /// CANDIC_LOG overrides with a full filter directive
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compile and evaluate a Candi source file
    Run {
        /// Source file to run
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Evaluate Candi statements from the command line
    Eval {
        /// Code to evaluate
        #[arg(value_name = "CODE")]
        code: String,
    },

    /// Print a source file's AST as an indented tree
    Dump {
        /// Source file to dump
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print a source file's token stream after preprocessing
    Tokens {
        /// Source file to tokenize
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print version information
    Version,
}

fn main() -> Result<()> {
    let args = Args::parse();

    logger::init(Verbosity::from_flag_count(args.verbose));

    if args.verbose > 0 {
        info!("{} version {}", NAME, VERSION);
        info!("Host: {}", std::env::consts::OS);
    }

    match args.command {
        Commands::Run { file } => {
            let value = candic::run_file(&file)
                .with_context(|| format!("Failed to run: {}", file.display()))?;
            info!("program value: {}", value);
        }
        Commands::Eval { code } => {
            let value = candic::run(&code).context("Failed to evaluate code")?;
            println!("{}", value);
        }
        Commands::Dump { file } => {
            candic::dump_ast(&file)
                .with_context(|| format!("Failed to dump: {}", file.display()))?;
        }
        Commands::Tokens { file } => {
            candic::dump_tokens(&file)
                .with_context(|| format!("Failed to tokenize: {}", file.display()))?;
        }
        Commands::Version => {
            println!("{} {}", NAME, VERSION);
        }
    }

    Ok(())
}
