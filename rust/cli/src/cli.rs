//! Command-line surface of the `crib` binary.

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "crib",
    version,
    about = "Score cribbage-style hand ranks: kinds, runs, flushes, fifteens and nobs"
)]
pub struct CribCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Evaluate one candidate card set with every detector
    Eval {
        /// Cards such as `AS 10H QD` (suit letters C D H S or symbols)
        #[arg(required = true)]
        cards: Vec<String>,
        /// Output format; overrides CRIB_FORMAT and the config file
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Run a single detector and report its result or failure
    Check {
        #[arg(value_enum)]
        rank: CheckKind,
        #[arg(required = true)]
        cards: Vec<String>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Print the ascending sequences built from the cards
    Sequences {
        #[arg(required = true)]
        cards: Vec<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

/// Detector selected by `crib check`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum CheckKind {
    Kinds,
    Run,
    Flush,
    Fifteen,
    Nobs,
}

impl CheckKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckKind::Kinds => "kinds",
            CheckKind::Run => "run",
            CheckKind::Flush => "flush",
            CheckKind::Fifteen => "fifteen",
            CheckKind::Nobs => "nobs",
        }
    }
}
