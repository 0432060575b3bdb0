//! Command handler modules for the crib CLI.
//!
//! Each command lives in its own file and follows one pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Errors propagated via the `CliError` enum

mod cfg;
mod check;
mod eval;
mod sequences;

pub use cfg::handle_cfg_command;
pub use check::handle_check_command;
pub use eval::handle_eval_command;
pub use sequences::handle_sequences_command;

use crate::config::OutputFormat;
use crate::error::CliError;
use crate::formatters::{format_hand_rank, hand_rank_json};
use crib_engine::cards::{Card, parse_cards};
use crib_engine::hand_rank::{HandRank, total_points};
use std::io::Write;

/// Parses card arguments; a single argument may itself hold several cards.
pub(crate) fn parse_card_args(args: &[String]) -> Result<Vec<Card>, CliError> {
    let cards = parse_cards(&args.join(" ")).map_err(|e| CliError::InvalidInput(e.to_string()))?;
    if cards.is_empty() {
        return Err(CliError::InvalidInput("no cards given".into()));
    }
    Ok(cards)
}

/// Writes hand ranks with a total, as text lines or one JSON document.
pub(crate) fn write_ranks(
    out: &mut dyn Write,
    cards: &[Card],
    ranks: &[HandRank<Card>],
    format: OutputFormat,
    unicode: bool,
) -> Result<(), CliError> {
    let total = total_points(ranks);
    match format {
        OutputFormat::Text => {
            if ranks.is_empty() {
                writeln!(out, "No hand ranks")?;
            }
            for rank in ranks {
                writeln!(out, "{}", format_hand_rank(rank, unicode))?;
            }
            writeln!(out, "Total: {}", total)?;
        }
        OutputFormat::Json => {
            let doc = serde_json::json!({
                "cards": cards.iter().map(Card::to_string).collect::<Vec<_>>(),
                "ranks": ranks.iter().map(hand_rank_json).collect::<Vec<_>>(),
                "total": total,
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
        }
    }
    Ok(())
}
