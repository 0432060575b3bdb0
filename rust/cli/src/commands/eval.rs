//! Candidate evaluation command.
//!
//! Applies every detector to the given cards and prints what scored.

use super::{parse_card_args, write_ranks};
use crate::config::OutputFormat;
use crate::error::CliError;
use crate::ui;
use crib_engine::hand_rank::evaluate;
use std::collections::HashSet;
use std::io::Write;
use tracing::info;

pub fn handle_eval_command(
    cards: &[String],
    format: OutputFormat,
    unicode: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_card_args(cards)?;
    let mut seen = HashSet::new();
    for card in &cards {
        if !seen.insert(*card) {
            ui::display_warning(err, &format!("{} appears more than once", card))?;
        }
    }
    let ranks = evaluate(&cards);
    info!(cards = cards.len(), ranks = ranks.len(), "eval");
    write_ranks(out, &cards, &ranks, format, unicode)
}
