//! Prints the sequence builder output, one ascending sequence per line.

use super::parse_card_args;
use crate::error::CliError;
use crate::formatters::format_cards;
use crib_engine::sequence::build_sequences;
use std::io::Write;

pub fn handle_sequences_command(
    cards: &[String],
    unicode: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_card_args(cards)?;
    let sequences = build_sequences(&cards);
    if sequences.is_empty() {
        writeln!(out, "No sequences")?;
    }
    for seq in &sequences {
        writeln!(out, "{}", format_cards(seq, unicode))?;
    }
    Ok(())
}
