//! Single-detector command.
//!
//! Runs exactly one detector on the cards. A rejection is reported with its
//! error category and turned into a failing exit status.

use super::{parse_card_args, write_ranks};
use crate::cli::CheckKind;
use crate::config::OutputFormat;
use crate::error::CliError;
use crib_engine::cards::Card;
use crib_engine::fifteen::validate_fifteen;
use crib_engine::flush::detect_flush;
use crib_engine::hand_rank::HandRank;
use crib_engine::kind::detect_kinds;
use crib_engine::nobs::validate_nobs;
use crib_engine::run::classify_runs;
use crib_engine::HandError;
use std::io::Write;
use tracing::debug;

fn detect(kind: CheckKind, cards: &[Card]) -> Result<Vec<HandRank<Card>>, HandError> {
    Ok(match kind {
        CheckKind::Kinds => detect_kinds(cards).into_iter().map(HandRank::Kind).collect(),
        CheckKind::Run => vec![HandRank::Run(classify_runs(cards)?)],
        CheckKind::Flush => vec![HandRank::Flush(detect_flush(cards)?)],
        CheckKind::Fifteen => vec![HandRank::Fifteen(validate_fifteen(cards)?)],
        CheckKind::Nobs => vec![HandRank::Nobs(validate_nobs(cards)?)],
    })
}

pub fn handle_check_command(
    kind: CheckKind,
    cards: &[String],
    format: OutputFormat,
    unicode: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let cards = parse_card_args(cards)?;
    match detect(kind, &cards) {
        Ok(ranks) => write_ranks(out, &cards, &ranks, format, unicode),
        Err(e) => {
            debug!(check = kind.as_str(), error = %e, "rejected");
            if format == OutputFormat::Json {
                let doc = serde_json::json!({
                    "check": kind.as_str(),
                    "error": e.to_string(),
                    "category": e.category(),
                });
                writeln!(out, "{}", serde_json::to_string_pretty(&doc)?)?;
            }
            Err(CliError::Engine(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    fn check(kind: CheckKind, cards: &str, format: OutputFormat) -> (Result<(), CliError>, String) {
        let mut out = Vec::new();
        let res = handle_check_command(kind, &args(cards), format, false, &mut out);
        (res, String::from_utf8(out).unwrap())
    }

    #[test]
    fn triple_run() {
        let (res, text) = check(CheckKind::Run, "10C JH QC QH QS KD", OutputFormat::Text);
        assert!(res.is_ok());
        assert!(text.starts_with("Triple Run: 18 ["));
    }

    #[test]
    fn kinds_never_fail() {
        let (res, text) = check(CheckKind::Kinds, "2C 7H", OutputFormat::Text);
        assert!(res.is_ok());
        assert_eq!(text, "No hand ranks\nTotal: 0\n");
    }

    #[test]
    fn rejected_flush_is_an_engine_error() {
        let (res, _) = check(CheckKind::Flush, "2H 5H 9H KS", OutputFormat::Text);
        assert!(matches!(
            res,
            Err(CliError::Engine(HandError::InsufficientElements { .. }))
        ));
    }

    #[test]
    fn json_rejection_carries_category() {
        let (res, text) = check(CheckKind::Nobs, "JC AS", OutputFormat::Json);
        assert!(res.is_err());
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["check"], "nobs");
        assert_eq!(json["category"], "description");
    }
}
