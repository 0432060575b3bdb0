//! Card and hand rank formatters for terminal display.
//!
//! Pure functions turning engine values into text. Suits render as Unicode
//! symbols (♥ ♦ ♣ ♠) or, with `unicode` off, as the letters `H D C S`, which
//! round-trip through the engine's card parser.
//!
//! ## Example
//!
//! ```rust
//! use crib_engine::cards::{Card, Rank, Suit};
//! use crib_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card { rank: Rank::Ace, suit: Suit::Spades };
//! assert_eq!(format_card(&ace_spades, true), "A♠");
//! assert_eq!(format_cards(&[ace_spades], false), "[AS]");
//! ```

use crib_engine::cards::{Card, Suit};
use crib_engine::hand_rank::{HandRank, Scored};

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: Suit, unicode: bool) -> char {
    if unicode { suit.symbol() } else { suit.letter() }
}

/// String like "10♥" (Unicode) or "10H" (ASCII).
pub fn format_card(card: &Card, unicode: bool) -> String {
    format!("{}{}", card.rank.token(), format_suit(card.suit, unicode))
}

/// Bracketed, space separated list such as "[A♠ 2♥ 3♦]", or "[]" if empty.
pub fn format_cards(cards: &[Card], unicode: bool) -> String {
    let formatted: Vec<String> = cards.iter().map(|c| format_card(c, unicode)).collect();
    format!("[{}]", formatted.join(" "))
}

/// One line per hand rank: title, points and cards.
///
/// ```rust
/// use crib_engine::cards::parse_cards;
/// use crib_engine::fifteen::validate_fifteen;
/// use crib_engine::hand_rank::HandRank;
/// use crib_cli::formatters::format_hand_rank;
///
/// let fifteen = validate_fifteen(&parse_cards("KS 5H").unwrap()).unwrap();
/// assert_eq!(format_hand_rank(&HandRank::Fifteen(fifteen), false), "Fifteen: 2 [KS 5H]");
/// ```
pub fn format_hand_rank(rank: &HandRank<Card>, unicode: bool) -> String {
    format!(
        "{}: {} {}",
        rank.title(),
        rank.points(),
        format_cards(rank.cards(), unicode)
    )
}

/// JSON view of a hand rank with cards in their parseable text form.
pub fn hand_rank_json(rank: &HandRank<Card>) -> serde_json::Value {
    serde_json::json!({
        "title": rank.title(),
        "points": rank.points(),
        "cards": rank.cards().iter().map(Card::to_string).collect::<Vec<_>>(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crib_engine::cards::Rank;
    use crib_engine::kind::Kind;

    fn c(s: Suit, r: Rank) -> Card {
        Card { suit: s, rank: r }
    }

    #[test]
    fn test_format_suit() {
        assert_eq!(format_suit(Suit::Hearts, true), '♥');
        assert_eq!(format_suit(Suit::Hearts, false), 'H');
        assert_eq!(format_suit(Suit::Clubs, true), '♣');
        assert_eq!(format_suit(Suit::Spades, false), 'S');
    }

    #[test]
    fn test_format_card() {
        assert_eq!(format_card(&c(Suit::Diamonds, Rank::Ten), true), "10♦");
        assert_eq!(format_card(&c(Suit::Clubs, Rank::Queen), false), "QC");
    }

    #[test]
    fn test_format_cards_empty() {
        assert_eq!(format_cards(&[], true), "[]");
    }

    #[test]
    fn test_format_hand_rank() {
        let pair = Kind::new(vec![c(Suit::Clubs, Rank::Nine), c(Suit::Hearts, Rank::Nine)]).unwrap();
        let rank = HandRank::Kind(pair);
        assert_eq!(format_hand_rank(&rank, true), "Pair: 2 [9♣ 9♥]");
        let json = hand_rank_json(&rank);
        assert_eq!(json["title"], "Pair");
        assert_eq!(json["points"], 2);
        assert_eq!(json["cards"][1], "9H");
    }
}
