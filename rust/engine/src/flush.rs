use serde::Serialize;
use tracing::debug;

use crate::cards::{RankedCard, Suit, ACE_HIGH};
use crate::collection::CardSet;
use crate::errors::HandError;
use crate::hand_rank::Scored;

const MIN_FLUSH: usize = 4;
const MAX_FLUSH: usize = 5;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum FlushKind {
    Flush,
    StraightFlush,
    RoyalFlush,
}

impl FlushKind {
    pub fn title(self) -> &'static str {
        match self {
            FlushKind::Flush => "Flush",
            FlushKind::StraightFlush => "Straight Flush",
            FlushKind::RoyalFlush => "Royal Flush",
        }
    }
}

/// Four or five cards of one suit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flush<C> {
    kind: FlushKind,
    suit: Suit,
    cards: CardSet<C>,
}

impl<C: RankedCard> Flush<C> {
    pub fn kind(&self) -> FlushKind {
        self.kind
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }
}

impl<C: RankedCard> Scored<C> for Flush<C> {
    fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// One point per card; sequence bonuses are scored by runs.
    fn points(&self) -> u32 {
        self.cards.len() as u32
    }

    fn cards(&self) -> &[C] {
        self.cards.as_slice()
    }
}

/// Validates a same-suit set and classifies straight and royal flushes.
///
/// ```
/// use crib_engine::cards::parse_cards;
/// use crib_engine::flush::{detect_flush, FlushKind};
///
/// let flush = detect_flush(&parse_cards("10H JH QH KH AH").unwrap()).unwrap();
/// assert_eq!(flush.kind(), FlushKind::RoyalFlush);
/// ```
pub fn detect_flush<C: RankedCard>(cards: &[C]) -> Result<Flush<C>, HandError> {
    if cards.iter().any(RankedCard::is_joker) {
        return Err(HandError::JokersNotAllowed);
    }
    if cards.len() < MIN_FLUSH {
        return Err(HandError::InsufficientElements {
            actual: cards.len(),
            minimum: MIN_FLUSH,
        });
    }
    if cards.len() > MAX_FLUSH {
        return Err(HandError::ExcessiveElements {
            actual: cards.len(),
            maximum: MAX_FLUSH,
        });
    }
    let suit = cards[0].suit().ok_or(HandError::JokersNotAllowed)?;
    let matching = cards.iter().filter(|c| c.suit() == Some(suit)).count();
    if matching != cards.len() {
        return Err(HandError::InsufficientElements {
            actual: matching,
            minimum: cards.len(),
        });
    }

    let kind = if cards.len() == MAX_FLUSH {
        // ace counts high only, so A-2-3-4-5 stays a plain flush
        let high: Vec<u8> = sorted(cards.iter().map(RankedCard::high_position));
        if is_straight(&high) && high[0] == ACE_HIGH - 4 {
            FlushKind::RoyalFlush
        } else if is_straight(&high) {
            FlushKind::StraightFlush
        } else {
            FlushKind::Flush
        }
    } else {
        FlushKind::Flush
    };
    debug!(kind = kind.title(), ?suit, cards = cards.len(), "flush");

    Ok(Flush {
        kind,
        suit,
        cards: CardSet::new(MIN_FLUSH as i64, MAX_FLUSH as i64, cards.to_vec())?,
    })
}

fn sorted(positions: impl Iterator<Item = u8>) -> Vec<u8> {
    let mut v: Vec<u8> = positions.collect();
    v.sort_unstable();
    v
}

/// Ascending positions with each one directly above the previous.
fn is_straight(sorted_positions: &[u8]) -> bool {
    sorted_positions.windows(2).all(|w| w[1] == w[0] + 1)
}
