use serde::Serialize;
use tracing::debug;

use crate::cards::RankedCard;
use crate::collection::CardSet;
use crate::errors::HandError;
use crate::hand_rank::Scored;

pub const FIFTEEN: u32 = 15;
pub const FIFTEEN_POINTS: u32 = 2;

/// Two to five cards whose counting values add up to fifteen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fifteen<C> {
    cards: CardSet<C>,
}

impl<C: RankedCard> Scored<C> for Fifteen<C> {
    fn title(&self) -> &'static str {
        "Fifteen"
    }

    fn points(&self) -> u32 {
        FIFTEEN_POINTS
    }

    fn cards(&self) -> &[C] {
        self.cards.as_slice()
    }
}

/// Checks one candidate subset; it does not search a hand for subsets.
///
/// ```
/// use crib_engine::cards::parse_cards;
/// use crib_engine::fifteen::validate_fifteen;
///
/// assert!(validate_fifteen(&parse_cards("KS 5H").unwrap()).is_ok());
/// assert!(validate_fifteen(&parse_cards("KS 4H").unwrap()).is_err());
/// ```
pub fn validate_fifteen<C: RankedCard>(cards: &[C]) -> Result<Fifteen<C>, HandError> {
    let total: u32 = cards.iter().map(|c| u32::from(c.points())).sum();
    if !(2..=5).contains(&cards.len()) || total != FIFTEEN {
        debug!(total, cards = cards.len(), "not a fifteen");
        return Err(HandError::InvalidPoints {
            total,
            count: cards.len(),
        });
    }
    Ok(Fifteen {
        cards: CardSet::new(2, 5, cards.to_vec())?,
    })
}
