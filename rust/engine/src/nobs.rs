use serde::Serialize;

use crate::cards::{RankedCard, Suit};
use crate::collection::CardSet;
use crate::errors::HandError;
use crate::hand_rank::Scored;

pub const NOBS_POINTS: u32 = 1;

/// A jack together with another card of its suit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Nobs<C> {
    suit: Suit,
    jack: C,
    cards: CardSet<C>,
}

impl<C: RankedCard> Nobs<C> {
    /// Validates a jack held in hand against the cut card.
    ///
    /// A jack turned as the cut does not score nobs.
    pub fn with_cut(hand_card: C, cut: C) -> Result<Self, HandError> {
        if cut.is_jack() && !hand_card.is_jack() {
            return Err(HandError::InvalidPosition {
                position: 1,
                len: 2,
            });
        }
        validate_nobs(&[hand_card, cut])
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn jack(&self) -> C {
        self.jack
    }
}

impl<C: RankedCard> Scored<C> for Nobs<C> {
    fn title(&self) -> &'static str {
        "Nobs"
    }

    fn points(&self) -> u32 {
        NOBS_POINTS
    }

    fn cards(&self) -> &[C] {
        self.cards.as_slice()
    }
}

/// Exactly two cards: one jack and one non-jack of the same suit.
///
/// ```
/// use crib_engine::cards::parse_cards;
/// use crib_engine::nobs::validate_nobs;
///
/// assert!(validate_nobs(&parse_cards("JC AC").unwrap()).is_ok());
/// assert!(validate_nobs(&parse_cards("JC AS").unwrap()).is_err());
/// ```
pub fn validate_nobs<C: RankedCard>(cards: &[C]) -> Result<Nobs<C>, HandError> {
    let set = CardSet::new(2, 2, cards.to_vec())?;
    if cards.iter().any(RankedCard::is_joker) {
        return Err(HandError::JokersNotAllowed);
    }
    let (jacks, others): (Vec<C>, Vec<C>) = cards.iter().partition(|c| c.is_jack());
    let ([jack], [other]) = (jacks.as_slice(), others.as_slice()) else {
        return Err(HandError::InvalidRank(format!(
            "{} jacks, expected 1",
            jacks.len()
        )));
    };
    let (Some(suit), Some(other_suit)) = (jack.suit(), other.suit()) else {
        return Err(HandError::JokersNotAllowed);
    };
    if other_suit != suit {
        return Err(HandError::InvalidSuit(format!(
            "{other_suit:?} does not match {suit:?}"
        )));
    }
    Ok(Nobs {
        suit,
        jack: *jack,
        cards: set,
    })
}
