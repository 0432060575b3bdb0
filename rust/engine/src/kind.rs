use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::cards::RankedCard;
use crate::collection::CardSet;
use crate::errors::HandError;
use crate::hand_rank::Scored;

/// Points awarded for each unordered same-rank pair.
pub const PAIR_POINTS: u32 = 2;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum KindSize {
    Pair = 2,
    ThreeOfAKind = 3,
    FourOfAKind = 4,
}

impl KindSize {
    fn from_len(n: usize) -> Option<KindSize> {
        match n {
            2 => Some(KindSize::Pair),
            3 => Some(KindSize::ThreeOfAKind),
            4 => Some(KindSize::FourOfAKind),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            KindSize::Pair => "Pair",
            KindSize::ThreeOfAKind => "Three of a Kind",
            KindSize::FourOfAKind => "Four of a Kind",
        }
    }
}

/// Cards sharing one rank, scored as every unordered pair among them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Kind<C> {
    size: KindSize,
    cards: CardSet<C>,
}

impl<C: RankedCard> Kind<C> {
    pub fn new(cards: Vec<C>) -> Result<Self, HandError> {
        if cards.iter().any(RankedCard::is_joker) {
            return Err(HandError::JokersNotAllowed);
        }
        let size = match cards.len() {
            n if n < 2 => {
                return Err(HandError::InsufficientElements {
                    actual: n,
                    minimum: 2,
                })
            }
            n => KindSize::from_len(n).ok_or(HandError::ExcessiveElements {
                actual: n,
                maximum: 4,
            })?,
        };
        let ranks = distinct_positions(&cards);
        if ranks != 1 {
            return Err(HandError::InvalidKindCount {
                expected: 1,
                actual: ranks,
            });
        }
        Ok(Self {
            size,
            cards: CardSet::new(2, 4, cards)?,
        })
    }

    pub fn size(&self) -> KindSize {
        self.size
    }

    /// Number of unordered pairs in the group, `C(n, 2)`.
    pub fn pairs(&self) -> u32 {
        binomial(self.cards.len() as u32, 2)
    }
}

impl<C: RankedCard> Scored<C> for Kind<C> {
    fn title(&self) -> &'static str {
        self.size.title()
    }

    fn points(&self) -> u32 {
        self.pairs() * PAIR_POINTS
    }

    fn cards(&self) -> &[C] {
        self.cards.as_slice()
    }
}

/// Groups cards by rank and returns one [`Kind`] per group of two to four.
///
/// ```
/// use crib_engine::cards::parse_cards;
/// use crib_engine::hand_rank::Scored;
/// use crib_engine::kind::detect_kinds;
///
/// let kinds = detect_kinds(&parse_cards("5H 5S 5D 9C").unwrap());
/// assert_eq!(kinds.len(), 1);
/// assert_eq!(kinds[0].points(), 6);
/// ```
pub fn detect_kinds<C: RankedCard>(cards: &[C]) -> Vec<Kind<C>> {
    let mut groups: BTreeMap<u8, Vec<C>> = BTreeMap::new();
    for card in cards.iter().filter(|c| !c.is_joker()) {
        groups.entry(card.position()).or_default().push(*card);
    }
    groups
        .into_iter()
        .filter(|(_, group)| KindSize::from_len(group.len()).is_some())
        .filter_map(|(position, group)| {
            debug!(position, size = group.len(), "same-rank group");
            Kind::new(group).ok()
        })
        .collect()
}

/// `n` choose `k`.
pub fn binomial(n: u32, k: u32) -> u32 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

pub(crate) fn distinct_positions<C: RankedCard>(cards: &[C]) -> usize {
    let mut positions: Vec<u8> = cards.iter().map(RankedCard::position).collect();
    positions.sort_unstable();
    positions.dedup();
    positions.len()
}
