use serde::Serialize;
use tracing::debug;

use crate::cards::RankedCard;
use crate::fifteen::{validate_fifteen, Fifteen};
use crate::flush::{detect_flush, Flush};
use crate::kind::{detect_kinds, Kind};
use crate::nobs::{validate_nobs, Nobs};
use crate::run::{classify_runs, Run};

/// Common surface of every scored combination.
pub trait Scored<C> {
    fn title(&self) -> &'static str;

    /// Always derived from the cards and the variant.
    fn points(&self) -> u32;

    fn cards(&self) -> &[C];
}

/// A detected combination with its title, points and cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum HandRank<C> {
    Kind(Kind<C>),
    Run(Run<C>),
    Flush(Flush<C>),
    Fifteen(Fifteen<C>),
    Nobs(Nobs<C>),
}

impl<C: RankedCard> HandRank<C> {
    fn scored(&self) -> &dyn Scored<C> {
        match self {
            HandRank::Kind(k) => k,
            HandRank::Run(r) => r,
            HandRank::Flush(f) => f,
            HandRank::Fifteen(f) => f,
            HandRank::Nobs(n) => n,
        }
    }
}

impl<C: RankedCard> Scored<C> for HandRank<C> {
    fn title(&self) -> &'static str {
        self.scored().title()
    }

    fn points(&self) -> u32 {
        self.scored().points()
    }

    fn cards(&self) -> &[C] {
        self.scored().cards()
    }
}

/// Applies every detector to one candidate set.
///
/// Each detector looks at the set as a whole; detectors that reject it add
/// nothing. Subsets are not searched. When the set is a run, its pair points
/// already cover the duplicated ranks and no separate kinds are reported.
///
/// ```
/// use crib_engine::cards::parse_cards;
/// use crib_engine::hand_rank::{evaluate, total_points, Scored};
///
/// let ranks = evaluate(&parse_cards("4H 5H 5S 6H").unwrap());
/// let titles: Vec<_> = ranks.iter().map(|r| r.title()).collect();
/// assert_eq!(titles, ["Double Run"]);
/// assert_eq!(total_points(&ranks), 8);
/// ```
pub fn evaluate<C: RankedCard>(cards: &[C]) -> Vec<HandRank<C>> {
    let mut ranks: Vec<HandRank<C>> = match classify_runs(cards) {
        Ok(run) => vec![HandRank::Run(run)],
        Err(_) => detect_kinds(cards).into_iter().map(HandRank::Kind).collect(),
    };
    ranks.extend(detect_flush(cards).ok().map(HandRank::Flush));
    ranks.extend(validate_fifteen(cards).ok().map(HandRank::Fifteen));
    ranks.extend(validate_nobs(cards).ok().map(HandRank::Nobs));
    debug!(
        cards = cards.len(),
        ranks = ranks.len(),
        points = total_points(&ranks),
        "evaluated candidate"
    );
    ranks
}

pub fn total_points<C: RankedCard>(ranks: &[HandRank<C>]) -> u32 {
    ranks.iter().map(|r| r.points()).sum()
}
