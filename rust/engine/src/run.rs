use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::cards::RankedCard;
use crate::collection::{Bounds, CardSet};
use crate::errors::HandError;
use crate::hand_rank::Scored;
use crate::kind::{binomial, distinct_positions, PAIR_POINTS};
use crate::sequence::{build_sequences, sort_cards, MIN_RUN};

/// Longest possible sequence: ace through king.
const MAX_SEQUENCE: i64 = 13;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum RunKind {
    /// No duplicated rank.
    Run,
    /// One rank doubled: two parallel runs.
    DoubleRun,
    /// Two ranks doubled: four parallel runs.
    DoubleDoubleRun,
    /// One rank tripled: three parallel runs.
    TripleRun,
}

impl RunKind {
    pub fn title(self) -> &'static str {
        match self {
            RunKind::Run => "Run",
            RunKind::DoubleRun => "Double Run",
            RunKind::DoubleDoubleRun => "Double Double Run",
            RunKind::TripleRun => "Triple Run",
        }
    }

    /// Parallel runs formed by this duplicate pattern.
    pub fn runs(self) -> u32 {
        match self {
            RunKind::Run => 1,
            RunKind::DoubleRun => 2,
            RunKind::DoubleDoubleRun => 4,
            RunKind::TripleRun => 3,
        }
    }

    /// Same-rank pairs contained in the duplicates.
    pub fn pairs(self) -> u32 {
        match self {
            RunKind::Run => 0,
            RunKind::DoubleRun => 1,
            RunKind::DoubleDoubleRun => 2,
            RunKind::TripleRun => binomial(3, 2),
        }
    }

    fn extra_cards(self) -> i64 {
        match self {
            RunKind::Run => 0,
            RunKind::DoubleRun => 1,
            RunKind::DoubleDoubleRun | RunKind::TripleRun => 2,
        }
    }

    fn bounds(self) -> Result<Bounds, HandError> {
        let extra = self.extra_cards();
        Bounds::new(MIN_RUN as i64 + extra, MAX_SEQUENCE + extra)
    }
}

/// A run of three or more consecutive ranks, possibly with duplicated ranks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run<C> {
    kind: RunKind,
    sequence: u32,
    cards: CardSet<C>,
}

#[derive(Debug, Default)]
struct Duplicates {
    pairs: usize,
    triples: usize,
    quads: usize,
}

impl Duplicates {
    fn count<C: RankedCard>(cards: &[C]) -> Self {
        let mut groups: BTreeMap<u8, usize> = BTreeMap::new();
        for card in cards {
            *groups.entry(card.position()).or_default() += 1;
        }
        groups
            .values()
            .fold(Duplicates::default(), |mut dup, &n| {
                match n {
                    1 => {}
                    2 => dup.pairs += 1,
                    3 => dup.triples += 1,
                    _ => dup.quads += 1,
                }
                dup
            })
    }

    fn classify(&self) -> Result<RunKind, HandError> {
        match (self.pairs, self.triples, self.quads) {
            (0, 0, 0) => Ok(RunKind::Run),
            (1, 0, 0) => Ok(RunKind::DoubleRun),
            (2, 0, 0) => Ok(RunKind::DoubleDoubleRun),
            (0, 1, 0) => Ok(RunKind::TripleRun),
            (pairs, triples, quads) => Err(HandError::InvalidDuplicateCount {
                pairs,
                triples,
                quads,
            }),
        }
    }
}

impl<C: RankedCard> Run<C> {
    /// Classifies a candidate set into the matching run variant.
    ///
    /// ```
    /// use crib_engine::cards::parse_cards;
    /// use crib_engine::hand_rank::Scored;
    /// use crib_engine::run::{Run, RunKind};
    ///
    /// let run = Run::new(parse_cards("AS 2H 2C 3D").unwrap()).unwrap();
    /// assert_eq!(run.kind(), RunKind::DoubleRun);
    /// assert_eq!(run.points(), 8);
    /// ```
    pub fn new(cards: Vec<C>) -> Result<Self, HandError> {
        if cards.iter().any(RankedCard::is_joker) {
            return Err(HandError::JokersNotAllowed);
        }
        if cards.len() < MIN_RUN {
            return Err(HandError::InsufficientElements {
                actual: cards.len(),
                minimum: MIN_RUN,
            });
        }
        let sequence = sequential_length(&cards)?;
        let kind = Duplicates::count(&cards).classify()?;
        let set = CardSet::with_bounds(kind.bounds()?, cards)?;
        debug!(kind = kind.title(), sequence, cards = set.len(), "classified run");
        Ok(Self {
            kind,
            sequence: sequence as u32,
            cards: set,
        })
    }

    pub fn single(cards: Vec<C>) -> Result<Self, HandError> {
        Self::expect(RunKind::Run, cards)
    }

    pub fn double(cards: Vec<C>) -> Result<Self, HandError> {
        Self::expect(RunKind::DoubleRun, cards)
    }

    pub fn double_double(cards: Vec<C>) -> Result<Self, HandError> {
        Self::expect(RunKind::DoubleDoubleRun, cards)
    }

    pub fn triple(cards: Vec<C>) -> Result<Self, HandError> {
        Self::expect(RunKind::TripleRun, cards)
    }

    fn expect(wanted: RunKind, cards: Vec<C>) -> Result<Self, HandError> {
        let run = Self::new(cards)?;
        let triples = |k: RunKind| usize::from(k == RunKind::TripleRun);
        if triples(run.kind) != triples(wanted) {
            return Err(HandError::InvalidKindCount {
                expected: triples(wanted),
                actual: triples(run.kind),
            });
        }
        if run.kind != wanted {
            return Err(HandError::InvalidPairCount {
                expected: wanted.pairs() as usize,
                actual: run.kind.pairs() as usize,
            });
        }
        Ok(run)
    }

    pub fn kind(&self) -> RunKind {
        self.kind
    }

    pub fn runs(&self) -> u32 {
        self.kind.runs()
    }

    pub fn pairs(&self) -> u32 {
        self.kind.pairs()
    }

    /// Length of one constituent run.
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    pub fn run_points(&self) -> u32 {
        self.runs() * self.sequence
    }

    pub fn pair_points(&self) -> u32 {
        self.pairs() * PAIR_POINTS
    }
}

impl<C: RankedCard> Scored<C> for Run<C> {
    fn title(&self) -> &'static str {
        self.kind.title()
    }

    fn points(&self) -> u32 {
        self.run_points() + self.pair_points()
    }

    fn cards(&self) -> &[C] {
        self.cards.as_slice()
    }
}

/// Length shared by every branch when the whole set is one run.
///
/// The set is one run only if every built sequence spans every distinct
/// position; any gap splits the positions across shorter sequences.
fn sequential_length<C: RankedCard>(cards: &[C]) -> Result<usize, HandError> {
    let distinct = distinct_positions(cards);
    let sequences = build_sequences(cards);
    let spans = !sequences.is_empty() && sequences.iter().all(|seq| seq.len() == distinct);
    if distinct < MIN_RUN || !spans {
        return Err(HandError::AreNotSequential);
    }
    Ok(distinct)
}

/// Classifies one candidate set as a whole; see [`Run::new`].
pub fn classify_runs<C: RankedCard>(cards: &[C]) -> Result<Run<C>, HandError> {
    Run::new(cards.to_vec())
}

/// Classifies every run found among `cards`.
///
/// Cards are split at gaps; each stretch of three or more consecutive
/// positions is classified on its own. Stretches with an unsupported
/// duplicate pattern are skipped.
pub fn detect_runs<C: RankedCard>(cards: &[C]) -> Vec<Run<C>> {
    let mut stretches: Vec<Vec<C>> = Vec::new();
    for card in sort_cards(cards) {
        let adjacent = stretches
            .last()
            .and_then(|stretch| stretch.last())
            .is_some_and(|prev| card.ranks(prev) || card.follows(prev));
        match stretches.last_mut() {
            Some(stretch) if adjacent => stretch.push(card),
            _ => stretches.push(vec![card]),
        }
    }
    stretches
        .into_iter()
        .filter_map(|stretch| Run::new(stretch).ok())
        .collect()
}
