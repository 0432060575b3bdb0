//! Sequence builder.
//!
//! Sorts cards by position and scans adjacent pairs. A card one position
//! above its predecessor extends every open sequence, a duplicate rank
//! branches a parallel sequence off each open one, and a gap closes the open
//! sequences and starts a new one. Duplicated ranks therefore yield parallel
//! sequences that share every other card:
//!
//! ```text
//!   A 2 2' 3      ->  [A 2 3] [A 2' 3]
//!   A 2 2' 3 3'   ->  [A 2 3] [A 2' 3] [A 2 3'] [A 2' 3']
//! ```

use tracing::trace;

use crate::cards::RankedCard;

/// Minimum length of a scoring run.
pub const MIN_RUN: usize = 3;

#[derive(Debug)]
struct Builder<C> {
    sequences: Vec<Vec<C>>,
    /// Index of the first open sequence; everything before it is closed.
    active: usize,
}

impl<C: RankedCard> Builder<C> {
    fn seed(first: C) -> Self {
        Self {
            sequences: vec![vec![first]],
            active: 0,
        }
    }

    fn step(self, card: &C, next: &C) -> Self {
        if next.follows(card) {
            self.extend(*next)
        } else if next.ranks(card) {
            self.branch(*next)
        } else {
            self.restart(*next)
        }
    }

    fn extend(self, next: C) -> Self {
        let Builder { sequences, active } = self;
        let sequences = sequences
            .into_iter()
            .enumerate()
            .map(|(i, mut seq)| {
                if i >= active {
                    seq.push(next);
                }
                seq
            })
            .collect();
        Builder { sequences, active }
    }

    fn branch(self, next: C) -> Self {
        let mut branches: Vec<Vec<C>> = Vec::new();
        let mut previous_base: Option<&[C]> = None;
        for seq in &self.sequences[self.active..] {
            let Some((last, base)) = seq.split_last() else {
                continue;
            };
            if !last.ranks(&next) || previous_base == Some(base) {
                continue;
            }
            previous_base = Some(base);
            let mut candidate = base.to_vec();
            candidate.push(next);
            branches.push(candidate);
        }
        trace!(
            position = next.position(),
            branches = branches.len(),
            "duplicate rank branches"
        );
        let Builder {
            mut sequences,
            active,
        } = self;
        sequences.extend(branches);
        Builder { sequences, active }
    }

    fn restart(self, next: C) -> Self {
        let Builder { mut sequences, .. } = self;
        trace!(position = next.position(), "sequence break");
        let active = sequences.len();
        sequences.push(vec![next]);
        Builder { sequences, active }
    }

    fn finish(self) -> Vec<Vec<C>> {
        self.sequences
            .into_iter()
            .filter(|seq| seq.len() >= 2)
            .collect()
    }
}

/// Sorts cards by ascending position, ties broken by suit.
pub fn sort_cards<C: RankedCard>(cards: &[C]) -> Vec<C> {
    let mut sorted = cards.to_vec();
    sorted.sort_by_key(|c| (c.position(), c.suit()));
    sorted
}

/// Builds every sequence of two or more consecutive positions.
///
/// Each returned sequence is ordered by ascending position. Input order does
/// not matter.
///
/// ```
/// use crib_engine::cards::parse_cards;
/// use crib_engine::sequence::build_sequences;
///
/// let seqs = build_sequences(&parse_cards("3D AS 2H 2C").unwrap());
/// assert_eq!(seqs.len(), 2);
/// assert!(seqs.iter().all(|s| s.len() == 3));
/// ```
pub fn build_sequences<C: RankedCard>(cards: &[C]) -> Vec<Vec<C>> {
    let sorted = sort_cards(cards);
    let Some(first) = sorted.first() else {
        return Vec::new();
    };
    sorted
        .windows(2)
        .fold(Builder::seed(*first), |builder, pair| {
            builder.step(&pair[0], &pair[1])
        })
        .finish()
}

/// Sequences long enough to score as runs.
pub fn build_runs<C: RankedCard>(cards: &[C]) -> Vec<Vec<C>> {
    build_sequences(cards)
        .into_iter()
        .filter(|seq| seq.len() >= MIN_RUN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank as R, Suit as S};

    fn c(s: S, r: R) -> Card {
        Card { suit: s, rank: r }
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(build_sequences::<Card>(&[]).is_empty());
        assert!(build_sequences(&[c(S::Clubs, R::Ace)]).is_empty());
    }

    #[test]
    fn plain_run() {
        let seqs = build_sequences(&[
            c(S::Clubs, R::Three),
            c(S::Hearts, R::Ace),
            c(S::Spades, R::Two),
        ]);
        assert_eq!(
            seqs,
            vec![vec![
                c(S::Hearts, R::Ace),
                c(S::Spades, R::Two),
                c(S::Clubs, R::Three)
            ]]
        );
    }

    #[test]
    fn gap_closes_open_sequences() {
        let seqs = build_sequences(&[
            c(S::Clubs, R::Ace),
            c(S::Clubs, R::Two),
            c(S::Clubs, R::Five),
            c(S::Clubs, R::Six),
            c(S::Clubs, R::Nine),
        ]);
        assert_eq!(seqs.len(), 2);
        assert_eq!(seqs[0], vec![c(S::Clubs, R::Ace), c(S::Clubs, R::Two)]);
        assert_eq!(seqs[1], vec![c(S::Clubs, R::Five), c(S::Clubs, R::Six)]);
    }

    #[test]
    fn triple_rank_branches_once_per_card() {
        let seqs = build_sequences(&[
            c(S::Clubs, R::Ace),
            c(S::Clubs, R::Two),
            c(S::Hearts, R::Two),
            c(S::Spades, R::Two),
            c(S::Clubs, R::Three),
        ]);
        assert_eq!(seqs.len(), 3);
        for (seq, suit) in seqs.iter().zip([S::Clubs, S::Hearts, S::Spades]) {
            assert_eq!(
                seq,
                &vec![c(S::Clubs, R::Ace), c(suit, R::Two), c(S::Clubs, R::Three)]
            );
        }
    }

    #[test]
    fn two_pairs_branch_into_four() {
        let seqs = build_runs(&[
            c(S::Clubs, R::Ace),
            c(S::Clubs, R::Two),
            c(S::Hearts, R::Two),
            c(S::Clubs, R::Three),
            c(S::Hearts, R::Three),
        ]);
        assert_eq!(seqs.len(), 4);
        let mut seen = seqs.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn leading_duplicate_branches_from_empty_base() {
        let seqs = build_sequences(&[
            c(S::Clubs, R::Four),
            c(S::Hearts, R::Four),
            c(S::Clubs, R::Five),
        ]);
        assert_eq!(
            seqs,
            vec![
                vec![c(S::Clubs, R::Four), c(S::Clubs, R::Five)],
                vec![c(S::Hearts, R::Four), c(S::Clubs, R::Five)],
            ]
        );
    }

    #[test]
    fn duplicates_after_gap_do_not_touch_closed_sequences() {
        let seqs = build_sequences(&[
            c(S::Clubs, R::Ace),
            c(S::Clubs, R::Two),
            c(S::Clubs, R::Seven),
            c(S::Hearts, R::Seven),
            c(S::Clubs, R::Eight),
        ]);
        assert_eq!(seqs.len(), 3);
        assert_eq!(seqs[0], vec![c(S::Clubs, R::Ace), c(S::Clubs, R::Two)]);
    }
}
