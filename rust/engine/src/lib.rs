//! # crib-engine: Hand Rank Evaluation Core
//!
//! Detects and scores the combinations that cribbage-style counting rewards:
//! same-rank kinds, runs (including runs branching over duplicated ranks),
//! flushes, fifteens and nobs. Every detector is a pure function from a
//! candidate card set to a scored result or a typed [`errors::HandError`].
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the [`cards::RankedCard`] capability
//! - [`collection`] - Bounded card multiset backing every hand rank
//! - [`kind`] - Pairs, three and four of a kind
//! - [`sequence`] - Sequence builder with duplicate-rank branching
//! - [`run`] - Run, double run, double double run and triple run classification
//! - [`flush`] - Flush, straight flush and royal flush
//! - [`fifteen`] - Fifteen validation
//! - [`nobs`] - Nobs validation
//! - [`hand_rank`] - Uniform [`hand_rank::HandRank`] result and candidate evaluation
//! - [`errors`] - Error types for hand rank construction
//!
//! ## Quick Start
//!
//! ```rust
//! use crib_engine::cards::{Card, Rank, Suit};
//! use crib_engine::hand_rank::Scored;
//! use crib_engine::run::{classify_runs, RunKind};
//!
//! let cards = [
//!     Card { suit: Suit::Hearts, rank: Rank::Ace },
//!     Card { suit: Suit::Clubs, rank: Rank::Two },
//!     Card { suit: Suit::Spades, rank: Rank::Two },
//!     Card { suit: Suit::Hearts, rank: Rank::Three },
//!     Card { suit: Suit::Diamonds, rank: Rank::Three },
//! ];
//!
//! let run = classify_runs(&cards).unwrap();
//! assert_eq!(run.kind(), RunKind::DoubleDoubleRun);
//! assert_eq!(run.points(), 16);
//! ```
//!
//! ## Validation
//!
//! Construction fails fast on the first violated precondition:
//!
//! ```rust
//! use crib_engine::cards::parse_cards;
//! use crib_engine::errors::HandError;
//! use crib_engine::fifteen::validate_fifteen;
//!
//! let cards = parse_cards("10C 4H").unwrap();
//! match validate_fifteen(&cards) {
//!     Ok(_) => unreachable!(),
//!     Err(e) => assert!(matches!(e, HandError::InvalidPoints { total: 14, .. })),
//! }
//! ```

pub mod cards;
pub mod collection;
pub mod errors;
pub mod fifteen;
pub mod flush;
pub mod hand_rank;
pub mod kind;
pub mod nobs;
pub mod run;
pub mod sequence;

pub use cards::{Card, Rank, RankedCard, Suit};
pub use errors::{ErrorCategory, HandError};
pub use hand_rank::{evaluate, total_points, HandRank, Scored};
