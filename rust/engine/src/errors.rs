use serde::Serialize;
use thiserror::Error;

/// Broad grouping of [`HandError`] variants.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    /// Cardinality and capacity violations.
    Range,
    /// Shape or content violations of a candidate card set.
    Elements,
    /// A card's rank or suit does not fit its context.
    Description,
    /// Context-specific exclusions.
    Feature,
    /// Duplicate-rank pattern does not match the requested variant.
    HandRank,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HandError {
    // Range
    #[error("Invalid minimum: {min}")]
    InvalidMin { min: i64 },
    #[error("Invalid maximum: {max} (minimum {min})")]
    InvalidMax { min: i64, max: i64 },
    #[error("Collection is full ({max} cards)")]
    IsFull { max: usize },
    #[error("Cannot add {requested} cards, capacity is {capacity}")]
    LimitedCapacity { requested: usize, capacity: usize },
    #[error("Invalid position {position} for {len} cards")]
    InvalidPosition { position: usize, len: usize },

    // Elements
    #[error("Collection is empty")]
    IsEmpty,
    #[error("Card not found")]
    NotFound,
    #[error("Insufficient elements: {actual}, minimum: {minimum}")]
    InsufficientElements { actual: usize, minimum: usize },
    #[error("Excessive elements: {actual}, maximum: {maximum}")]
    ExcessiveElements { actual: usize, maximum: usize },
    #[error("Invalid count: {count}, expected {min}..={max}")]
    InvalidCount { count: usize, min: usize, max: usize },
    #[error("Invalid duplicate count: {pairs} pairs, {triples} triples, {quads} quads")]
    InvalidDuplicateCount {
        pairs: usize,
        triples: usize,
        quads: usize,
    },
    #[error("Cards are not sequential")]
    AreNotSequential,

    // Description
    #[error("Invalid rank: {0}")]
    InvalidRank(String),
    #[error("Invalid suit: {0}")]
    InvalidSuit(String),

    // Feature
    #[error("Jokers are not allowed")]
    JokersNotAllowed,

    // HandRank
    #[error("Invalid pair count: {actual}, expected {expected}")]
    InvalidPairCount { expected: usize, actual: usize },
    #[error("Invalid kind count: {actual}, expected {expected}")]
    InvalidKindCount { expected: usize, actual: usize },
    #[error("Invalid points: {total}, expected 15 from 2..=5 cards ({count} given)")]
    InvalidPoints { total: u32, count: usize },
}

impl HandError {
    pub fn category(&self) -> ErrorCategory {
        use HandError::*;
        match self {
            InvalidMin { .. }
            | InvalidMax { .. }
            | IsFull { .. }
            | LimitedCapacity { .. }
            | InvalidPosition { .. } => ErrorCategory::Range,
            IsEmpty
            | NotFound
            | InsufficientElements { .. }
            | ExcessiveElements { .. }
            | InvalidCount { .. }
            | InvalidDuplicateCount { .. }
            | AreNotSequential => ErrorCategory::Elements,
            InvalidRank(_) | InvalidSuit(_) => ErrorCategory::Description,
            JokersNotAllowed => ErrorCategory::Feature,
            InvalidPairCount { .. } | InvalidKindCount { .. } | InvalidPoints { .. } => {
                ErrorCategory::HandRank
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_taxonomy() {
        assert_eq!(HandError::IsFull { max: 2 }.category(), ErrorCategory::Range);
        assert_eq!(HandError::NotFound.category(), ErrorCategory::Elements);
        assert_eq!(
            HandError::InvalidSuit("x".into()).category(),
            ErrorCategory::Description
        );
        assert_eq!(HandError::JokersNotAllowed.category(), ErrorCategory::Feature);
        assert_eq!(
            HandError::InvalidPairCount {
                expected: 1,
                actual: 2
            }
            .category(),
            ErrorCategory::HandRank
        );
    }

    #[test]
    fn messages_carry_fields() {
        let e = HandError::InsufficientElements {
            actual: 3,
            minimum: 4,
        };
        assert_eq!(e.to_string(), "Insufficient elements: 3, minimum: 4");
    }
}
