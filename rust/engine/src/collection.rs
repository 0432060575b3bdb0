//! Capacity-constrained card multiset.
//!
//! Every hand rank owns a [`CardSet`] whose bounds are fixed at construction
//! and checked before the set exists.

use serde::Serialize;

use crate::cards::RankedCard;
use crate::errors::HandError;

/// Inclusive cardinality limits `min..=max`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct Bounds {
    min: usize,
    max: usize,
}

impl Bounds {
    /// Validates raw limits: `min >= 0`, `max >= 1`, `max >= min`.
    pub fn new(min: i64, max: i64) -> Result<Self, HandError> {
        if min < 0 {
            return Err(HandError::InvalidMin { min });
        }
        if max < 1 || max < min {
            return Err(HandError::InvalidMax { min, max });
        }
        Ok(Self {
            min: min as usize,
            max: max as usize,
        })
    }

    pub fn min(&self) -> usize {
        self.min
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn contains(&self, count: usize) -> bool {
        (self.min..=self.max).contains(&count)
    }

    fn check(&self, count: usize) -> Result<(), HandError> {
        if self.contains(count) {
            Ok(())
        } else {
            Err(HandError::InvalidCount {
                count,
                min: self.min,
                max: self.max,
            })
        }
    }
}

/// A bounded multiset of cards keeping insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSet<C> {
    bounds: Bounds,
    cards: Vec<C>,
}

impl<C: RankedCard> CardSet<C> {
    pub fn new(min: i64, max: i64, cards: Vec<C>) -> Result<Self, HandError> {
        Self::with_bounds(Bounds::new(min, max)?, cards)
    }

    pub fn with_bounds(bounds: Bounds, cards: Vec<C>) -> Result<Self, HandError> {
        bounds.check(cards.len())?;
        Ok(Self { bounds, cards })
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.cards.len() >= self.bounds.max
    }

    /// Remaining room before `max` is reached.
    pub fn capacity(&self) -> usize {
        self.bounds.max - self.cards.len()
    }

    pub fn as_slice(&self) -> &[C] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, C> {
        self.cards.iter()
    }

    pub fn contains(&self, card: &C) -> bool {
        self.cards.contains(card)
    }

    pub fn get(&self, position: usize) -> Result<&C, HandError> {
        self.cards.get(position).ok_or(HandError::InvalidPosition {
            position,
            len: self.cards.len(),
        })
    }

    pub fn add(&mut self, card: C) -> Result<(), HandError> {
        if self.is_full() {
            return Err(HandError::IsFull {
                max: self.bounds.max,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Adds every card or none of them.
    pub fn add_all(&mut self, cards: &[C]) -> Result<(), HandError> {
        if cards.len() > self.capacity() {
            return Err(HandError::LimitedCapacity {
                requested: cards.len(),
                capacity: self.capacity(),
            });
        }
        self.cards.extend_from_slice(cards);
        Ok(())
    }

    /// Removes one matching instance.
    pub fn remove(&mut self, card: &C) -> Result<C, HandError> {
        if self.cards.is_empty() {
            return Err(HandError::IsEmpty);
        }
        let idx = self
            .cards
            .iter()
            .position(|c| c == card)
            .ok_or(HandError::NotFound)?;
        Ok(self.cards.remove(idx))
    }

    pub fn remove_at(&mut self, position: usize) -> Result<C, HandError> {
        if self.cards.is_empty() {
            return Err(HandError::IsEmpty);
        }
        if position >= self.cards.len() {
            return Err(HandError::InvalidPosition {
                position,
                len: self.cards.len(),
            });
        }
        Ok(self.cards.remove(position))
    }

    pub fn into_vec(self) -> Vec<C> {
        self.cards
    }
}

impl<'a, C> IntoIterator for &'a CardSet<C> {
    type Item = &'a C;
    type IntoIter = std::slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
