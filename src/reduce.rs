use std::collections::HashSet;
use std::hash::Hash;

use crate::error::SeqError;
use crate::seq::Seq;

// ---------------------------------------------------------------------------
// Reducers / terminal consumers
// ---------------------------------------------------------------------------
//
// These read the snapshot and return plain values. All of them are
// repeatable: calling one never affects a later call on the same `Seq`.

impl<T> Seq<T> {
    /// Left-fold with `f(accumulator, next)`, seeded by the first element.
    ///
    /// # Errors
    ///
    /// [`SeqError::Empty`] when the sequence has zero elements — there is no
    /// default seed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqex::{seq, Seq};
    ///
    /// assert_eq!(seq([1, 2]).reduce(|a, b| a + b).unwrap(), 3);
    ///
    /// let empty: Seq<i32> = seq([]);
    /// assert!(empty.reduce(|a, b| a + b).is_err());
    /// ```
    pub fn reduce(&self, f: impl FnMut(T, T) -> T) -> Result<T, SeqError>
    where
        T: Clone,
    {
        self.items
            .iter()
            .cloned()
            .reduce(f)
            .ok_or(SeqError::Empty("reduce"))
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// `true` if `pred` holds for at least one element. Short-circuits on
    /// the first match.
    pub fn any(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().any(|x| pred(x))
    }

    /// `true` if `pred` holds for every element (vacuously `true` when
    /// empty). Short-circuits on the first counterexample.
    pub fn all(&self, mut pred: impl FnMut(&T) -> bool) -> bool {
        self.items.iter().all(|x| pred(x))
    }

    /// The first element matching `pred`, or `None`. Absence is not an
    /// error.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<&T> {
        self.items.iter().find(|x| pred(x))
    }

    /// The last element.
    ///
    /// # Errors
    ///
    /// [`SeqError::Empty`] when the sequence has zero elements.
    pub fn last(&self) -> Result<&T, SeqError> {
        self.items.last().ok_or(SeqError::Empty("last"))
    }

    /// Clone the snapshot into a deduplicated, unordered set.
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Eq + Hash + Clone,
    {
        self.items.iter().cloned().collect()
    }
}
