use std::fmt;
use std::ops::{Bound, Index, RangeBounds};

use crate::error::SeqError;

// ---------------------------------------------------------------------------
// Seq
// ---------------------------------------------------------------------------

/// A chainable sequence wrapper over an owned, immutable snapshot.
///
/// Construction eagerly drains the source into a backing `Vec<T>`. Every
/// combinator reads that snapshot and returns a *new* `Seq` — the receiver is
/// never mutated and never exhausted, so a single value can be iterated,
/// indexed, and reduced any number of times with identical results.
///
/// # Example
///
/// ```rust
/// use seqex::seq;
///
/// let evens = seq([1, 2, 3, 4]).filter(|x| x % 2 == 0).map(|x| x * 10);
/// assert_eq!(evens.to_vec(), vec![20, 40]);
/// assert_eq!(evens.to_vec(), vec![20, 40]); // repeatable, not consumed
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Seq<T> {
    pub(crate) items: Vec<T>,
}

impl<T> Seq<T> {
    // ── Construction ──────────────────────────────────────────────────────

    /// Drain `source` completely, in order, into an owned snapshot.
    ///
    /// Any finite iterable is accepted. An infinite iterator will not return.
    pub fn new(source: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: source.into_iter().collect(),
        }
    }

    // ── Traversal ─────────────────────────────────────────────────────────

    /// A fresh iterator over the snapshot.
    ///
    /// Each call starts at the first element; two interleaved iterations over
    /// the same `Seq` are fully independent. There is no shared cursor.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of elements in the snapshot.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` iff the snapshot holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ── Indexing ──────────────────────────────────────────────────────────

    /// The element at position `i` (0-based).
    ///
    /// # Errors
    ///
    /// [`SeqError::OutOfRange`] when `i >= len()`. Negative positions are
    /// unrepresentable — `usize` rejects them at the type level.
    pub fn get(&self, i: usize) -> Result<&T, SeqError> {
        self.items.get(i).ok_or(SeqError::OutOfRange {
            index: i,
            len: self.items.len(),
        })
    }

    /// The sub-sequence selected by `range`, as a new `Seq`.
    ///
    /// Standard half-open semantics; bounds past the end clamp rather than
    /// error, so `seq([1, 2]).slice(0..10)` is the whole sequence.
    pub fn slice(&self, range: impl RangeBounds<usize>) -> Seq<T>
    where
        T: Clone,
    {
        let (start, stop) = self.clamp_bounds(&range);
        Seq::new(self.items[start..stop].iter().cloned())
    }

    /// Like [`slice`](Seq::slice), taking every `step`-th element.
    ///
    /// # Errors
    ///
    /// [`SeqError::ZeroStep`] when `step == 0`.
    pub fn slice_step(
        &self,
        range: impl RangeBounds<usize>,
        step: usize,
    ) -> Result<Seq<T>, SeqError>
    where
        T: Clone,
    {
        if step == 0 {
            return Err(SeqError::ZeroStep);
        }
        let (start, stop) = self.clamp_bounds(&range);
        Ok(Seq::new(
            self.items[start..stop].iter().step_by(step).cloned(),
        ))
    }

    /// Resolve a `RangeBounds` to concrete `[start, stop)` clamped to `len`.
    fn clamp_bounds(&self, range: &impl RangeBounds<usize>) -> (usize, usize) {
        let len = self.items.len();
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let stop = match range.end_bound() {
            Bound::Included(&e) => e.saturating_add(1),
            Bound::Excluded(&e) => e,
            Bound::Unbounded => len,
        };
        let start = start.min(len);
        (start, stop.clamp(start, len))
    }

    // ── Output ────────────────────────────────────────────────────────────

    /// Direct view of the backing storage. Never a truncated or masked copy —
    /// reading it repeatedly always yields the full snapshot.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Move the backing storage out, consuming the wrapper.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    /// Clone the snapshot into an ordered, mutable `Vec`.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items.clone()
    }

    /// Clone the snapshot into an ordered, fixed-length boxed slice.
    pub fn to_boxed_slice(&self) -> Box<[T]>
    where
        T: Clone,
    {
        self.items.clone().into_boxed_slice()
    }
}

// ---------------------------------------------------------------------------
// Std integration
// ---------------------------------------------------------------------------

impl<T> Index<usize> for Seq<T> {
    type Output = T;

    /// Bracket indexing with std slice semantics: panics when out of range.
    /// Use [`Seq::get`] for the fallible form.
    fn index(&self, i: usize) -> &T {
        &self.items[i]
    }
}

impl<T> From<Vec<T>> for Seq<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for Seq<T> {
    fn from_iter<I: IntoIterator<Item = T>>(source: I) -> Self {
        Seq::new(source)
    }
}

impl<T> IntoIterator for Seq<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Seq<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: fmt::Debug> fmt::Debug for Seq<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seq(")?;
        f.debug_list().entries(&self.items).finish()?;
        write!(f, ")")
    }
}

impl<T> Default for Seq<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}
