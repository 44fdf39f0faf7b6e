use std::collections::HashSet;
use std::hash::Hash;

use indexmap::IndexMap;

use crate::seq::Seq;

// ---------------------------------------------------------------------------
// Transformation combinators
// ---------------------------------------------------------------------------
//
// Each method reads the receiver's snapshot and returns a freshly allocated
// `Seq` — the receiver is untouched and stays usable. A panic in a caller
// supplied closure propagates out of the call; no partial result is built.

impl<T: Clone> Seq<T> {
    /// Apply `f` to every element, in order, eagerly.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqex::seq;
    ///
    /// assert_eq!(seq([1, 2]).map(|x| x * 2).to_vec(), vec![2, 4]);
    /// ```
    pub fn map<S>(&self, f: impl FnMut(T) -> S) -> Seq<S> {
        Seq::new(self.items.iter().cloned().map(f))
    }

    /// Fallible [`map`](Seq::map): the first `Err` aborts the whole
    /// operation and is returned unchanged — no partial result.
    pub fn try_map<S, E>(
        &self,
        f: impl FnMut(T) -> Result<S, E>,
    ) -> Result<Seq<S>, E> {
        self.items
            .iter()
            .cloned()
            .map(f)
            .collect::<Result<Vec<_>, E>>()
            .map(Seq::from)
    }

    /// Keep the elements for which `pred` returns `true`, in source order.
    pub fn filter(&self, mut pred: impl FnMut(&T) -> bool) -> Seq<T> {
        Seq::new(self.items.iter().filter(|x| pred(x)).cloned())
    }

    /// Partition elements into `(key, group)` pairs.
    ///
    /// Group order is the order of *first occurrence* of each key in the
    /// source; within a group, elements keep source order. Backed by an
    /// insertion-ordered map, never an unordered hash map.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqex::seq;
    ///
    /// let grouped = seq([1, 2, 3, 4])
    ///     .group_by(|x| if x % 2 == 0 { "even" } else { "odd" });
    /// // 1 is odd and comes first, so "odd" leads
    /// assert_eq!(
    ///     grouped.to_vec(),
    ///     vec![("odd", vec![1, 3]), ("even", vec![2, 4])],
    /// );
    /// ```
    pub fn group_by<K>(&self, mut key: impl FnMut(&T) -> K) -> Seq<(K, Vec<T>)>
    where
        K: Eq + Hash,
    {
        let mut groups: IndexMap<K, Vec<T>> = IndexMap::new();
        for item in &self.items {
            groups.entry(key(item)).or_default().push(item.clone());
        }
        Seq::new(groups)
    }

    /// Elements in first-occurrence order with duplicates removed.
    pub fn unique(&self) -> Seq<T>
    where
        T: Eq + Hash,
    {
        let mut seen = HashSet::new();
        Seq::new(
            self.items
                .iter()
                .filter(|x| seen.insert((*x).clone()))
                .cloned(),
        )
    }

    /// Like [`unique`](Seq::unique), but duplicate detection uses
    /// `key(element)` instead of element equality. The first element seen
    /// for each key wins.
    pub fn unique_by<K>(&self, mut key: impl FnMut(&T) -> K) -> Seq<T>
    where
        K: Eq + Hash,
    {
        let mut seen = HashSet::new();
        Seq::new(self.items.iter().filter(|x| seen.insert(key(x))).cloned())
    }

    /// `(index, element)` pairs, 0-based, in order.
    pub fn enumerate(&self) -> Seq<(usize, T)> {
        Seq::new(self.items.iter().cloned().enumerate())
    }

    /// Pair elements positionally with `other`'s, truncating to the shorter
    /// of the two. Neither operand is consumed; zipping twice yields the
    /// same pairs both times.
    pub fn zip<U: Clone>(&self, other: &Seq<U>) -> Seq<(T, U)> {
        Seq::new(
            self.items
                .iter()
                .cloned()
                .zip(other.items.iter().cloned()),
        )
    }

    /// Elements in reverse order.
    pub fn rev(&self) -> Seq<T> {
        Seq::new(self.items.iter().rev().cloned())
    }

    /// The first `n` elements, fewer if the sequence is shorter.
    pub fn head(&self, n: usize) -> Seq<T> {
        Seq::new(self.items.iter().take(n).cloned())
    }

    /// Alias for [`head`](Seq::head).
    pub fn take(&self, n: usize) -> Seq<T> {
        self.head(n)
    }

    /// Everything from position `n - 1` onward.
    ///
    /// Note the 1-based offset: `tail(1)` is the whole sequence and
    /// `tail(2)` drops one element. This is deliberately asymmetric with
    /// [`head`](Seq::head)'s 0-based count. `tail(0)` behaves like `tail(1)`.
    pub fn tail(&self, n: usize) -> Seq<T> {
        Seq::new(self.items.iter().skip(n.saturating_sub(1)).cloned())
    }
}
