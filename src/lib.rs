//! # seqex
//!
//! Chainable sequence combinators over an owned snapshot — re-iterable,
//! order-preserving, with parallel map.
//!
//! seqex wraps any finite iterable in a [`Seq`]: an eagerly materialized,
//! immutable snapshot with a fluent API of transformations and reductions.
//! Every combinator returns a *new* `Seq`, so a value is never consumed —
//! iterate it, index it, and reduce it as many times as you like.
//!
//! # Quick Start
//!
//! ```rust
//! use seqex::seq;
//!
//! let result = seq([1, 2, 3, 4])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 2)
//!     .to_vec();
//! assert_eq!(result, vec![4, 8]);
//!
//! // Snapshots are repeatable — nothing is exhausted by reading it.
//! let s = seq([1, 2, 3]);
//! assert_eq!(s.reduce(|a, b| a + b).unwrap(), 6);
//! assert_eq!(s.reduce(|a, b| a + b).unwrap(), 6);
//! ```
//!
//! # Grouping and flattening
//!
//! [`Seq::group_by`] keys groups in first-occurrence order, and
//! [`Seq::flatten`] splices nested collections exactly one level, leaving
//! strings and other atoms untouched:
//!
//! ```rust
//! use seqex::seq;
//!
//! let by_parity = seq([1, 2, 3, 4])
//!     .group_by(|x| if x % 2 == 0 { "even" } else { "odd" });
//! assert_eq!(
//!     by_parity.to_vec(),
//!     vec![("odd", vec![1, 3]), ("even", vec![2, 4])],
//! );
//!
//! assert_eq!(seq([vec![1], vec![], vec![2, 3]]).flatten().to_vec(), vec![1, 2, 3]);
//! ```
//!
//! # Parallel map
//!
//! [`Seq::par_map`] is `map` executed on a worker pool. Output order always
//! matches input order, whatever order the workers finish in. Custom
//! executors plug in through the [`WorkerPool`] trait:
//!
//! ```rust
//! use seqex::{seq, ThreadPool};
//!
//! let pool = ThreadPool::new(2).unwrap();
//! let squares = seq([1, 2, 3, 4])
//!     .par_map_with(&pool, |x| x * x)
//!     .unwrap();
//! assert_eq!(squares.to_vec(), vec![1, 4, 9, 16]);
//! ```

#![forbid(unsafe_code)]

mod error;
mod flatten;
mod pool;
mod reduce;
mod seq;
mod transform;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use error::SeqError;
pub use flatten::{Element, Flat};
pub use pool::{ThreadPool, WorkerPool};
pub use seq::Seq;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Wrap a finite iterable in a [`Seq`].
///
/// Shorthand for [`Seq::new`]; drains `source` eagerly, preserving order.
///
/// # Example
///
/// ```rust
/// use seqex::seq;
///
/// let s = seq(["a", "b", "c"]);
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.get(0).unwrap(), &"a");
/// ```
pub fn seq<T, I: IntoIterator<Item = T>>(source: I) -> Seq<T> {
    Seq::new(source)
}
