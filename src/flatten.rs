use std::collections::HashMap;

use crate::seq::Seq;

// ---------------------------------------------------------------------------
// Element classification
// ---------------------------------------------------------------------------

/// What [`Seq::flatten`] does with one element: splice a nested collection's
/// contents into the output, or keep the element as-is.
pub enum Flat<T> {
    /// An ordered collection — its elements are appended individually.
    /// An empty collection contributes nothing.
    Splice(Vec<T>),
    /// An atom — appended unchanged.
    Keep(T),
}

/// Classifies a value for one-level flattening.
///
/// The built-in implementations encode the dispatch policy:
///
/// 1. Ordered collections (`Vec`, arrays, nested [`Seq`]) splice.
/// 2. Everything else — numbers, `bool`, `char`, **strings**, `Option`,
///    pairs, maps — is an atom and passes through unchanged. Strings are
///    atoms even though they are indexable; flatten never breaks a string
///    into characters.
///
/// Flattening descends exactly one level. A `Vec<Vec<T>>` element splices
/// into `Vec<T>` elements, which a second `flatten()` call would splice
/// again.
///
/// Element types mixing several shapes (a string *or* a list *or* nothing)
/// are expressed as an enum implementing this trait:
///
/// ```rust
/// use seqex::{seq, Element, Flat};
///
/// #[derive(Clone, Debug, PartialEq)]
/// enum Value {
///     Text(&'static str),
///     List(Vec<Value>),
///     Int(i64),
///     Null,
/// }
///
/// impl Element for Value {
///     type Out = Value;
///     fn classify(self) -> Flat<Value> {
///         match self {
///             Value::List(vs) => Flat::Splice(vs),
///             other => Flat::Keep(other),
///         }
///     }
/// }
///
/// let flat = seq([
///     Value::Text("first"),
///     Value::List(vec![Value::Int(2)]),
///     Value::Null,
/// ])
/// .flatten();
/// assert_eq!(
///     flat.to_vec(),
///     vec![Value::Text("first"), Value::Int(2), Value::Null],
/// );
/// ```
pub trait Element {
    /// The element type of the flattened sequence.
    type Out;

    /// Classify `self` as a collection to splice or an atom to keep.
    fn classify(self) -> Flat<Self::Out>;
}

impl<T: Element + Clone> Seq<T> {
    /// A sequence one nesting level shallower.
    ///
    /// Nested collections are spliced element-by-element, empties vanish,
    /// atoms (including strings) pass through untouched. See [`Element`]
    /// for the exact dispatch policy.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqex::seq;
    ///
    /// assert_eq!(seq([vec![1, 2], vec![], vec![3]]).flatten().to_vec(), vec![1, 2, 3]);
    /// assert_eq!(seq(["abcd"]).flatten().to_vec(), vec!["abcd"]);
    /// ```
    pub fn flatten(&self) -> Seq<T::Out> {
        let mut out = Vec::with_capacity(self.items.len());
        for item in self.items.iter().cloned() {
            match item.classify() {
                Flat::Splice(vs) => out.extend(vs),
                Flat::Keep(v) => out.push(v),
            }
        }
        Seq::from(out)
    }
}

// ---------------------------------------------------------------------------
// Collections splice
// ---------------------------------------------------------------------------

impl<T> Element for Vec<T> {
    type Out = T;
    fn classify(self) -> Flat<T> {
        Flat::Splice(self)
    }
}

impl<T, const N: usize> Element for [T; N] {
    type Out = T;
    fn classify(self) -> Flat<T> {
        Flat::Splice(self.into_iter().collect())
    }
}

impl<T> Element for Seq<T> {
    type Out = T;
    fn classify(self) -> Flat<T> {
        Flat::Splice(self.into_vec())
    }
}

// ---------------------------------------------------------------------------
// Atoms keep
// ---------------------------------------------------------------------------

macro_rules! atom {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                type Out = $t;
                fn classify(self) -> Flat<$t> {
                    Flat::Keep(self)
                }
            }
        )*
    };
}

atom!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    bool, char, String,
);

impl<'a> Element for &'a str {
    type Out = &'a str;
    fn classify(self) -> Flat<&'a str> {
        Flat::Keep(self)
    }
}

// Absence values pass through; flatten is not an Option-filter.
impl<T> Element for Option<T> {
    type Out = Option<T>;
    fn classify(self) -> Flat<Option<T>> {
        Flat::Keep(self)
    }
}

// Pairs and maps are associative shapes, not ordered collections.
impl<A, B> Element for (A, B) {
    type Out = (A, B);
    fn classify(self) -> Flat<(A, B)> {
        Flat::Keep(self)
    }
}

impl<K, V> Element for HashMap<K, V> {
    type Out = HashMap<K, V>;
    fn classify(self) -> Flat<HashMap<K, V>> {
        Flat::Keep(self)
    }
}
