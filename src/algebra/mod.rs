//! Combine capability
//!
//! A tree is parameterized by a [`Combiner`]: an associative binary operation
//! together with its identity element. The identity fills padding leaves,
//! answers disjoint sub-queries and replaces deleted elements, so it must
//! satisfy combine(identity, x) == x == combine(x, identity).
//!
//! Element and aggregate types are kept apart: leaves are built from
//! `Element`s via [`Combiner::lift`], every node stores an `Aggregate`.

mod combiner;
mod identity;

pub use combiner::{FnCombiner, Gcd, Max, Min, MinMax, Sum, WideSum};
pub use identity::{Bounded, Unsigned, Zero};

/// Associative combine operation with an identity element
pub trait Combiner {
    /// Type of the stored sequence elements
    type Element;

    /// Type held by every tree node
    type Aggregate: Clone;

    /// Neutral element: combine(identity, x) == x
    fn identity(&self) -> Self::Aggregate;

    /// Associative merge of two adjacent aggregates (left before right)
    fn combine(&self, left: &Self::Aggregate, right: &Self::Aggregate) -> Self::Aggregate;

    /// Aggregate of a single element
    fn lift(&self, element: &Self::Element) -> Self::Aggregate;

    /// Left-to-right fold of a slice of aggregates
    ///
    /// Reference semantics for what a range query returns.
    fn fold<'a, I>(&self, aggregates: I) -> Self::Aggregate
    where
        I: IntoIterator<Item = &'a Self::Aggregate>,
        Self::Aggregate: 'a,
    {
        aggregates
            .into_iter()
            .fold(self.identity(), |acc, value| self.combine(&acc, value))
    }
}
