//! Stock combiners: sum, wide sum, min, max, min+max, gcd and closure-backed
//!
//! Each numeric combiner is a zero-sized marker; the identity comes from
//! [`Zero`] or [`Bounded`], never from a hard-coded literal.

use std::fmt;
use std::marker::PhantomData;
use std::ops::Add;

use super::{Bounded, Combiner, Unsigned, Zero};

macro_rules! marker_combiner {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        pub struct $name<T>(PhantomData<fn() -> T>);

        impl<T> $name<T> {
            /// Create the combiner
            pub const fn new() -> Self {
                Self(PhantomData)
            }
        }

        impl<T> Default for $name<T> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<T> Clone for $name<T> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<T> Copy for $name<T> {}

        impl<T> fmt::Debug for $name<T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }
    };
}

marker_combiner!(
    /// Addition; identity 0. The default operation.
    ///
    /// Overflow behaves like `T`'s `+`: a panic in debug builds, wrapping in
    /// release. [`WideSum`] accumulates 64-bit input without overflow.
    Sum
);
marker_combiner!(
    /// Addition accumulated in `i128`; identity 0.
    ///
    /// Any sequence of `i64` or `u64` that fits in memory sums without overflow.
    WideSum
);
marker_combiner!(
    /// Minimum; identity is the type's highest value.
    Min
);
marker_combiner!(
    /// Maximum; identity is the type's lowest value.
    Max
);
marker_combiner!(
    /// Minimum and maximum at once; aggregates `T` into `(min, max)`.
    MinMax
);
marker_combiner!(
    /// Greatest common divisor; identity 0.
    ///
    /// Only unsigned integers implement [`Combiner`] for it:
    ///
    /// ```compile_fail
    /// use range_aggregation_tree::{Gcd, RangeAggregationTree};
    ///
    /// RangeAggregationTree::with_combiner(&[-6i64, 4], Gcd::new()).unwrap();
    /// ```
    Gcd
);

impl<T> Combiner for Sum<T>
where
    T: Zero + Clone + Add<Output = T>,
{
    type Element = T;
    type Aggregate = T;

    fn identity(&self) -> T {
        T::zero()
    }

    fn combine(&self, left: &T, right: &T) -> T {
        left.clone() + right.clone()
    }

    fn lift(&self, element: &T) -> T {
        element.clone()
    }
}

impl<T> Combiner for WideSum<T>
where
    T: Clone + Into<i128>,
{
    type Element = T;
    type Aggregate = i128;

    fn identity(&self) -> i128 {
        0
    }

    fn combine(&self, left: &i128, right: &i128) -> i128 {
        left + right
    }

    fn lift(&self, element: &T) -> i128 {
        element.clone().into()
    }
}

impl<T> Combiner for Min<T>
where
    T: Bounded + Clone + PartialOrd,
{
    type Element = T;
    type Aggregate = T;

    fn identity(&self) -> T {
        T::highest()
    }

    // Ties keep the left operand
    fn combine(&self, left: &T, right: &T) -> T {
        if right < left {
            right.clone()
        } else {
            left.clone()
        }
    }

    fn lift(&self, element: &T) -> T {
        element.clone()
    }
}

impl<T> Combiner for Max<T>
where
    T: Bounded + Clone + PartialOrd,
{
    type Element = T;
    type Aggregate = T;

    fn identity(&self) -> T {
        T::lowest()
    }

    fn combine(&self, left: &T, right: &T) -> T {
        if right > left {
            right.clone()
        } else {
            left.clone()
        }
    }

    fn lift(&self, element: &T) -> T {
        element.clone()
    }
}

impl<T> Combiner for MinMax<T>
where
    T: Bounded + Clone + PartialOrd,
{
    type Element = T;
    type Aggregate = (T, T);

    fn identity(&self) -> (T, T) {
        (T::highest(), T::lowest())
    }

    fn combine(&self, left: &(T, T), right: &(T, T)) -> (T, T) {
        let min = Min::<T>::new().combine(&left.0, &right.0);
        let max = Max::<T>::new().combine(&left.1, &right.1);
        (min, max)
    }

    fn lift(&self, element: &T) -> (T, T) {
        (element.clone(), element.clone())
    }
}

impl<T: Unsigned> Combiner for Gcd<T> {
    type Element = T;
    type Aggregate = T;

    fn identity(&self) -> T {
        T::zero()
    }

    fn combine(&self, left: &T, right: &T) -> T {
        let (mut a, mut b) = (*left, *right);
        while b != T::zero() {
            let r = a % b;
            a = b;
            b = r;
        }
        a
    }

    fn lift(&self, element: &T) -> T {
        *element
    }
}

/// Combiner backed by a closure and an explicit identity
///
/// The caller guarantees `op` is associative and `identity` is neutral for it.
#[derive(Clone)]
pub struct FnCombiner<T, F> {
    identity: T,
    op: F,
}

impl<T, F> FnCombiner<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    /// Wrap `op` with its identity element
    pub fn new(identity: T, op: F) -> Self {
        Self { identity, op }
    }
}

impl<T, F> Combiner for FnCombiner<T, F>
where
    T: Clone,
    F: Fn(&T, &T) -> T,
{
    type Element = T;
    type Aggregate = T;

    fn identity(&self) -> T {
        self.identity.clone()
    }

    fn combine(&self, left: &T, right: &T) -> T {
        (self.op)(left, right)
    }

    fn lift(&self, element: &T) -> T {
        element.clone()
    }
}

impl<T: fmt::Debug, F> fmt::Debug for FnCombiner<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCombiner")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}
