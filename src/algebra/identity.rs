//! Identity elements and numeric markers for the stock combiners

/// Additive identity
pub trait Zero {
    /// The value `z` with `z + x == x`
    fn zero() -> Self;
}

/// Extremes of an ordered type
///
/// `highest` is the identity of min, `lowest` the identity of max.
pub trait Bounded {
    /// Value no other value is smaller than
    fn lowest() -> Self;
    /// Value no other value is larger than
    fn highest() -> Self;
}

/// Integer types without a sign
///
/// Restricts [`Gcd`](super::Gcd): signed remainders make the result's sign
/// depend on operand order, and `MIN % -1` overflows.
pub trait Unsigned: Zero + Copy + PartialEq + std::ops::Rem<Output = Self> {}

macro_rules! impl_integer_identities {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                #[inline]
                fn zero() -> Self {
                    0
                }
            }

            impl Bounded for $t {
                #[inline]
                fn lowest() -> Self {
                    <$t>::MIN
                }
                #[inline]
                fn highest() -> Self {
                    <$t>::MAX
                }
            }
        )*
    };
}

macro_rules! impl_float_identities {
    ($($t:ty),* $(,)?) => {
        $(
            impl Zero for $t {
                #[inline]
                fn zero() -> Self {
                    0.0
                }
            }

            // Infinities, not MIN/MAX: they stay neutral for every finite value
            impl Bounded for $t {
                #[inline]
                fn lowest() -> Self {
                    <$t>::NEG_INFINITY
                }
                #[inline]
                fn highest() -> Self {
                    <$t>::INFINITY
                }
            }
        )*
    };
}

impl_integer_identities!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_unsigned {
    ($($t:ty),* $(,)?) => {
        $(impl Unsigned for $t {})*
    };
}

impl_unsigned!(u8, u16, u32, u64, u128, usize);
impl_float_identities!(f32, f64);
