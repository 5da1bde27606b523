//! Numeric-limits descriptor: fixed facts about a number type's range and
//! representation.

use crate::WholeNumber;

/// How a type rounds values it cannot represent exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundStyle {
    Indeterminate,
    TowardZero,
    ToNearest,
    TowardInfinity,
    TowardNegInfinity,
}

/// Fixed answers about a numeric type.
///
/// Quantities a type does not have (a maximum for an unbounded type, an
/// infinity for an integer type) are `None`.
pub trait NumericLimits: Sized {
    const IS_SPECIALIZED: bool = true;
    /// Radix digits representable without change; zero when unbounded.
    const DIGITS: u32;
    /// Decimal digits representable without change; zero when unbounded.
    const DIGITS10: u32;
    const IS_SIGNED: bool;
    const IS_INTEGER: bool;
    const IS_EXACT: bool;
    const RADIX: u32 = 2;

    const MIN_EXPONENT: i32 = 0;
    const MIN_EXPONENT10: i32 = 0;
    const MAX_EXPONENT: i32 = 0;
    const MAX_EXPONENT10: i32 = 0;

    const HAS_INFINITY: bool = false;
    const HAS_QUIET_NAN: bool = false;
    const HAS_SIGNALING_NAN: bool = false;
    const HAS_DENORM: bool = false;
    const HAS_DENORM_LOSS: bool = false;

    const IS_IEC559: bool = false;
    const IS_BOUNDED: bool;
    const IS_MODULO: bool;

    const TRAPS: bool = false;
    const TINYNESS_BEFORE: bool = false;
    const ROUND_STYLE: RoundStyle = RoundStyle::TowardZero;

    fn min_value() -> Self;

    fn max_value() -> Option<Self>;

    /// Difference between one and the next representable value above it,
    /// zero for integer types.
    fn epsilon() -> Self;

    /// Largest rounding error, zero for integer types.
    fn round_error() -> Self;

    fn infinity() -> Option<Self> {
        None
    }

    fn quiet_nan() -> Option<Self> {
        None
    }

    fn signaling_nan() -> Option<Self> {
        None
    }

    fn denorm_min() -> Option<Self> {
        None
    }
}

impl NumericLimits for WholeNumber {
    const DIGITS: u32 = 0;
    const DIGITS10: u32 = 0;
    const IS_SIGNED: bool = false;
    const IS_INTEGER: bool = true;
    const IS_EXACT: bool = true;
    const IS_BOUNDED: bool = false;
    const IS_MODULO: bool = false;

    fn min_value() -> Self {
        WholeNumber::new()
    }

    fn max_value() -> Option<Self> {
        None
    }

    fn epsilon() -> Self {
        WholeNumber::new()
    }

    fn round_error() -> Self {
        WholeNumber::new()
    }
}

macro_rules! impl_limits_uint {
    ($($t:ty),*) => {
        $(
            impl NumericLimits for $t {
                const DIGITS: u32 = <$t>::BITS;
                // floor(BITS * log10(2)); 643/2136 approximates log10(2) from below
                const DIGITS10: u32 = <$t>::BITS * 643 / 2136;
                const IS_SIGNED: bool = false;
                const IS_INTEGER: bool = true;
                const IS_EXACT: bool = true;
                const IS_BOUNDED: bool = true;
                const IS_MODULO: bool = true;

                fn min_value() -> Self {
                    <$t>::MIN
                }

                fn max_value() -> Option<Self> {
                    Some(<$t>::MAX)
                }

                fn epsilon() -> Self {
                    0
                }

                fn round_error() -> Self {
                    0
                }
            }
        )*
    };
}

impl_limits_uint!(u8, u16, u32, u64, u128, usize);
