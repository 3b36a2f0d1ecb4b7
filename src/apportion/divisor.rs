use std::{fmt, num::NonZeroU64};

use serde::{Deserialize, Serialize};

use crate::ApportionError;

/// Reference population per seat. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u64")]
pub struct Divisor(NonZeroU64);

impl Divisor {
    /// Validate a raw (possibly user-entered) divisor.
    pub fn new(value: i64) -> Result<Self, ApportionError> {
        u64::try_from(value).ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or(ApportionError::InvalidDivisor(value))
    }

    #[inline] pub fn get(&self) -> u64 { self.0.get() }
}

impl TryFrom<i64> for Divisor {
    type Error = ApportionError;

    fn try_from(value: i64) -> Result<Self, Self::Error> { Self::new(value) }
}

impl TryFrom<u64> for Divisor {
    type Error = ApportionError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        NonZeroU64::new(value).map(Self).ok_or(ApportionError::InvalidDivisor(0))
    }
}

impl From<Divisor> for u64 {
    fn from(divisor: Divisor) -> Self { divisor.get() }
}

impl fmt::Display for Divisor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Integer division rounding half away from zero (both operands are non-negative).
#[inline]
pub(crate) fn round_div(numerator: u64, denominator: NonZeroU64) -> u64 {
    let d = denominator.get() as u128;
    ((2 * numerator as u128 + d) / (2 * d)) as u64
}

/// `to - from` as a signed count, clamped to the `i64` range.
#[inline]
pub(crate) fn signed_difference(to: u64, from: u64) -> i64 {
    (to as i128 - from as i128).clamp(i64::MIN as i128, i64::MAX as i128) as i64
}

/// Seats a region of `population` receives: `round(population / divisor)`, `.5` rounding up.
#[inline]
pub fn apportioned_seats(population: u64, divisor: Divisor) -> u64 {
    round_div(population, divisor.0)
}

/// House size implied by a national population under `divisor`.
#[inline]
pub fn national_seats(national_population: u64, divisor: Divisor) -> u64 {
    apportioned_seats(national_population, divisor)
}

/// Average district size of a House with `seats` members, usable as a divisor.
pub fn divisor_for_house_size(national_population: u64, seats: u32) -> Result<Divisor, ApportionError> {
    let seats = NonZeroU64::new(seats as u64).ok_or(ApportionError::InvalidDivisor(0))?;
    Divisor::try_from(round_div(national_population, seats))
}
