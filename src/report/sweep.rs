use serde::Serialize;

use crate::{
    ApportionError, Params,
    apportion::{Divisor, national_seats, round_div},
};

/// Most divisors a single sweep may evaluate.
pub const MAX_SWEEP_POINTS: u64 = 10_000;

/// National figures for a single divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepPoint {
    pub divisor: u64,
    pub house_seats: u64,
    /// Actual people per seat after rounding; `None` if the House would be empty.
    pub average_district: Option<u64>,
    pub electoral_votes: u64,
    pub majority_threshold: u64,
}

impl SweepPoint {
    pub fn at(divisor: Divisor, params: &Params) -> Self {
        let house_seats = national_seats(params.national_population, divisor);
        let electoral_votes = house_seats.saturating_add(params.fixed_electoral_votes());

        Self {
            divisor: divisor.get(),
            house_seats,
            average_district: std::num::NonZeroU64::new(house_seats)
                .map(|seats| round_div(params.national_population, seats)),
            electoral_votes,
            majority_threshold: electoral_votes / 2 + 1,
        }
    }
}

/// Evaluate every divisor in `start..=end` stepping by `step`, at most [`MAX_SWEEP_POINTS`] of them.
pub fn sweep(params: &Params, start: i64, end: i64, step: i64) -> Result<Vec<SweepPoint>, ApportionError> {
    let first = Divisor::new(start)?;
    if step <= 0 { return Err(ApportionError::InvalidDivisor(step)) }
    if end < start { return Err(ApportionError::InvalidSweep { start, end }) }

    // `start` is positive, so `end - start` cannot overflow.
    let count = ((end - start) / step) as u64 + 1;
    if count > MAX_SWEEP_POINTS {
        return Err(ApportionError::SweepTooLarge { points: count, max: MAX_SWEEP_POINTS })
    }

    let mut points = Vec::with_capacity(count as usize);
    let mut divisor = first.get();
    while divisor <= end as u64 {
        // `divisor` starts positive and only grows, so it stays a valid divisor.
        points.push(SweepPoint::at(Divisor::try_from(divisor)?, params));
        match divisor.checked_add(step as u64) {
            Some(next) => divisor = next,
            None => break,
        }
    }

    tracing::debug!("[sweep] {} divisors from {} to {} step {}", points.len(), start, end, step);
    Ok(points)
}
