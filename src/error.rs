use thiserror::Error;

/// Errors produced by the apportionment calculator and region validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApportionError {
    #[error("invalid divisor {0}: must be a positive integer")]
    InvalidDivisor(i64),

    #[error("region '{region}' apportions to zero seats; people per seat is undefined")]
    ZeroSeatDivision { region: String },

    #[error("region set is empty")]
    EmptyRegionSet,

    #[error("invalid region '{name}': {reason}")]
    InvalidRegion { name: String, reason: String },

    #[error("duplicate region name '{0}'")]
    DuplicateRegion(String),

    #[error("invalid sweep range: end {end} is below start {start}")]
    InvalidSweep { start: i64, end: i64 },

    #[error("sweep of {points} divisors exceeds the limit of {max}")]
    SweepTooLarge { points: u64, max: u64 },

    #[error("combined population of {regions} regions is too large")]
    PopulationOverflow { regions: usize },

    #[error("unknown partisan lean '{0}', expected one of: D, R, S")]
    UnknownLean(String),
}
