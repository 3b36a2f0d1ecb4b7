//! The apportionment calculator.
//!
//! Every function here is pure: the divisor is always passed in, inputs are
//! borrowed immutably, and identical inputs give identical outputs.

mod apportionment;
mod divisor;
mod totals;

pub use apportionment::{apportion_region, format_percent, Apportionment, RegionApportionment};
pub use divisor::{apportioned_seats, divisor_for_house_size, national_seats, Divisor};
pub use totals::ApportionmentTotals;

pub(crate) use divisor::{round_div, signed_difference};
