#![doc = "Wyoming Rule apportionment public API"]
mod apportion;
mod error;
mod params;
mod region;
mod report;

pub mod io;

#[doc(inline)]
pub use error::ApportionError;

#[doc(inline)]
pub use params::Params;

#[doc(inline)]
pub use region::{
    reference_regions, PartisanLean, Region, RegionSet, MAX_REGION_POPULATION,
    CURRENT_HOUSE_SIZE, NATIONAL_POPULATION, WYOMING_POPULATION,
};

#[doc(inline)]
pub use apportion::{
    apportion_region, apportioned_seats, divisor_for_house_size, format_percent, national_seats,
    Apportionment, ApportionmentTotals, Divisor, RegionApportionment,
};

#[doc(inline)]
pub use report::{
    format_count, format_thousands, render_comparison, render_summary, render_sweep, sweep,
    Summary, SweepPoint, MAX_SWEEP_POINTS,
};
