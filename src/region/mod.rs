mod lean;
mod reference;
mod region;
mod region_set;

pub use lean::PartisanLean;
pub use reference::{reference_regions, CURRENT_HOUSE_SIZE, NATIONAL_POPULATION, WYOMING_POPULATION};
pub use region::{Region, MAX_REGION_POPULATION};
pub use region_set::RegionSet;
