//! 2020 census reference data.

use crate::region::{PartisanLean, Region, RegionSet};

/// Resident population of the United States, 2020 census.
pub const NATIONAL_POPULATION: u64 = 331_449_281;

/// Population of Wyoming, the least populous state, 2020 census.
pub const WYOMING_POPULATION: u64 = 576_851;

/// Size of the House of Representatives since 1913.
pub const CURRENT_HOUSE_SIZE: u32 = 435;

// (name, population, current seats, lean)
const REFERENCE_DATA: [(&str, u64, u32, PartisanLean); 14] = [
    ("California", 39_538_223, 52, PartisanLean::Democratic),
    ("Texas", 29_145_505, 38, PartisanLean::Republican),
    ("Florida", 21_538_187, 28, PartisanLean::Republican),
    ("New York", 20_201_249, 26, PartisanLean::Democratic),
    ("Pennsylvania", 13_002_700, 17, PartisanLean::Swing),
    ("Illinois", 12_812_508, 17, PartisanLean::Democratic),
    ("Ohio", 11_799_448, 15, PartisanLean::Republican),
    ("Georgia", 10_711_908, 14, PartisanLean::Swing),
    ("North Carolina", 10_439_388, 14, PartisanLean::Swing),
    ("Michigan", 10_077_331, 13, PartisanLean::Swing),
    ("Arizona", 7_151_502, 9, PartisanLean::Swing),
    ("Wisconsin", 5_893_718, 8, PartisanLean::Swing),
    ("Nevada", 3_104_614, 4, PartisanLean::Swing),
    ("Wyoming", 576_851, 1, PartisanLean::Republican),
];

/// The reference regions in display order (largest states first, Wyoming last).
pub fn reference_regions() -> RegionSet {
    let regions = REFERENCE_DATA.iter()
        .map(|&(name, population, seats, lean)| Region { name: name.to_string(), population, current_seats: seats, lean: Some(lean) })
        .collect();

    RegionSet::from_trusted(regions)
}
