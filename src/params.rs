use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::region::{CURRENT_HOUSE_SIZE, NATIONAL_POPULATION, WYOMING_POPULATION};

/// Fixed constants of the apportionment comparison.
///
/// Every field has a default matching the 2020 census and the current
/// electoral college, so a JSON override only needs the fields it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    /// Population used for the national House size.
    pub national_population: u64,
    /// Current (fixed) House size.
    pub house_size: u32,
    /// Divisor used when none is given explicitly.
    pub default_divisor: u64,
    /// Electoral votes each region receives on top of its seats (its senators).
    pub region_bonus: u32,
    /// Electoral votes of the upper chamber as a whole.
    pub upper_chamber_votes: u32,
    /// Electoral votes not tied to any apportioned region (the District of Columbia).
    pub at_large_votes: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            national_population: NATIONAL_POPULATION,
            house_size: CURRENT_HOUSE_SIZE,
            default_divisor: WYOMING_POPULATION,
            region_bonus: 2,
            upper_chamber_votes: 100,
            at_large_votes: 3,
        }
    }
}

impl Params {
    /// Read parameter overrides from a JSON object; missing fields take defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .with_context(|| format!("[params] Failed to open params file: {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("[params] Failed to parse params from {}", path.display()))
    }

    /// Electoral votes that do not depend on the House size.
    #[inline]
    pub fn fixed_electoral_votes(&self) -> u64 {
        self.upper_chamber_votes as u64 + self.at_large_votes as u64
    }
}
