use serde::{Deserialize, Serialize};

use crate::{ApportionError, region::PartisanLean};

/// Largest population a single region may carry (about 1.1 trillion).
pub const MAX_REGION_POPULATION: u64 = 1 << 40;

/// A region (state) with its census population and current seat count.
///
/// Both counts are at least one and the population is at most
/// [`MAX_REGION_POPULATION`]; construction through [`Region::new`] or
/// deserialization followed by [`Region::validate`] enforces this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub(super) name: String,
    pub(super) population: u64,
    pub(super) current_seats: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(super) lean: Option<PartisanLean>,
}

impl Region {
    /// Create a new region, rejecting a zero population or seat count and oversized populations.
    pub fn new(name: impl Into<String>, population: u64, current_seats: u32, lean: Option<PartisanLean>) -> Result<Self, ApportionError> {
        let region = Self { name: name.into(), population, current_seats, lean };
        region.validate()?;
        Ok(region)
    }

    /// Check the data-model invariants on a region that bypassed `new` (e.g. deserialized).
    pub fn validate(&self) -> Result<(), ApportionError> {
        let invalid = |reason: &str| ApportionError::InvalidRegion {
            name: self.name.clone(),
            reason: reason.to_string(),
        };

        if self.name.trim().is_empty() { return Err(invalid("name must not be empty")) }
        if self.population == 0 { return Err(invalid("population must be at least 1")) }
        if self.population > MAX_REGION_POPULATION {
            return Err(invalid(&format!("population must be at most {MAX_REGION_POPULATION}")))
        }
        if self.current_seats == 0 { return Err(invalid("current seats must be at least 1")) }
        Ok(())
    }

    #[inline] pub fn name(&self) -> &str { &self.name }

    #[inline] pub fn population(&self) -> u64 { self.population }

    #[inline] pub fn current_seats(&self) -> u32 { self.current_seats }

    #[inline] pub fn lean(&self) -> Option<PartisanLean> { self.lean }
}
