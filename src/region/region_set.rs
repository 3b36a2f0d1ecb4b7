use std::collections::HashMap;

use crate::{ApportionError, region::Region};

/// An ordered collection of regions with unique names.
#[derive(Debug, Clone, Default)]
pub struct RegionSet {
    regions: Vec<Region>,
    index: HashMap<String, usize>,
}

impl RegionSet {
    /// Build a set from validated regions, preserving input order.
    pub fn new(regions: Vec<Region>) -> Result<Self, ApportionError> {
        let mut index = HashMap::with_capacity(regions.len());
        for (i, region) in regions.iter().enumerate() {
            region.validate()?;
            if index.insert(region.name().to_string(), i).is_some() {
                return Err(ApportionError::DuplicateRegion(region.name().to_string()))
            }
        }

        Ok(Self { regions, index })
    }

    /// Build a set from static data whose names are already unique.
    pub(super) fn from_trusted(regions: Vec<Region>) -> Self {
        let index = regions.iter().enumerate()
            .map(|(i, region)| (region.name().to_string(), i))
            .collect();
        Self { regions, index }
    }

    #[inline] pub fn len(&self) -> usize { self.regions.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    #[inline] pub fn regions(&self) -> &[Region] { &self.regions }

    /// Look up a region by exact name.
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.index.get(name).map(|&i| &self.regions[i])
    }

    /// Total population across the set, saturating at `u64::MAX`.
    pub fn total_population(&self) -> u64 {
        self.regions.iter().fold(0u64, |total, region| total.saturating_add(region.population()))
    }

    /// The least populous region, the natural Wyoming Rule divisor.
    pub fn smallest(&self) -> Option<&Region> {
        self.regions.iter().min_by_key(|region| region.population())
    }

    pub fn into_inner(self) -> Vec<Region> { self.regions }
}

impl AsRef<[Region]> for RegionSet {
    fn as_ref(&self) -> &[Region] { &self.regions }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_duplicate_names() {
        let regions = vec![
            Region::new("Ohio", 11_799_448, 15, None).unwrap(),
            Region::new("Ohio", 1, 1, None).unwrap(),
        ];
        assert_eq!(RegionSet::new(regions).unwrap_err(), ApportionError::DuplicateRegion("Ohio".into()));
    }

    #[test]
    fn lookup_and_smallest() {
        let set = RegionSet::new(vec![
            Region::new("Ohio", 11_799_448, 15, None).unwrap(),
            Region::new("Wyoming", 576_851, 1, None).unwrap(),
        ]).unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Ohio").map(Region::current_seats), Some(15));
        assert!(set.get("ohio").is_none());
        assert_eq!(set.smallest().map(Region::name), Some("Wyoming"));
        assert_eq!(set.total_population(), 12_376_299);
    }

    #[test]
    fn empty_set_is_allowed() {
        let set = RegionSet::new(Vec::new()).unwrap();
        assert!(set.is_empty());
        assert!(set.smallest().is_none());
    }
}
