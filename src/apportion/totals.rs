use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    ApportionError, Params,
    apportion::{Divisor, RegionApportionment, national_seats, signed_difference},
    region::PartisanLean,
};

/// Aggregates over a set of apportioned regions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApportionmentTotals {
    pub region_count: usize,
    pub total_population: u64,
    pub total_current_seats: u64,
    pub total_apportioned_seats: u64,
    pub total_seat_change: i64,
    /// Sum of positive seat changes per lean; regions without a lean are left out.
    pub gains_by_lean: BTreeMap<PartisanLean, u64>,
    /// National House size under the divisor, plus the fixed electoral votes.
    pub total_electoral_votes: u64,
    pub majority_threshold: u64,
    pub current_electoral_votes: u64,
    pub current_majority_threshold: u64,
}

#[inline]
fn majority(total: u64) -> u64 { total / 2 + 1 }

fn saturating_sum(values: impl Iterator<Item = u64>) -> u64 {
    values.fold(0, u64::saturating_add)
}

impl ApportionmentTotals {
    /// Sum the rows. An empty slice gives zero region totals; the national
    /// electoral figures depend only on `params` and `divisor`.
    pub fn from_rows(rows: &[RegionApportionment], divisor: Divisor, params: &Params) -> Self {
        let mut gains_by_lean = BTreeMap::new();
        for row in rows {
            if let Some(lean) = row.region.lean() {
                let gain = gains_by_lean.entry(lean).or_insert(0u64);
                *gain = gain.saturating_add(row.seat_change.max(0) as u64);
            }
        }

        let total_current_seats = saturating_sum(rows.iter().map(|row| row.region.current_seats() as u64));
        let total_apportioned_seats = saturating_sum(rows.iter().map(|row| row.apportioned_seats));
        let total_electoral_votes = national_seats(params.national_population, divisor)
            .saturating_add(params.fixed_electoral_votes());
        let current_electoral_votes = params.house_size as u64 + params.fixed_electoral_votes();

        Self {
            region_count: rows.len(),
            total_population: saturating_sum(rows.iter().map(|row| row.region.population())),
            total_current_seats,
            total_apportioned_seats,
            total_seat_change: signed_difference(total_apportioned_seats, total_current_seats),
            gains_by_lean,
            total_electoral_votes,
            majority_threshold: majority(total_electoral_votes),
            current_electoral_votes,
            current_majority_threshold: majority(current_electoral_votes),
        }
    }

    /// Seats gained by regions with the given lean (zero if none carry it).
    pub fn gains(&self, lean: PartisanLean) -> u64 {
        self.gains_by_lean.get(&lean).copied().unwrap_or(0)
    }

    /// Average population per apportioned seat across the set.
    pub fn mean_people_per_seat(&self) -> Result<f64, ApportionError> {
        if self.region_count == 0 { return Err(ApportionError::EmptyRegionSet) }
        if self.total_apportioned_seats == 0 {
            return Err(ApportionError::ZeroSeatDivision { region: "all regions".to_string() })
        }
        Ok(self.total_population as f64 / self.total_apportioned_seats as f64)
    }
}
