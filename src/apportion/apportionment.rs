use std::num::NonZeroU64;

use serde::Serialize;

use crate::{
    ApportionError, Params,
    apportion::{ApportionmentTotals, Divisor, apportioned_seats, round_div, signed_difference},
    region::Region,
};

/// Derived seat and electoral figures for one region under a divisor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionApportionment {
    #[serde(flatten)]
    pub region: Region,
    pub apportioned_seats: u64,
    pub seat_change: i64,
    pub percent_change: f64,
    /// `None` when the region apportions to zero seats.
    pub people_per_seat: Option<u64>,
    pub current_electoral_votes: u64,
    pub apportioned_electoral_votes: u64,
    pub electoral_change: i64,
}

impl RegionApportionment {
    /// People per apportioned seat, or `ZeroSeatDivision` if the region has no seats.
    pub fn try_people_per_seat(&self) -> Result<u64, ApportionError> {
        self.people_per_seat.ok_or_else(|| ApportionError::ZeroSeatDivision {
            region: self.region.name().to_string(),
        })
    }

    /// Percent change with one decimal place and an explicit sign on gains, e.g. `+81.6%`.
    pub fn percent_change_display(&self) -> String {
        format_percent(self.percent_change, 1)
    }
}

/// Format a signed percentage with `decimals` places, prefixing gains with `+`.
pub fn format_percent(value: f64, decimals: usize) -> String {
    let text = format!("{:.*}", decimals, value.abs());
    // Values that round to zero print unsigned.
    if text.bytes().all(|b| b == b'0' || b == b'.') {
        format!("{text}%")
    } else if value > 0.0 {
        format!("+{text}%")
    } else {
        format!("-{text}%")
    }
}

/// Apportion a single region. Never fails: a zero-seat result leaves `people_per_seat` unset.
pub fn apportion_region(region: &Region, divisor: Divisor, params: &Params) -> RegionApportionment {
    let seats = apportioned_seats(region.population(), divisor);
    let current = region.current_seats() as u64;
    let seat_change = signed_difference(seats, current);
    let bonus = params.region_bonus as u64;

    RegionApportionment {
        region: region.clone(),
        apportioned_seats: seats,
        seat_change,
        percent_change: seat_change as f64 / current as f64 * 100.0,
        people_per_seat: NonZeroU64::new(seats).map(|seats| round_div(region.population(), seats)),
        current_electoral_votes: current + bonus,
        apportioned_electoral_votes: seats.saturating_add(bonus),
        electoral_change: seat_change,
    }
}

/// The full comparison: one row per input region (in input order) plus totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Apportionment {
    divisor: Divisor,
    rows: Vec<RegionApportionment>,
    totals: ApportionmentTotals,
}

impl Apportionment {
    /// Validate `divisor` and every region, then apportion. Fails before computing anything on bad input.
    pub fn compute(regions: &[Region], divisor: i64, params: &Params) -> Result<Self, ApportionError> {
        let divisor = Divisor::new(divisor)?;
        let mut total_population = 0u64;
        for region in regions {
            region.validate()?;
            total_population = total_population.checked_add(region.population())
                .filter(|&total| total <= i64::MAX as u64)
                .ok_or(ApportionError::PopulationOverflow { regions: regions.len() })?;
        }
        Ok(Self::with_divisor(regions, divisor, params))
    }

    /// Apportion every region under an already-validated divisor.
    ///
    /// The regions are expected to have passed [`Region::validate`]; counts
    /// outside that range saturate instead of overflowing.
    pub fn with_divisor(regions: &[Region], divisor: Divisor, params: &Params) -> Self {
        let rows: Vec<RegionApportionment> = regions.iter()
            .map(|region| apportion_region(region, divisor, params))
            .collect();
        let totals = ApportionmentTotals::from_rows(&rows, divisor, params);

        tracing::debug!(
            "[apportion] divisor={} regions={} seats {} -> {}",
            divisor, rows.len(), totals.total_current_seats, totals.total_apportioned_seats,
        );

        Self { divisor, rows, totals }
    }

    #[inline] pub fn divisor(&self) -> Divisor { self.divisor }

    /// Rows in input order.
    #[inline] pub fn rows(&self) -> &[RegionApportionment] { &self.rows }

    #[inline] pub fn totals(&self) -> &ApportionmentTotals { &self.totals }

    /// Rows in display order: largest absolute seat change first, ties by region name.
    pub fn sorted_by_change(&self) -> Vec<&RegionApportionment> {
        let mut rows: Vec<&RegionApportionment> = self.rows.iter().collect();
        rows.sort_by(|a, b| {
            b.seat_change.unsigned_abs().cmp(&a.seat_change.unsigned_abs())
                .then_with(|| a.region.name().cmp(b.region.name()))
        });
        rows
    }

    /// Look up the row of a region by name.
    pub fn row(&self, name: &str) -> Option<&RegionApportionment> {
        self.rows.iter().find(|row| row.region.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::region::PartisanLean;

    fn region(name: &str, population: u64, seats: u32) -> Region {
        Region::new(name, population, seats, None).unwrap()
    }

    #[test]
    fn region_row_fields() {
        let params = Params::default();
        let divisor = Divisor::new(576_851).unwrap();
        let row = apportion_region(&region("Texas", 39_538_223, 38), divisor, &params);

        assert_eq!(row.apportioned_seats, 69);
        assert_eq!(row.seat_change, 31);
        assert_eq!(row.percent_change_display(), "+81.6%");
        assert_eq!(row.people_per_seat, Some(573_018));
        assert_eq!(row.current_electoral_votes, 40);
        assert_eq!(row.apportioned_electoral_votes, 71);
        assert_eq!(row.electoral_change, 31);
    }

    #[test]
    fn zero_seat_region_has_sentinel() {
        let params = Params::default();
        let divisor = Divisor::new(1_000_000).unwrap();
        let row = apportion_region(&region("Tiny", 400_000, 1), divisor, &params);

        assert_eq!(row.apportioned_seats, 0);
        assert_eq!(row.seat_change, -1);
        assert_eq!(row.percent_change_display(), "-100.0%");
        assert_eq!(row.people_per_seat, None);
        assert_eq!(row.try_people_per_seat(), Err(ApportionError::ZeroSeatDivision { region: "Tiny".into() }));
    }

    #[test]
    fn invalid_divisor_fails_fast() {
        let regions = [region("Wyoming", 576_851, 1)];
        assert_eq!(Apportionment::compute(&regions, 0, &Params::default()), Err(ApportionError::InvalidDivisor(0)));
        assert_eq!(Apportionment::compute(&regions, -1, &Params::default()), Err(ApportionError::InvalidDivisor(-1)));
    }

    #[test]
    fn compute_rejects_unvalidated_regions() {
        let no_seats: Region = serde_json::from_str(r#"{"name":"Empty","population":1000,"current_seats":0}"#).unwrap();
        assert!(matches!(
            Apportionment::compute(&[no_seats], 100, &Params::default()),
            Err(ApportionError::InvalidRegion { name, .. }) if name == "Empty"
        ));

        let huge: Region = serde_json::from_str(r#"{"name":"Huge","population":18446744073709551615,"current_seats":1}"#).unwrap();
        assert!(matches!(
            Apportionment::compute(&[huge], 1, &Params::default()),
            Err(ApportionError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn oversized_counts_saturate() {
        let params = Params::default();
        let huge: Region = serde_json::from_str(r#"{"name":"Huge","population":18446744073709551615,"current_seats":1}"#).unwrap();
        let row = apportion_region(&huge, Divisor::new(1).unwrap(), &params);

        assert_eq!(row.apportioned_seats, u64::MAX);
        assert_eq!(row.apportioned_electoral_votes, u64::MAX);
        assert_eq!(row.seat_change, i64::MAX);

        let half = u64::MAX / 2 + 1;
        let regions: Vec<Region> = ["A", "B"].iter()
            .map(|name| serde_json::from_value(serde_json::json!({ "name": name, "population": half, "current_seats": 1 })).unwrap())
            .collect();
        let result = Apportionment::with_divisor(&regions, Divisor::new(i64::MAX).unwrap(), &params);
        assert_eq!(result.totals().total_population, u64::MAX);
        assert_eq!(result.totals().total_apportioned_seats, 2);
    }

    #[test]
    fn display_order_breaks_ties_by_name() {
        let regions = [
            region("Charlie", 300, 1),
            region("Bravo", 100, 3),
            region("Alpha", 300, 1),
            region("Delta", 100, 1),
        ];
        let result = Apportionment::compute(&regions, 100, &Params::default()).unwrap();
        let names: Vec<&str> = result.sorted_by_change().iter().map(|row| row.region.name()).collect();

        // Alpha/Bravo/Charlie all move by two seats; Delta is unchanged.
        assert_eq!(names, ["Alpha", "Bravo", "Charlie", "Delta"]);
        assert_eq!(result.rows()[0].region.name(), "Charlie");
    }

    #[test]
    fn json_row_is_flat() {
        let params = Params::default();
        let divisor = Divisor::new(576_851).unwrap();
        let wyoming = Region::new("Wyoming", 576_851, 1, Some(PartisanLean::Republican)).unwrap();
        let value = serde_json::to_value(apportion_region(&wyoming, divisor, &params)).unwrap();

        assert_eq!(value["name"], "Wyoming");
        assert_eq!(value["lean"], "republican");
        assert_eq!(value["apportioned_seats"], 1);
        assert_eq!(value["people_per_seat"], 576_851);
    }

    #[test]
    fn percent_formatting() {
        assert_eq!(format_percent(81.578, 1), "+81.6%");
        assert_eq!(format_percent(0.0, 1), "0.0%");
        assert_eq!(format_percent(-0.01, 1), "0.0%");
        assert_eq!(format_percent(-12.34, 1), "-12.3%");
        assert_eq!(format_percent(32.18, 0), "+32%");
    }
}
