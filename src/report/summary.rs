use serde::Serialize;

use crate::{
    ApportionError, Params,
    apportion::{Divisor, divisor_for_house_size, national_seats, signed_difference},
};

/// National comparison of the current House against a divisor-based House.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub current_house_size: u64,
    pub current_district_size: u64,
    pub rule_house_size: u64,
    pub rule_district_size: u64,
    pub seat_difference: i64,
    /// Relative change in House size, in percent.
    pub percent_increase: f64,
    /// Relative reduction in district size, in percent.
    pub district_shrink: f64,
    pub current_electoral_votes: u64,
    pub current_majority_threshold: u64,
    pub rule_electoral_votes: u64,
    pub rule_majority_threshold: u64,
}

impl Summary {
    /// Compute the overview for `divisor`. Fails only if `params.house_size` is zero.
    pub fn compute(divisor: Divisor, params: &Params) -> Result<Self, ApportionError> {
        let current_district = divisor_for_house_size(params.national_population, params.house_size)?;

        let current_house_size = params.house_size as u64;
        let rule_house_size = national_seats(params.national_population, divisor);
        let seat_difference = signed_difference(rule_house_size, current_house_size);

        let current_electoral_votes = current_house_size + params.fixed_electoral_votes();
        let rule_electoral_votes = rule_house_size.saturating_add(params.fixed_electoral_votes());

        Ok(Self {
            current_house_size,
            current_district_size: current_district.get(),
            rule_house_size,
            rule_district_size: divisor.get(),
            seat_difference,
            percent_increase: seat_difference as f64 / current_house_size as f64 * 100.0,
            district_shrink: (1.0 - divisor.get() as f64 / current_district.get() as f64) * 100.0,
            current_electoral_votes,
            current_majority_threshold: current_electoral_votes / 2 + 1,
            rule_electoral_votes,
            rule_majority_threshold: rule_electoral_votes / 2 + 1,
        })
    }
}

/// Render a population in thousands, as on the overview cards (`~577K`).
pub fn format_thousands(value: u64) -> String {
    format!("~{}K", value.saturating_add(500) / 1000)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wyoming_rule_overview() {
        let params = Params::default();
        let summary = Summary::compute(Divisor::new(576_851).unwrap(), &params).unwrap();

        assert_eq!(summary.current_house_size, 435);
        assert_eq!(summary.current_district_size, 761_952);
        assert_eq!(summary.rule_house_size, 575);
        assert_eq!(summary.seat_difference, 140);
        assert_eq!(format!("{:.0}", summary.percent_increase), "32");
        assert_eq!(format!("{:.0}", summary.district_shrink), "24");
        assert_eq!((summary.current_electoral_votes, summary.current_majority_threshold), (538, 270));
        assert_eq!((summary.rule_electoral_votes, summary.rule_majority_threshold), (678, 340));
    }

    #[test]
    fn zero_house_size_is_rejected() {
        let params = Params { house_size: 0, ..Params::default() };
        assert!(Summary::compute(Divisor::new(576_851).unwrap(), &params).is_err());
    }

    #[test]
    fn oversized_national_population_saturates() {
        let params = Params { national_population: u64::MAX, ..Params::default() };
        let summary = Summary::compute(Divisor::new(1).unwrap(), &params).unwrap();
        assert_eq!(summary.rule_electoral_votes, u64::MAX);
        assert_eq!(summary.seat_difference, i64::MAX);
    }

    #[test]
    fn thousands() {
        assert_eq!(format_thousands(576_851), "~577K");
        assert_eq!(format_thousands(761_952), "~762K");
        assert_eq!(format_thousands(400), "~0K");
    }
}
