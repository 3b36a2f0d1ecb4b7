// Integration tests for the apportionment calculator:
//   scenarios, rounding boundaries, and properties over random inputs

use proptest::prelude::*;
use wyoming_rule::{
    apportioned_seats, national_seats, reference_regions, ApportionError, Apportionment, Divisor,
    Params, PartisanLean, Region, NATIONAL_POPULATION, WYOMING_POPULATION,
};

fn divisor(value: i64) -> Divisor { Divisor::new(value).unwrap() }

#[test]
fn divisor_equal_to_population_gives_one_seat() {
    assert_eq!(apportioned_seats(576_851, divisor(576_851)), 1);
}

#[test]
fn california_rounds_up() {
    assert_eq!(apportioned_seats(39_538_223, divisor(576_851)), 69);
}

#[test]
fn seat_change_and_percent_for_thirty_eight_seats() {
    let region = Region::new("Example", 39_538_223, 38, None).unwrap();
    let result = Apportionment::compute(&[region], 576_851, &Params::default()).unwrap();
    let row = &result.rows()[0];

    assert_eq!(row.seat_change, 31);
    assert!((row.percent_change - 81.578_947).abs() < 1e-5);
    assert_eq!(row.percent_change_display(), "+81.6%");
}

#[test]
fn non_positive_divisor_is_rejected() {
    let regions = reference_regions();
    for bad in [0, -1, -576_851, i64::MIN] {
        assert_eq!(
            Apportionment::compute(regions.regions(), bad, &Params::default()),
            Err(ApportionError::InvalidDivisor(bad)),
        );
    }
}

#[test]
fn national_house_under_wyoming_rule() {
    assert_eq!(national_seats(NATIONAL_POPULATION, divisor(576_851)), 575);
}

#[test]
fn exact_half_rounds_up() {
    assert_eq!(apportioned_seats(1_442_124, divisor(576_850)), 2);
    assert_eq!(apportioned_seats(1_442_125, divisor(576_850)), 3); // 2.5
    assert_eq!(apportioned_seats(288_425, divisor(576_850)), 1); // 0.5
    assert_eq!(apportioned_seats(288_424, divisor(576_850)), 0);
}

#[test]
fn reference_dataset_totals() {
    let regions = reference_regions();
    let result = Apportionment::compute(regions.regions(), WYOMING_POPULATION as i64, &Params::default()).unwrap();
    let totals = result.totals();

    assert_eq!(totals.total_current_seats, 256);
    assert_eq!(totals.total_apportioned_seats, 339);
    assert_eq!(totals.total_seat_change, 83);
    assert_eq!(totals.gains(PartisanLean::Democratic), 31);
    assert_eq!(totals.gains(PartisanLean::Republican), 27);
    assert_eq!(totals.gains(PartisanLean::Swing), 25);
    assert_eq!(totals.total_electoral_votes, 678);
    assert_eq!(totals.majority_threshold, 340);
    assert_eq!(totals.current_electoral_votes, 538);
    assert_eq!(totals.current_majority_threshold, 270);

    let wyoming = result.row("Wyoming").unwrap();
    assert_eq!((wyoming.apportioned_seats, wyoming.seat_change), (1, 0));
    assert_eq!(wyoming.people_per_seat, Some(576_851));

    let order: Vec<&str> = result.sorted_by_change().iter().take(4).map(|row| row.region.name()).collect();
    assert_eq!(order, ["California", "Texas", "Florida", "New York"]);
}

#[test]
fn regional_sum_tracks_combined_population() {
    let regions = reference_regions();
    let d = divisor(576_851);
    let result = Apportionment::with_divisor(regions.regions(), d, &Params::default());
    let combined = apportioned_seats(regions.total_population(), d) as i64;
    let summed = result.totals().total_apportioned_seats as i64;

    assert!((combined - summed).abs() <= regions.len() as i64);
}

#[test]
fn calling_twice_gives_identical_results() {
    let regions = reference_regions();
    let params = Params::default();
    let first = Apportionment::compute(regions.regions(), 700_000, &params).unwrap();
    let second = Apportionment::compute(regions.regions(), 700_000, &params).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn seats_match_rounded_quotient(population in 1u64..1_000_000_000, d in 1i64..10_000_000) {
        let seats = apportioned_seats(population, divisor(d));
        let expected = (population as f64 / d as f64).round() as u64;
        prop_assert!(seats.abs_diff(expected) <= 1);
        prop_assert!(seats * d as u64 <= population + d as u64 / 2 + 1);
    }

    #[test]
    fn increasing_divisor_never_adds_seats(population in 1u64..1_000_000_000, d in 1i64..10_000_000, step in 0i64..10_000_000) {
        let smaller = apportioned_seats(population, divisor(d));
        let larger = apportioned_seats(population, divisor(d + step));
        prop_assert!(larger <= smaller);
    }

    #[test]
    fn summed_seats_within_region_count(
        populations in proptest::collection::vec(1u64..50_000_000, 0..15),
        d in 1i64..5_000_000,
    ) {
        let regions: Vec<Region> = populations.iter().enumerate()
            .map(|(i, &population)| Region::new(format!("R{i}"), population, 1, None).unwrap())
            .collect();
        let result = Apportionment::compute(&regions, d, &Params::default()).unwrap();
        let combined = apportioned_seats(populations.iter().sum(), divisor(d)) as i64;
        let summed = result.totals().total_apportioned_seats as i64;
        prop_assert!((combined - summed).abs() <= regions.len() as i64);
    }

    #[test]
    fn pure_function_is_repeatable(d in 1i64..5_000_000) {
        let regions = reference_regions();
        let params = Params::default();
        prop_assert_eq!(
            Apportionment::compute(regions.regions(), d, &params),
            Apportionment::compute(regions.regions(), d, &params),
        );
    }
}
