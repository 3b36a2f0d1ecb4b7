//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::{apportion::Apportionment, report::SweepPoint};

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Write a DataFrame to a CSV string.
pub(crate) fn write_csv_string(df: &mut DataFrame) -> Result<String> {
    let mut buffer = Vec::new();
    CsvWriter::new(&mut buffer)
        .finish(df)
        .with_context(|| "[io::csv::write] Failed to write CSV to string")?;
    String::from_utf8(buffer)
        .with_context(|| "[io::csv::write] CSV output is not valid UTF-8")
}

/// One row per region, in display order.
pub(crate) fn apportionment_frame(apportionment: &Apportionment) -> Result<DataFrame> {
    let rows = apportionment.sorted_by_change();

    let names: Vec<String> = rows.iter().map(|row| row.region.name().to_string()).collect();
    let leans: Vec<Option<String>> = rows.iter()
        .map(|row| row.region.lean().map(|lean| lean.code().to_string()))
        .collect();
    let populations: Vec<u64> = rows.iter().map(|row| row.region.population()).collect();
    let current_seats: Vec<u32> = rows.iter().map(|row| row.region.current_seats()).collect();
    let apportioned: Vec<u64> = rows.iter().map(|row| row.apportioned_seats).collect();
    let changes: Vec<i64> = rows.iter().map(|row| row.seat_change).collect();
    let percents: Vec<f64> = rows.iter().map(|row| (row.percent_change * 10.0).round() / 10.0).collect();
    let per_seat: Vec<Option<u64>> = rows.iter().map(|row| row.people_per_seat).collect();
    let current_ev: Vec<u64> = rows.iter().map(|row| row.current_electoral_votes).collect();
    let apportioned_ev: Vec<u64> = rows.iter().map(|row| row.apportioned_electoral_votes).collect();

    Ok(DataFrame::new(vec![
        Series::new("name".into(), names).into(),
        Series::new("lean".into(), leans).into(),
        Series::new("population".into(), populations).into(),
        Series::new("current_seats".into(), current_seats).into(),
        Series::new("apportioned_seats".into(), apportioned).into(),
        Series::new("seat_change".into(), changes).into(),
        Series::new("percent_change".into(), percents).into(),
        Series::new("people_per_seat".into(), per_seat).into(),
        Series::new("current_electoral_votes".into(), current_ev).into(),
        Series::new("apportioned_electoral_votes".into(), apportioned_ev).into(),
    ])?)
}

/// Write the per-region comparison (display order) to a CSV file.
pub fn write_apportionment_csv(apportionment: &Apportionment, path: &Path) -> Result<()> {
    let mut df = apportionment_frame(apportionment)?;
    write_csv(&mut df, path)
}

/// Write the per-region comparison (display order) to a CSV string.
pub fn write_apportionment_csv_string(apportionment: &Apportionment) -> Result<String> {
    let mut df = apportionment_frame(apportionment)?;
    write_csv_string(&mut df)
}

/// Write a divisor sweep to a CSV file.
pub fn write_sweep_csv(points: &[SweepPoint], path: &Path) -> Result<()> {
    let mut df = DataFrame::new(vec![
        Series::new("divisor".into(), points.iter().map(|p| p.divisor).collect::<Vec<_>>()).into(),
        Series::new("house_seats".into(), points.iter().map(|p| p.house_seats).collect::<Vec<_>>()).into(),
        Series::new("average_district".into(), points.iter().map(|p| p.average_district).collect::<Vec<_>>()).into(),
        Series::new("electoral_votes".into(), points.iter().map(|p| p.electoral_votes).collect::<Vec<_>>()).into(),
        Series::new("majority_threshold".into(), points.iter().map(|p| p.majority_threshold).collect::<Vec<_>>()).into(),
    ])?;
    write_csv(&mut df, path)
}
