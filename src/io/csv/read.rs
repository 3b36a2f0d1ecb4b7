//! CSV reading operations.

use std::{fs::File, io::Cursor, path::Path};

use anyhow::{Context, Result, bail, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReader, DataType}};

use crate::region::{PartisanLean, Region, RegionSet};

/// Reads a CSV file from `path` into a Polars DataFrame.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReader::new(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Reads a CSV from a string.
pub(crate) fn read_csv_string(csv: &str) -> Result<DataFrame> {
    CsvReader::new(Cursor::new(csv.as_bytes()))
        .finish()
        .with_context(|| "[io::csv::read] Failed to read CSV from string")
}

/// Read a region dataset from a CSV file.
///
/// Required columns: `name`, `population`, `current_seats`. An optional
/// `lean` column holds `D`/`R`/`S` (or the full names); empty cells mean
/// the region is not grouped.
pub fn read_regions_csv(path: &Path) -> Result<RegionSet> {
    let df = read_csv(path)?;
    regions_from_frame(&df)
        .with_context(|| format!("[io::csv::read] Invalid region dataset in {}", path.display()))
}

/// Read a region dataset from CSV text.
pub fn read_regions_csv_string(csv: &str) -> Result<RegionSet> {
    regions_from_frame(&read_csv_string(csv)?)
}

/// Convert a DataFrame with region columns into a validated region set.
pub(crate) fn regions_from_frame(df: &DataFrame) -> Result<RegionSet> {
    for column in ["name", "population", "current_seats"] {
        ensure!(
            df.column(column).is_ok(),
            "[io::csv::read] CSV is missing required column '{column}' (expected name,population,current_seats[,lean])"
        );
    }

    for column in ["population", "current_seats"] {
        let dtype = df.column(column)?.dtype();
        ensure!(
            dtype.is_integer(),
            "[io::csv::read] Column '{column}' must hold whole numbers, found {dtype}"
        );
    }

    let names = df.column("name")?.cast(&DataType::String)?;
    let populations = df.column("population")?.cast(&DataType::UInt64)?;
    let seats = df.column("current_seats")?.cast(&DataType::UInt32)?;
    let leans = match df.column("lean") {
        Ok(column) => Some(column.cast(&DataType::String)?),
        Err(_) => None,
    };

    let names = names.str()?;
    let populations = populations.u64()?;
    let seats = seats.u32()?;
    let leans = leans.as_ref().map(|column| column.str()).transpose()?;

    let mut regions = Vec::with_capacity(df.height());
    for row in 0..df.height() {
        let (Some(name), Some(population), Some(current_seats)) = (names.get(row), populations.get(row), seats.get(row)) else {
            bail!("[io::csv::read] Row {} has an empty or non-numeric required field", row + 1);
        };

        let lean = match leans.and_then(|leans| leans.get(row)).map(str::trim) {
            None | Some("") => None,
            Some(code) => Some(code.parse::<PartisanLean>()?),
        };

        regions.push(Region::new(name.trim(), population, current_seats, lean)?);
    }

    tracing::debug!("[io::csv::read] read {} regions", regions.len());
    Ok(RegionSet::new(regions)?)
}
