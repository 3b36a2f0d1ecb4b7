use std::{fs::File, io::{BufReader, BufWriter, Write}, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::{
    apportion::{Apportionment, ApportionmentTotals, Divisor, RegionApportionment},
    region::{Region, RegionSet},
};

/// Borrowed view of an apportionment with rows in display order.
#[derive(Serialize)]
struct ApportionmentReport<'a> {
    divisor: Divisor,
    rows: Vec<&'a RegionApportionment>,
    totals: &'a ApportionmentTotals,
}

impl<'a> From<&'a Apportionment> for ApportionmentReport<'a> {
    fn from(apportionment: &'a Apportionment) -> Self {
        Self {
            divisor: apportionment.divisor(),
            rows: apportionment.sorted_by_change(),
            totals: apportionment.totals(),
        }
    }
}

/// Parse a JSON array of region objects and validate it.
pub fn read_regions_json_str(json: &str) -> Result<RegionSet> {
    let regions: Vec<Region> = serde_json::from_str(json)
        .context("[io::json] Failed to parse region list")?;
    Ok(RegionSet::new(regions)?)
}

/// Read a region dataset from a JSON file holding an array of
/// `{ "name", "population", "current_seats", "lean"? }` objects.
pub fn read_regions_json(path: &Path) -> Result<RegionSet> {
    let file = File::open(path)
        .with_context(|| format!("[io::json] Failed to read JSON file: {}", path.display()))?;
    let regions: Vec<Region> = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json] Failed to parse region list from {}", path.display()))?;
    RegionSet::new(regions)
        .with_context(|| format!("[io::json] Invalid region dataset in {}", path.display()))
}

/// Serialize an apportionment (rows in display order, plus totals) as pretty JSON.
pub fn apportionment_to_json(apportionment: &Apportionment) -> Result<String> {
    serde_json::to_string_pretty(&ApportionmentReport::from(apportionment))
        .context("[io::json] Failed to serialize apportionment")
}

/// Write any serializable value as pretty JSON to `path`.
pub fn write_json<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::json] Failed to create JSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value)
        .with_context(|| format!("[io::json] Failed to write JSON to {}", path.display()))?;
    writer.write_all(b"\n")?;
    Ok(writer.flush()?)
}

/// Write an apportionment to `path` as pretty JSON.
pub fn write_apportionment_json(apportionment: &Apportionment, path: &Path) -> Result<()> {
    write_json(&ApportionmentReport::from(apportionment), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Params, region::PartisanLean};

    #[test]
    fn reads_region_array() {
        let json = r#"[
            {"name": "Nevada", "population": 3104614, "current_seats": 4, "lean": "S"},
            {"name": "Vermont", "population": 643077, "current_seats": 1}
        ]"#;
        let set = read_regions_json_str(json).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Nevada").and_then(Region::lean), Some(PartisanLean::Swing));
    }

    #[test]
    fn rejects_invalid_region() {
        let json = r#"[{"name": "Nowhere", "population": 0, "current_seats": 1}]"#;
        assert!(read_regions_json_str(json).is_err());
    }

    #[test]
    fn report_rows_in_display_order() {
        let regions = [
            Region::new("Small", 100, 1, None).unwrap(),
            Region::new("Large", 1_000, 1, None).unwrap(),
        ];
        let result = Apportionment::compute(&regions, 100, &Params::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&apportionment_to_json(&result).unwrap()).unwrap();

        assert_eq!(value["divisor"], 100);
        assert_eq!(value["rows"][0]["name"], "Large");
        assert_eq!(value["rows"][0]["seat_change"], 9);
        assert_eq!(value["totals"]["total_apportioned_seats"], 11);
    }
}
