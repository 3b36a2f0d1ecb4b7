pub mod compare;
pub mod summary;
pub mod sweep;

use std::path::Path;

use anyhow::{bail, Result};
use wyoming_rule::{
    divisor_for_house_size, io::{csv, json}, reference_regions, Divisor, Params, RegionSet,
};

use crate::cli::{Cli, DivisorArgs};

/// Parameters from `--config`, or the built-in defaults.
pub(crate) fn load_params(cli: &Cli) -> Result<Params> {
    match &cli.config {
        Some(path) => {
            tracing::info!("[config] loading params from {}", path.display());
            Params::from_json_file(path)
        }
        None => Ok(Params::default()),
    }
}

/// Resolve `--divisor` / `--house-size`, falling back to the configured default.
pub(crate) fn resolve_divisor(args: &DivisorArgs, params: &Params) -> Result<Divisor> {
    let divisor = match (args.divisor, args.house_size) {
        (Some(divisor), _) => Divisor::new(divisor)?,
        (None, Some(seats)) => divisor_for_house_size(params.national_population, seats)?,
        (None, None) => Divisor::try_from(params.default_divisor)?,
    };
    tracing::info!("[divisor] using {} people per seat", divisor);
    Ok(divisor)
}

/// Region dataset from a `.csv`/`.json` file, or the built-in reference data.
pub(crate) fn load_regions(path: Option<&Path>) -> Result<RegionSet> {
    let Some(path) = path else { return Ok(reference_regions()) };

    tracing::info!("[regions] loading dataset from {}", path.display());
    match path.extension().and_then(|ext| ext.to_str()).map(str::to_ascii_lowercase).as_deref() {
        Some("csv") => csv::read_regions_csv(path),
        Some("json") => json::read_regions_json(path),
        _ => bail!("Unsupported region dataset {} (expected .csv or .json)", path.display()),
    }
}
