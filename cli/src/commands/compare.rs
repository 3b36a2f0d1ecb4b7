use anyhow::Result;
use wyoming_rule::{io::{csv, json}, render_comparison, Apportionment};

use crate::output::{prepare_output, Format};

/// Rows printed without `--all`.
const DEFAULT_ROWS: usize = 10;

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::CompareArgs) -> Result<()> {
    let params = super::load_params(cli)?;
    let regions = super::load_regions(args.regions.as_deref())?;
    let divisor = super::resolve_divisor(&args.divisor, &params)?;

    tracing::info!("[compare] apportioning {} regions", regions.len());
    let apportionment = Apportionment::with_divisor(regions.regions(), divisor, &params);

    let Some(out_path) = &args.output else {
        let limit = (!args.all).then_some(DEFAULT_ROWS);
        print!("{}", render_comparison(&apportionment, limit));
        return Ok(());
    };

    let format = Format::from_path(out_path)?;
    prepare_output(out_path, args.force)?;
    tracing::info!("[compare] writing comparison to {}", out_path.display());
    match format {
        Format::Csv => csv::write_apportionment_csv(&apportionment, out_path),
        Format::Json => json::write_apportionment_json(&apportionment, out_path),
    }
}
