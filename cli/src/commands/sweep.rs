use anyhow::Result;
use wyoming_rule::{io::{csv, json}, render_sweep, sweep};

use crate::output::{prepare_output, Format};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::SweepArgs) -> Result<()> {
    let params = super::load_params(cli)?;

    tracing::info!("[sweep] divisors {}..={} step {}", args.from, args.to, args.step);
    let points = sweep(&params, args.from, args.to, args.step)?;

    let Some(out_path) = &args.output else {
        print!("{}", render_sweep(&points));
        return Ok(());
    };

    let format = Format::from_path(out_path)?;
    prepare_output(out_path, args.force)?;
    tracing::info!("[sweep] writing {} points to {}", points.len(), out_path.display());
    match format {
        Format::Csv => csv::write_sweep_csv(&points, out_path),
        Format::Json => json::write_json(&points, out_path),
    }
}
