use anyhow::{bail, Result};
use wyoming_rule::{io::json, render_summary, Summary};

use crate::output::{prepare_output, Format};

pub fn run(cli: &crate::cli::Cli, args: &crate::cli::SummaryArgs) -> Result<()> {
    let params = super::load_params(cli)?;
    let divisor = super::resolve_divisor(&args.divisor, &params)?;
    let summary = Summary::compute(divisor, &params)?;

    let Some(out_path) = &args.output else {
        print!("{}", render_summary(&summary));
        return Ok(());
    };

    if Format::from_path(out_path)? != Format::Json {
        bail!("The summary can only be written as .json: {}", out_path.display());
    }
    prepare_output(out_path, args.force)?;
    tracing::info!("[summary] writing summary to {}", out_path.display());
    json::write_json(&summary, out_path)
}
