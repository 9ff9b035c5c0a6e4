//! Distribute command implementation

use crate::cli::Cli;
use crate::config::Settings;
use crate::distributor;
use crate::output;
use crate::utils::Result;

/// Run the distribution described by the parsed CLI arguments.
///
/// Warnings never fail the run; only the fatal preconditions (manifest,
/// lookup, source directory) surface as `Err`.
pub fn run_distribute(cli: &Cli) -> Result<()> {
    let settings = Settings::with_overrides(cli.cert_root.clone(), cli.pkg_root.clone());

    let summary = distributor::distribute(&settings, &cli.src_dir_name)?;

    output::print_summary(&summary);
    if cli.verbose {
        output::print_summary_table(&summary);
    }

    Ok(())
}
