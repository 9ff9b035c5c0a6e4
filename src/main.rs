//! cert-deploy - distribute a renewed certificate set to its services
//!
//! Reads the archive INFO manifest, resolves one source directory name, and
//! copies cert.pem / privkey.pem / fullchain.pem into every registered
//! service's certificate directory. Per-file failures are warnings; only
//! manifest or source-directory problems abort the run.

use cert_deploy::commands;
use cert_deploy::output;
use cert_deploy::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() {
    // Per-service progress lines go through tracing at info level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // try_parse so a missing argument exits 1, not clap's default 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            // --help/--version are not failures.
            std::process::exit(if e.use_stderr() { 1 } else { 0 });
        }
    };

    if cli.no_color {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    if let Err(e) = commands::run_distribute(&cli) {
        output::print_error(&e.to_string());
        std::process::exit(1);
    }
}
