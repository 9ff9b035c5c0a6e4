//! CLI argument definitions using clap

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cert-deploy")]
#[command(version)]
#[command(about = "Copy a renewed certificate set from the archive to its services", long_about = None)]
pub struct Cli {
    /// Archive source directory name to copy from (a key in the INFO manifest)
    #[arg(value_name = "SRC_DIR_NAME")]
    pub src_dir_name: String,

    /// Override the system certificate root
    #[arg(long, value_name = "DIR")]
    pub cert_root: Option<PathBuf>,

    /// Override the package certificate root
    #[arg(long, value_name = "DIR")]
    pub pkg_root: Option<PathBuf>,

    /// Print the per-file result table after the run
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
