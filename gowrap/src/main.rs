use clap::{Args, Parser, Subcommand, command};
use miette::{ErrReport, IntoDiagnostic};

use crate::{dirs::GowrapDirs, errors::GowrapError, tables::GowrapVersionRow};
/// Configuration file
pub mod config;
/// Directory management
pub mod dirs;
/// Error definitions
pub mod errors;
/// Version validation and ordering
pub mod semver;
/// gowrap tables
pub mod tables;
/// Installed versions
pub mod versions;

/// Manage your installed Go versions
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Custom path to configuration file
    #[arg(short = 'c', long, global = true)]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List installed versions
    List(ListOpts),
    /// Print the latest installed version
    Latest,
    /// Sort versions
    Sort(SortOpts),
    /// Check whether a version is valid
    Check(CheckOpts),
}

#[derive(Args)]
pub struct ListOpts {
    /// Long format
    #[arg(short = 'l', long)]
    long: bool,
}
#[derive(Args)]
pub struct SortOpts {
    /// Versions to sort
    #[arg(required = true)]
    versions: Vec<String>,
}
#[derive(Args)]
pub struct CheckOpts {
    /// Version to check
    version: String,
}

fn main() -> Result<(), ErrReport> {
    start().into_diagnostic()?;

    Ok(())
}
fn start() -> Result<(), GowrapError> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::List(list_opts) => {
            let dirs = GowrapDirs::new(&cli.config)?;
            let versions_dir = dirs.versions_dir()?;
            let rows: Vec<_> = versions::sorted_installed_versions(&versions_dir)?
                .into_iter()
                .map(|version| GowrapVersionRow {
                    path: dirs.installation_path(&version).display().to_string(),
                    version,
                })
                .collect();

            tables::gowrap_versions(&rows, list_opts.long);

            Ok(())
        }
        Commands::Latest => {
            let dirs = GowrapDirs::new(&cli.config)?;
            let versions_dir = dirs.versions_dir()?;
            println!("{}", versions::latest_installed_version(&versions_dir)?);

            Ok(())
        }
        Commands::Sort(mut sort_opts) => {
            semver::sort_versions(&mut sort_opts.versions)?;
            sort_opts.versions.iter().for_each(|f| println!("{}", f));

            Ok(())
        }
        Commands::Check(check_opts) => {
            if !semver::is_valid(&check_opts.version) {
                return Err(GowrapError::InvalidVersion(check_opts.version));
            }
            println!("{} is a valid version", check_opts.version);

            Ok(())
        }
    }
}
