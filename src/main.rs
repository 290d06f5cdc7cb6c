//! folio-ssg CLI
//!
//! Running the binary with no arguments performs the full build with the
//! compiled-in defaults. The library functionality is in `lib.rs`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use eyre::Result;
use folio_ssg::{config::AppConfig, Site};

/// Command-line interface for folio-ssg.
#[derive(Parser)]
#[command(
    name = "folio-ssg",
    version,
    about = "Static site generator for a personal academic portfolio"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Generate all pages
    Build {
        /// Override output directory path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate the page records without writing files
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    folio_ssg::init_tracing(cli.verbose);

    let config_path = cli.config.as_ref().map(|p| p.to_string_lossy().to_string());
    let config = AppConfig::load_or_default(config_path.as_deref())?;

    match cli.command.unwrap_or(Commands::Build { output: None }) {
        Commands::Build { output } => {
            let output_dir = output.unwrap_or_else(|| config.build.output_dir.clone());
            let site = Site::new(output_dir).with_config(config);

            let stats = site.build()?;
            for group in &stats.groups {
                println!("Generated {} {} pages", group.pages, group.name);
            }
        }
        Commands::Check => {
            let site = Site::new(config.build.output_dir.clone()).with_config(config);
            site.check()?;
            println!("All page records are valid");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_no_arguments_selects_default_build() {
        let cli = Cli::parse_from(["folio-ssg"]);
        assert!(cli.command.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_build_output_override_parses() {
        let cli = Cli::parse_from(["folio-ssg", "build", "--output", "dist"]);
        match cli.command {
            Some(Commands::Build { output }) => {
                assert_eq!(output, Some(PathBuf::from("dist")));
            }
            _ => panic!("Expected Build command"),
        }
    }

    #[test]
    fn test_check_command_parses() {
        let cli = Cli::parse_from(["folio-ssg", "check"]);
        assert!(matches!(cli.command, Some(Commands::Check)));
    }

    #[test]
    fn test_verbosity_flags_accumulate() {
        let cli = Cli::parse_from(["folio-ssg", "-vvv", "build"]);
        assert_eq!(cli.verbose, 3);
    }

    #[test]
    fn test_custom_config_path_parses() {
        let cli = Cli::parse_from(["folio-ssg", "--config", "site.toml", "check"]);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
    }
}
