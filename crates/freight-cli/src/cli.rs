//! CLI definition using clap

use clap::{Parser, Subcommand};
use freight_types::{OutputFormat, SizeClass};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "freight-market")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Generate city freight job markets from reference tables")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// TOML catalog to use instead of the built-in tables
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// CSV distance table to use instead of built-in coordinates
    #[arg(long, global = true)]
    pub distances: Option<PathBuf>,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate offers for a single city
    Generate {
        /// Origin city name
        city: String,

        /// RNG seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Generate offers for every catalog city
    Market {
        /// RNG seed (overrides config)
        #[arg(long)]
        seed: Option<u64>,

        /// Only generate cities of this size class
        #[arg(long)]
        city_size: Option<SizeClass>,
    },

    /// List catalog cities
    Cities,

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set a fixed RNG seed
        #[arg(long)]
        set_seed: Option<u64>,

        /// Remove the fixed seed
        #[arg(long, conflicts_with = "set_seed")]
        clear_seed: bool,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set the default catalog file
        #[arg(long)]
        set_catalog: Option<PathBuf>,

        /// Set the default distance table
        #[arg(long)]
        set_distance_table: Option<PathBuf>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_generate() {
        let cli = Cli::try_parse_from(["freight-market", "generate", "Berlin", "--seed", "42", "-f", "json"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
        match cli.command {
            Commands::Generate { city, seed } => {
                assert_eq!(city, "Berlin");
                assert_eq!(seed, Some(42));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_parse_market_size_filter() {
        let cli = Cli::try_parse_from(["freight-market", "market", "--city-size", "large", "-v"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Market { city_size: Some(SizeClass::Large), seed: None }
        ));
    }

    #[test]
    fn test_seed_flags_conflict() {
        assert!(Cli::try_parse_from(["freight-market", "config", "--set-seed", "1", "--clear-seed"]).is_err());
    }
}
