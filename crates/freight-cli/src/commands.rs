//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_cities, output_city, output_market};
use freight_app::config::Config;
use freight_app::market::{generate_city, generate_market};
use freight_app::rng::MarketRng;
use freight_app::sources::{open_catalog, open_catalog_at, open_distance_provider};
use freight_types::{Error, OutputFormat, Result, SizeClass};
use std::path::PathBuf;
use tracing::{info, warn};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;

    // Override from CLI args
    if let Some(ref catalog) = cli.catalog {
        config.catalog_path = Some(catalog.clone());
    }
    if let Some(ref distances) = cli.distances {
        config.distance_table = Some(distances.clone());
    }
    let output_format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Generate { city, seed } => cmd_generate(&config, &city, seed, output_format),

        Commands::Market { seed, city_size } => cmd_market(&config, seed, city_size, output_format),

        Commands::Cities => cmd_cities(&config, output_format),

        Commands::Config {
            show,
            set_seed,
            clear_seed,
            set_output,
            set_catalog,
            set_distance_table,
            reset,
        } => cmd_config(
            show,
            set_seed,
            clear_seed,
            set_output,
            set_catalog,
            set_distance_table,
            reset,
        ),
    }
}

fn cmd_generate(config: &Config, city: &str, seed: Option<u64>, output_format: OutputFormat) -> Result<()> {
    let catalog = open_catalog(config)?;
    let distances = open_distance_provider(config)?;

    if catalog.city(city).is_none() {
        warn!(city, "city is not in the catalog; no offers will be generated");
    }

    let mut rng = MarketRng::from_optional_seed(seed.or(config.seed));
    info!(city, seed = rng.seed(), "generating city market");
    let market = generate_city(&catalog, &*distances, config.limits, city, &mut rng);

    output_city(output_format, &market, rng.seed())
}

fn cmd_market(
    config: &Config,
    seed: Option<u64>,
    city_size: Option<SizeClass>,
    output_format: OutputFormat,
) -> Result<()> {
    let catalog = open_catalog(config)?;
    let distances = open_distance_provider(config)?;

    let mut rng = MarketRng::from_optional_seed(seed.or(config.seed));
    let snapshot = generate_market(&catalog, &*distances, config.limits, city_size, &mut rng);

    output_market(output_format, &snapshot)
}

fn cmd_cities(config: &Config, output_format: OutputFormat) -> Result<()> {
    let catalog = open_catalog(config)?;
    output_cities(output_format, &catalog)
}

fn cmd_config(
    show: bool,
    set_seed: Option<u64>,
    clear_seed: bool,
    set_output: Option<OutputFormat>,
    set_catalog: Option<PathBuf>,
    set_distance_table: Option<PathBuf>,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save()?;
        println!("Configuration reset to defaults");
        println!("\n{}", config);
        return Ok(());
    }

    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(seed) = set_seed {
        config.seed = Some(seed);
        modified = true;
    }

    if clear_seed {
        config.seed = None;
        modified = true;
    }

    if let Some(output_format) = set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(path) = set_catalog {
        open_catalog_at(&path)?;
        config.catalog_path = Some(path);
        modified = true;
    }

    if let Some(path) = set_distance_table {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        config.distance_table = Some(path);
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration updated");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
