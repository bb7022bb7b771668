//! CLI entry point for browsing the catalog.
//!
//! This is a thin integration layer over the appdex library: it resolves
//! configuration, initializes the engine, applies filter arguments, and prints
//! the resulting view. All catalog logic lives in the library.
//!
//! # Usage
//!
//! ```text
//! appdex [OPTIONS]
//!
//! Options:
//!   --config <PATH>      TOML configuration file (default: appdex.toml if present)
//!   --catalog <PATH>     CSV catalog source (overrides config)
//!   --search <TERM>      free-text search over name and description
//!   --platform <TAG>     all | mac | ios | web | cross-platform
//!   --max-price <N>      inclusive price ceiling
//!   --min-rating <N>     minimum rating
//!   --sort <KEY>         name | price | rating | platform
//!   --desc               sort descending
//! ```

use appdex::query::{FilterUpdate, PlatformFilter, SortDirection, SortKey};
use appdex::{observability, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let cli = match CliArgs::parse(&args) {
        Ok(cli) => cli,
        Err(message) => {
            eprintln!("appdex: {message}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = match cli.config_path.as_deref() {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("appdex: {e}");
                return ExitCode::FAILURE;
            }
        },
        None if std::path::Path::new("appdex.toml").exists() => {
            match Config::from_file("appdex.toml") {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("appdex: {e}");
                    return ExitCode::FAILURE;
                }
            }
        }
        None => Config::default(),
    };

    if let Some(catalog) = cli.catalog_path.clone() {
        config.catalog_path = catalog;
    }

    observability::init_tracing(config.log_level.as_deref());

    let mut engine = match appdex::initialize(&config) {
        Ok(engine) => engine,
        Err(e) => {
            // The catalog failed to load; per the error contract this is the
            // one terminal failure a caller sees. Suggest a retry.
            eprintln!("appdex: {e}");
            eprintln!("appdex: the catalog failed to load, check the path and retry");
            return ExitCode::FAILURE;
        }
    };

    engine.session.update_filter(cli.filter);

    let stats = engine.session.stats();
    println!(
        "{} apps | Mac {} | iOS {} | cross-platform {} | avg rating {:.1}",
        stats.total_apps,
        stats.mac_apps,
        stats.ios_apps,
        stats.cross_platform_apps,
        stats.average_rating
    );
    println!();

    for record in engine.session.filtered() {
        println!(
            "{:<30} {:>12}  {:>5.1}  {}",
            record.name,
            engine.display_price(record.price),
            record.rating,
            record.platforms
        );
    }

    if let Err(e) = engine.persist_rates() {
        tracing::warn!(error = %e, "could not persist exchange-rate cache");
    }

    ExitCode::SUCCESS
}

/// Parsed command-line arguments.
struct CliArgs {
    config_path: Option<String>,
    catalog_path: Option<String>,
    filter: FilterUpdate,
}

impl CliArgs {
    /// Parses flag-style arguments into a config override and a filter update.
    fn parse(args: &[String]) -> Result<Self, String> {
        let mut config_path = None;
        let mut catalog_path = None;
        let mut filter = FilterUpdate::default();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            let mut value_for = |flag: &str| {
                iter.next()
                    .cloned()
                    .ok_or_else(|| format!("{flag} requires a value"))
            };

            match arg.as_str() {
                "--config" => config_path = Some(value_for("--config")?),
                "--catalog" => catalog_path = Some(value_for("--catalog")?),
                "--search" => filter.search_term = Some(value_for("--search")?),
                "--platform" => {
                    let raw = value_for("--platform")?;
                    let platform: PlatformFilter = raw.parse()?;
                    filter.platform = Some(platform);
                }
                "--max-price" => {
                    let raw = value_for("--max-price")?;
                    let ceiling: f64 = raw
                        .parse()
                        .map_err(|_| format!("invalid price ceiling: {raw}"))?;
                    filter.price_ceiling = Some(ceiling);
                }
                "--min-rating" => {
                    let raw = value_for("--min-rating")?;
                    let floor: f64 = raw
                        .parse()
                        .map_err(|_| format!("invalid rating floor: {raw}"))?;
                    filter.min_rating = Some(floor);
                }
                "--sort" => {
                    let raw = value_for("--sort")?;
                    let key: SortKey = raw.parse()?;
                    filter.sort_key = Some(key);
                }
                "--desc" => filter.sort_direction = Some(SortDirection::Descending),
                other => return Err(format!("unknown argument: {other}")),
            }
        }

        Ok(Self {
            config_path,
            catalog_path,
            filter,
        })
    }
}
