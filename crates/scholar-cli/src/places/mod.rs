//! Place search commands.
//!
//! `search` mounts a real place field against the configured geocoder, types
//! the query into it and optionally picks a suggestion, printing what the
//! host would receive.

mod search;

use clap::Subcommand;
use scholar_core::AppConfig;
use scholar_places::{is_country_code, TypeFilter};

pub(crate) use search::run_places_search;

/// Sub-commands available under `places`.
#[derive(Debug, Subcommand)]
pub enum PlacesCommands {
    /// Look up places and show the value each suggestion would produce
    Search {
        /// Text typed into the field
        query: String,
        /// Comma-separated place types, e.g. `(regions),locality`
        #[arg(long, value_delimiter = ',')]
        types: Vec<String>,
        /// Comma-separated two-letter country codes
        #[arg(long, value_delimiter = ',', default_value = "ph", value_parser = parse_country)]
        country: Vec<String>,
        /// Choose the suggestion at this index (0-based)
        #[arg(long)]
        pick: Option<usize>,
    },
    /// Show the provider categories a type filter expands to
    Types {
        /// Comma-separated place types
        #[arg(value_delimiter = ',')]
        types: Vec<String>,
    },
}

/// # Errors
///
/// Returns an error if the geocoder is unavailable or the lookup fails.
pub(crate) async fn run_places(config: &AppConfig, command: PlacesCommands) -> anyhow::Result<()> {
    match command {
        PlacesCommands::Search {
            query,
            types,
            country,
            pick,
        } => run_places_search(config, &query, type_filter(&types), &country, pick).await,
        PlacesCommands::Types { types } => {
            let filter = type_filter(&types);
            for place_type in filter.iter() {
                let expanded: Vec<&str> = place_type
                    .provider_categories()
                    .iter()
                    .map(|c| c.as_str())
                    .collect();
                println!(
                    "{:<30}{}",
                    place_type.as_str(),
                    if expanded.is_empty() {
                        "(unmapped)".to_string()
                    } else {
                        expanded.join(", ")
                    }
                );
            }
            println!(
                "{:<30}{}",
                "types parameter",
                filter.provider_param().unwrap_or_else(|| "(none)".to_string())
            );
            Ok(())
        }
    }
}

/// Accepts a two-letter country code and lowercases it.
fn parse_country(raw: &str) -> Result<String, String> {
    let code = raw.trim();
    if is_country_code(code) {
        Ok(code.to_ascii_lowercase())
    } else {
        Err(format!("invalid country code '{raw}'; expected two letters"))
    }
}

/// Empty input means the regions-and-localities default.
fn type_filter(types: &[String]) -> TypeFilter {
    if types.is_empty() {
        TypeFilter::regions_and_localities()
    } else {
        TypeFilter::parse(types)
    }
}
