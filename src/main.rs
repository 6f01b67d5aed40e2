use catalog_stats::config::{load_config, AppConfig};
use catalog_stats::DatasetAnalyzer;
use std::env;
use std::path::Path;
use std::process::ExitCode;
use tracing::{error, info, warn};

const CONFIG_PATH: &str = "config.json";

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let config = match resolve_config(env::args().nth(1)) {
        Some(cfg) => cfg,
        None => return ExitCode::FAILURE,
    };

    let separator = match config.separator_byte() {
        Ok(sep) => sep,
        Err(e) => {
            error!("Config error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!("Loading dataset {}...", config.dataset_path.display());
    let analyzer = match DatasetAnalyzer::new(&config.dataset_path, separator) {
        Ok(a) => a,
        Err(e) => {
            error!("Dataset load error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let report = analyzer.report();
    info!("Free games: {:.2}%", report.price_split.free);
    info!("Paid games: {:.2}%", report.price_split.paid);
    info!("Year(s) with the most new games: {}", report.busiest_year);
    match &report.top_reviewed {
        Some(top) => info!(
            "Game with the most positive reviews: {} ({})",
            top.name, top.positive
        ),
        None => info!("No game has a positive review count"),
    }

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            error!("Report serialization failed: {}", e);
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}

/// The positional path wins over `config.json`; the config still supplies the separator.
fn resolve_config(dataset_arg: Option<String>) -> Option<AppConfig> {
    let from_file = if Path::new(CONFIG_PATH).exists() {
        match load_config(CONFIG_PATH) {
            Ok(cfg) => Some(cfg),
            Err(e) => {
                warn!("Ignoring {}: {}", CONFIG_PATH, e);
                None
            }
        }
    } else {
        None
    };

    match (dataset_arg, from_file) {
        (Some(path), Some(cfg)) => Some(AppConfig {
            dataset_path: path.into(),
            ..cfg
        }),
        (Some(path), None) => Some(AppConfig::new(path)),
        (None, Some(cfg)) => Some(cfg),
        (None, None) => {
            error!("Usage: catalog-stats <dataset.csv> (or provide {})", CONFIG_PATH);
            None
        }
    }
}
