use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use dispatch_facade::config::Config;
use dispatch_facade::i18n::{
    self, CatalogValidator, LocaleResolution, MetricsReport, TranslationMetrics, ValidationReport,
};
use dispatch_facade::logging;

/// Everything the diagnostics run found out.
#[derive(Serialize)]
struct Report {
    resolution: LocaleResolution,
    catalog: ValidationReport,
    metrics: MetricsReport,
}

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;
    logging::init_logging(&config)?;

    let mut args = std::env::args().skip(1);
    let locale = args.next();
    let version = args.next();

    info!("Resolving locale");
    let resolution = i18n::set_language(version.as_deref(), locale.as_deref());

    let catalog = CatalogValidator::validate(resolution.locale);
    if catalog.has_errors() {
        info!("Catalog for {} has {} errors", resolution.locale, catalog.errors.len());
    }

    let report = Report {
        resolution,
        catalog,
        metrics: TranslationMetrics::global().report(),
    };

    let json = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
    println!("{json}");
    Ok(())
}
