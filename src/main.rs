use clap::{Args, Parser, Subcommand, ValueEnum};
use ppe_facets::catalog::{CatalogImporter, Locale, Product};
use ppe_facets::config::{AppConfig, ConfigError};
use ppe_facets::error::AppError;
use ppe_facets::facets::{FacetDefinition, FacetEngine, FacetKind, FacetSelection, FacetValue};
use ppe_facets::hazard::{HazardRegistry, LeafOutcome};
use ppe_facets::scope::{categorize, scope, CategoryKey, KEYWORD_TABLE_REVISION};
use ppe_facets::standards::{band, GradeBand};
use ppe_facets::telemetry;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "ppe-facets",
    about = "Inspect hazard labels, category views and facet filters for a PPE catalogue",
    version
)]
struct Cli {
    /// Catalogue JSON export (defaults to PPE_CATALOG_PATH)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,
    /// Language for label names: en or it (defaults to PPE_LOCALE)
    #[arg(long, global = true, value_parser = parse_locale)]
    locale: Option<Locale>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the hazard label registry (default command)
    Rules,
    /// Show the hazard labels each product earns
    Labels(LabelsArgs),
    /// Show which category views products fall into
    Scope(ScopeArgs),
    /// Print the available options for every facet of a category
    Facets(CategoryArgs),
    /// Filter a category view by facet selections
    Filter(FilterArgs),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Csv,
}

#[derive(Args, Debug)]
struct LabelsArgs {
    /// Only products in this category view
    #[arg(long, value_parser = parse_category)]
    category: Option<CategoryKey>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Print the per-requirement outcome of one label instead
    #[arg(long)]
    explain: Option<String>,
}

#[derive(Args, Debug)]
struct ScopeArgs {
    /// List the products of one view; without it every product's views are shown
    #[arg(long, value_parser = parse_category)]
    category: Option<CategoryKey>,
}

#[derive(Args, Debug)]
struct CategoryArgs {
    #[arg(long, value_parser = parse_category)]
    category: CategoryKey,
}

#[derive(Args, Debug)]
struct FilterArgs {
    #[arg(long, value_parser = parse_category)]
    category: CategoryKey,
    /// facet=value; repeat to select several values
    #[arg(long = "select")]
    selections: Vec<String>,
    /// Enable a boolean facet
    #[arg(long = "flag")]
    flags: Vec<String>,
    /// facet=min..max; either bound may be left out
    #[arg(long = "range")]
    ranges: Vec<String>,
}

#[derive(Debug, Serialize)]
struct LabelRow<'a> {
    product_id: &'a str,
    product_name: &'a str,
    labels: String,
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let locale = cli.locale.unwrap_or(config.catalog.locale);
    let catalog_path = cli.catalog.or(config.catalog.path);
    info!(?config.environment, ?locale, "ppe-facets starting");

    match cli.command.unwrap_or(Command::Rules) {
        Command::Rules => {
            print_rules(locale);
            Ok(())
        }
        Command::Labels(args) => run_labels(&load_catalog(catalog_path.as_deref())?, args, locale),
        Command::Scope(args) => {
            run_scope(&load_catalog(catalog_path.as_deref())?, args);
            Ok(())
        }
        Command::Facets(args) => {
            run_facets(&load_catalog(catalog_path.as_deref())?, args, locale);
            Ok(())
        }
        Command::Filter(args) => run_filter(&load_catalog(catalog_path.as_deref())?, args),
    }
}

fn parse_locale(raw: &str) -> Result<Locale, String> {
    Locale::parse(raw).ok_or_else(|| format!("unknown locale '{raw}', expected en or it"))
}

fn parse_category(raw: &str) -> Result<CategoryKey, String> {
    CategoryKey::parse(raw).ok_or_else(|| {
        let known: Vec<&str> = CategoryKey::ALL.iter().map(|key| key.slug()).collect();
        format!("unknown category '{raw}', expected one of: {}", known.join(", "))
    })
}

fn load_catalog(path: Option<&Path>) -> Result<Vec<Product>, AppError> {
    let path = path.ok_or(ConfigError::MissingCatalogPath)?;
    Ok(CatalogImporter::from_path(path)?)
}

fn print_rules(locale: Locale) {
    let labels = HazardRegistry::standard().labels();
    println!(
        "{} hazard labels, category keyword tables rev {KEYWORD_TABLE_REVISION}",
        labels.len()
    );
    for label in labels {
        let fields: Vec<&str> = label
            .referenced_fields()
            .into_iter()
            .map(|field| field.code())
            .collect();
        println!("{} ({})", label.id, label.display_name(locale));
        println!("    {}", label.description);
        println!("    reads: {}", fields.join(", "));
    }
}

fn outcome_band(outcome: &LeafOutcome) -> GradeBand {
    outcome
        .observed
        .value()
        .map_or(GradeBand::NotRated, |value| band(outcome.field, value))
}

fn run_labels(products: &[Product], args: LabelsArgs, locale: Locale) -> Result<(), AppError> {
    let registry = HazardRegistry::standard();
    let selected: Vec<&Product> = match args.category {
        Some(category) => scope(products, category),
        None => products.iter().collect(),
    };

    if let Some(id) = args.explain.as_deref() {
        let label = registry
            .find(id)
            .ok_or_else(|| AppError::Usage(format!("unknown hazard label '{id}'")))?;
        for product in selected {
            let verdict = if label.applies_to(product) { "granted" } else { "not granted" };
            println!("{} {}: {}", product.id, product.name, verdict);
            for outcome in registry.explain(product, id).unwrap_or_default() {
                println!("    {outcome} [{}]", outcome_band(&outcome).label());
            }
        }
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => {
            for product in selected {
                let names: Vec<&str> = registry
                    .applicable_labels(product)
                    .into_iter()
                    .map(|label| label.display_name(locale))
                    .collect();
                let names = if names.is_empty() {
                    "(none)".to_string()
                } else {
                    names.join(", ")
                };
                println!("{} {}: {}", product.id, product.name, names);
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(std::io::stdout().lock());
            for product in selected {
                let ids: Vec<&str> = registry
                    .applicable_labels(product)
                    .into_iter()
                    .map(|label| label.id)
                    .collect();
                writer.serialize(LabelRow {
                    product_id: &product.id.0,
                    product_name: &product.name,
                    labels: ids.join(";"),
                })?;
            }
            writer.flush()?;
        }
    }

    Ok(())
}

fn run_scope(products: &[Product], args: ScopeArgs) {
    match args.category {
        Some(category) => {
            let scoped = scope(products, category);
            println!("{category}: {} of {} products", scoped.len(), products.len());
            for product in scoped {
                println!("- {} {}", product.id, product.name);
            }
        }
        None => {
            for product in products {
                let views: Vec<&str> = categorize(product)
                    .into_iter()
                    .map(CategoryKey::slug)
                    .collect();
                let views = if views.is_empty() {
                    "(unclassified)".to_string()
                } else {
                    views.join(", ")
                };
                println!("{} {}: {}", product.id, product.name, views);
            }
        }
    }
}

fn run_facets(products: &[Product], args: CategoryArgs, locale: Locale) {
    let engine = FacetEngine::new(products, args.category);
    println!("{}: {} products", engine.category(), engine.products().len());
    for options in engine.facet_options() {
        let values: Vec<String> = options.values.iter().map(ToString::to_string).collect();
        let values = if values.is_empty() {
            "(no options)".to_string()
        } else {
            values.join(", ")
        };
        println!(
            "{} [{}] {}: {}",
            options.facet.id,
            options.facet.kind.as_str(),
            options.facet.label.get(locale),
            values
        );
    }
}

fn run_filter(products: &[Product], args: FilterArgs) -> Result<(), AppError> {
    let engine = FacetEngine::new(products, args.category);
    let selection = build_selection(&engine, &args)?;
    let matched = engine.filter(&selection);

    println!(
        "{}: {} of {} products match",
        engine.category(),
        matched.len(),
        engine.products().len()
    );
    for product in matched {
        println!("- {} {}", product.id, product.name);
    }
    Ok(())
}

fn build_selection(engine: &FacetEngine<'_>, args: &FilterArgs) -> Result<FacetSelection, AppError> {
    let mut selection = FacetSelection::new();

    let mut chosen: BTreeMap<&str, BTreeSet<FacetValue>> = BTreeMap::new();
    for raw in &args.selections {
        let (facet, value) = split_assignment(raw)?;
        let definition = known_facet(engine, facet)?;
        chosen
            .entry(definition.id)
            .or_default()
            .insert(resolve_value(engine, definition.id, value));
    }
    for (facet, values) in chosen {
        let single = engine
            .facet(facet)
            .is_some_and(|definition| definition.kind == FacetKind::SingleSelect);
        match (single, values.len()) {
            (true, 1) => {
                if let Some(value) = values.into_iter().next() {
                    selection.set_single(facet, value);
                }
            }
            (true, _) => {
                return Err(AppError::Usage(format!(
                    "facet '{facet}' takes a single value"
                )))
            }
            (false, _) => {
                for value in values {
                    selection.toggle(facet, value);
                }
            }
        }
    }

    for facet in &args.flags {
        let definition = known_facet(engine, facet.trim())?;
        selection.set_flag(definition.id, true);
    }

    for raw in &args.ranges {
        let (facet, bounds) = split_assignment(raw)?;
        let definition = known_facet(engine, facet)?;
        let (min, max) = parse_range(bounds)?;
        selection.set_range(definition.id, min, max);
    }

    Ok(selection)
}

fn known_facet(
    engine: &FacetEngine<'_>,
    facet: &str,
) -> Result<&'static FacetDefinition, AppError> {
    engine.facet(facet).ok_or_else(|| {
        AppError::Usage(format!(
            "category '{}' has no facet '{facet}'",
            engine.category()
        ))
    })
}

fn split_assignment(raw: &str) -> Result<(&str, &str), AppError> {
    match raw.split_once('=') {
        Some((facet, value)) if !facet.trim().is_empty() => Ok((facet.trim(), value.trim())),
        _ => Err(AppError::Usage(format!(
            "expected facet=value, got '{raw}'"
        ))),
    }
}

/// Prefers an existing option whose text matches, so `3` selects the EN 166
/// code rather than the number 3.
fn resolve_value(engine: &FacetEngine<'_>, facet: &str, raw: &str) -> FacetValue {
    engine
        .options_for(facet)
        .unwrap_or_default()
        .into_iter()
        .find(|option| option.to_string() == raw)
        .unwrap_or_else(|| FacetValue::parse(raw))
}

fn parse_range(raw: &str) -> Result<(Option<f64>, Option<f64>), AppError> {
    let (min, max) = raw
        .split_once("..")
        .ok_or_else(|| AppError::Usage(format!("expected min..max, got '{raw}'")))?;
    Ok((parse_bound(min)?, parse_bound(max)?))
}

fn parse_bound(raw: &str) -> Result<Option<f64>, AppError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(bound) if bound.is_finite() => Ok(Some(bound)),
        _ => Err(AppError::Usage(format!("'{raw}' is not a number"))),
    }
}
