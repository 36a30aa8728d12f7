// Building Info - command line front end
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/building-info --building 1 --metric area
// ```
//
// Or against a generated building:
//
// ```console
// $ ./target/release/building-info --generate 4 --rooms-per-level 6 --seed 7 --metric report --output-format text
// ```

use anyhow::{Context, Result};
use building_info::facility::{FacilityGenerator, Level, LocationRef, Room};
use building_info::service::{BuildingRegistry, CostSettings, LocationPath, LoggingConfig};
use building_info::types::config::CliArgs;
use building_info::types::{
    AppConfig, ConfigValidationError, CostKind, LocationId, OutputFormat, Query,
};
use clap::Parser;
use serde_json::{json, Value};
use std::process;
use tracing::{error, info};

fn main() {
    let args = CliArgs::parse();

    if args.print_config {
        match AppConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    let _logging = match LoggingConfig::for_cli(args.verbose, args.debug).init() {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

fn run(args: &CliArgs) -> Result<()> {
    let config = AppConfig::from_cli_args(args).context("Failed to load configuration")?;
    config.validate().context("Configuration validation failed")?;
    let query = args.query()?;
    let format = config.get_output_format()?;
    let selected = selected_path(args)?;
    info!("Configuration loaded and validated successfully");

    let registry = load_registry(args, &config)?;

    if let Some(save_path) = &args.save {
        registry
            .save_to_file(save_path)
            .with_context(|| format!("Failed to save buildings to {}", save_path))?;
        eprintln!("Buildings written to: {}", save_path);
    }

    if args.dry_run {
        eprintln!("Configuration and building data are valid.");
        eprintln!("Dry run mode - no metrics will be computed.");
        print_configuration_summary(&config, &registry);
        return Ok(());
    }

    let targets: Vec<LocationPath> = match selected {
        Some(path) => vec![path],
        None => registry
            .all_buildings()
            .iter()
            .map(|building| LocationPath::building(building.id().value()))
            .collect(),
    };

    let results = targets
        .iter()
        .map(|path| execute(&registry, query, path, &config, format))
        .collect::<Result<Vec<_>>>()?;
    let output = join_results(results, selected.is_some(), format)?;

    println!("{}", output);
    Ok(())
}

/// Turn the `--building/--level/--room` selectors into a path
///
/// A child selector without its parent is rejected rather than ignored.
fn selected_path(args: &CliArgs) -> Result<Option<LocationPath>, ConfigValidationError> {
    let missing = |child: &str, parent: &str| ConfigValidationError::MissingParentSelector {
        child: child.to_string(),
        parent: parent.to_string(),
    };

    match (args.building, args.level, args.room) {
        (None, Some(_), _) => Err(missing("level", "building")),
        (None, None, Some(_)) => Err(missing("room", "building")),
        (Some(_), None, Some(_)) => Err(missing("room", "level")),
        (None, None, None) => Ok(None),
        (Some(building), level, room) => Ok(Some(LocationPath {
            building: LocationId(building),
            level: level.map(LocationId),
            room: room.map(LocationId),
        })),
    }
}

fn load_registry(args: &CliArgs, config: &AppConfig) -> Result<BuildingRegistry> {
    match args.generate {
        Some(level_count) => {
            let mut generator = FacilityGenerator::from_seed(config.seed);
            let building = generator.generate_building(
                1,
                "Generated building",
                level_count,
                config.rooms_per_level,
            );
            info!(
                "Generated building with {} levels and {} rooms",
                building.level_count(),
                building.room_count()
            );
            Ok(BuildingRegistry::from_buildings(vec![building])?)
        }
        None => BuildingRegistry::load_from_file(&config.data_path)
            .with_context(|| format!("Failed to load building data from {}", config.data_path)),
    }
}

/// Run one query against one node; the value is JSON or a text block
fn execute(
    registry: &BuildingRegistry,
    query: Query,
    path: &LocationPath,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<Value> {
    let rendered = match query {
        Query::Metric(kind) => {
            let value = registry.metric_at(path, kind)?;
            match format {
                OutputFormat::Json => json!({ "path": path, "metric": kind.to_string(), "value": value }),
                OutputFormat::Text => Value::String(format!("{}: {} = {:.4}", path, kind, value)),
            }
        }
        Query::Cost(kind) => {
            let unit_cost = match kind {
                CostKind::Light => config.unit_light_cost,
                CostKind::Energy => config.unit_energy_cost,
            };
            let value = registry.cost_at(path, kind, unit_cost)?;
            match format {
                OutputFormat::Json => json!({
                    "path": path,
                    "metric": kind.to_string(),
                    "unitCost": unit_cost,
                    "value": value,
                }),
                OutputFormat::Text => Value::String(format!(
                    "{}: {} = {:.4} (unit {})",
                    path, kind, value, unit_cost
                )),
            }
        }
        Query::ExceedingHeating => {
            let result = registry.exceeding_heating_at(path, config.energy_limit)?;
            match format {
                OutputFormat::Json => {
                    let mut value = serde_json::to_value(&result)?;
                    value["path"] = serde_json::to_value(path)?;
                    value
                }
                OutputFormat::Text => {
                    let mut text = format!(
                        "{}: {} rooms above heating limit {} (energy consumption {:.4})",
                        path,
                        result.count(),
                        result.energy_limit,
                        result.total
                    );
                    for room in &result.rooms {
                        text.push_str(&format!("\n  - Room {} \"{}\"", room.id(), room.name()));
                    }
                    Value::String(text)
                }
            }
        }
        Query::Report => {
            let report = registry.report_at(path, CostSettings::from(config))?;
            match format {
                OutputFormat::Json => serde_json::to_value(&report)?,
                OutputFormat::Text => Value::String(report.summary_text()),
            }
        }
        Query::List => {
            let node = registry.resolve(path)?;
            match format {
                OutputFormat::Json => serde_json::to_value(node.to_owned_location())?,
                OutputFormat::Text => Value::String(render_tree(node)),
            }
        }
    };
    Ok(rendered)
}

fn join_results(results: Vec<Value>, single: bool, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json if single && results.len() == 1 => {
            Ok(serde_json::to_string_pretty(&results[0])?)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&results)?),
        OutputFormat::Text => Ok(results
            .iter()
            .map(|value| value.as_str().unwrap_or_default().to_string())
            .collect::<Vec<_>>()
            .join("\n\n")),
    }
}

fn render_tree(node: LocationRef<'_>) -> String {
    let mut lines = Vec::new();
    match node {
        LocationRef::Building(building) => {
            lines.push(format!("Building {} \"{}\"", building.id(), building.name()));
            for level in building.levels() {
                push_level(&mut lines, level, "  ");
            }
        }
        LocationRef::Level(level) => push_level(&mut lines, level, ""),
        LocationRef::Room(room) => lines.push(describe_room(room)),
    }
    lines.join("\n")
}

fn push_level(lines: &mut Vec<String>, level: &Level, indent: &str) {
    lines.push(format!("{}Level {} \"{}\"", indent, level.id(), level.name()));
    for room in level.rooms() {
        lines.push(format!("{}  {}", indent, describe_room(room)));
    }
}

fn describe_room(room: &Room) -> String {
    format!(
        "Room {} \"{}\" (area {}, cube {}, heating {}, light {})",
        room.id(),
        room.name(),
        room.area(),
        room.cube(),
        room.heating(),
        room.light()
    )
}

fn print_configuration_summary(config: &AppConfig, registry: &BuildingRegistry) {
    eprintln!("Configuration:");
    eprintln!("  Data Path: {}", config.data_path);
    eprintln!("  Unit Light Cost: {}", config.unit_light_cost);
    eprintln!("  Unit Energy Cost: {}", config.unit_energy_cost);
    eprintln!("  Energy Limit: {}", config.energy_limit);
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    eprintln!("Buildings:");
    eprintln!("  Total Buildings: {}", registry.len());
    eprintln!("  Total Levels: {}", registry.total_level_count());
    eprintln!("  Total Rooms: {}", registry.total_room_count());
}
