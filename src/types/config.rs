//! Configuration structures for the building info front end
//!
//! This module contains the application configuration, the command line
//! arguments and the validation logic. Values are layered: built-in defaults,
//! then an optional JSON configuration file, then command line flags.

use super::{OutputFormat, Query};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default configuration values
pub mod defaults {
    /// Bundled building data loaded at startup
    pub const DATA_PATH: &str = "data/buildings.json";

    /// Unit cost applied to the light power ratio
    pub const UNIT_LIGHT_COST: f64 = 1.0;

    /// Unit cost applied to the energy consumption ratio
    pub const UNIT_ENERGY_COST: f64 = 1.0;

    /// Heating ratio above which a room is reported as exceeding
    pub const ENERGY_LIMIT: f64 = 0.1;

    /// Rooms per generated level when `--rooms-per-level` is not given
    pub const ROOMS_PER_LEVEL: usize = 5;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "building-info",
    version = "0.1.0",
    about = "Building Info - Area, volume, lighting and heating metrics for buildings",
    long_about = "Loads a tree of buildings, levels and rooms and computes aggregate metrics over any building, level or room in it.

EXAMPLES:
    # List every building in the bundled data file
    building-info --metric list

    # Total area of building 1
    building-info --building 1 --metric area

    # Energy consumption of level 2 in building 1
    building-info --building 1 --level 2 --metric energy-consumption

    # Cost of lighting with a unit cost of 0.5
    building-info --building 1 --metric light-cost --light-cost 0.5

    # Rooms whose heating ratio exceeds 0.09
    building-info --building 1 --metric exceeding-heating --energy-limit 0.09

    # Every metric at once, as text
    building-info --building 1 --metric report --output-format text

    # Generate a synthetic building with 3 levels and save it
    building-info --generate 3 --seed 7 --save generated.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Use --print-config to generate a template configuration file."
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Building data file
    #[arg(
        long,
        help = "Building data file (JSON array of buildings)",
        long_help = "Path to the JSON file holding the buildings to load at startup. Default: data/buildings.json"
    )]
    pub data: Option<String>,

    /// Building to query
    #[arg(short, long, help = "Building id")]
    pub building: Option<i64>,

    /// Level to query (requires --building)
    #[arg(short, long, help = "Level id within the building")]
    pub level: Option<i64>,

    /// Room to query (requires --building and --level)
    #[arg(short, long, help = "Room id within the level")]
    pub room: Option<i64>,

    /// What to compute
    #[arg(
        short,
        long,
        default_value = "report",
        help = "Metric to compute",
        long_help = "One of: area, cube, light-power, energy-consumption, light-cost, energy-cost, exceeding-heating, report, list. Default: report"
    )]
    pub metric: String,

    /// Unit cost of lighting
    #[arg(long, help = "Unit cost applied to the light power ratio")]
    pub light_cost: Option<f64>,

    /// Unit cost of heating energy
    #[arg(long, help = "Unit cost applied to the energy consumption ratio")]
    pub energy_cost: Option<f64>,

    /// Heating ratio threshold
    #[arg(long, help = "Heating ratio above which rooms are reported")]
    pub energy_limit: Option<f64>,

    /// Output format for results
    #[arg(long, help = "Output format (json or text)")]
    pub output_format: Option<String>,

    /// Generate a synthetic building with this many levels
    #[arg(long, help = "Generate a synthetic building with the given number of levels")]
    pub generate: Option<usize>,

    /// Rooms per generated level
    #[arg(long, help = "Rooms per generated level (used with --generate)")]
    pub rooms_per_level: Option<usize>,

    /// Random seed for reproducible generation
    #[arg(long, help = "Random seed for reproducible generation")]
    pub seed: Option<u64>,

    /// Write the loaded (or generated) buildings to this path
    #[arg(long, help = "Write the buildings to a JSON file after loading")]
    pub save: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration and data without computing
    #[arg(long, help = "Validate configuration and data without computing")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

impl CliArgs {
    /// Parse the requested query
    pub fn query(&self) -> Result<Query, ConfigValidationError> {
        self.metric
            .parse::<Query>()
            .map_err(|_| ConfigValidationError::InvalidQuery(self.metric.clone()))
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Building data file
    pub data_path: Option<String>,

    /// Unit cost of lighting
    pub unit_light_cost: Option<f64>,

    /// Unit cost of heating energy
    pub unit_energy_cost: Option<f64>,

    /// Heating ratio threshold
    pub energy_limit: Option<f64>,

    /// Output format for results
    pub output_format: Option<String>,

    /// Rooms per generated level
    pub rooms_per_level: Option<usize>,

    /// Random seed for reproducible generation
    pub seed: Option<u64>,
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Building data file loaded at startup
    pub data_path: String,

    /// Unit cost applied by the light cost metric
    pub unit_light_cost: f64,

    /// Unit cost applied by the energy cost metric
    pub unit_energy_cost: f64,

    /// Heating ratio threshold used by the exceedance query and reports
    pub energy_limit: f64,

    /// Output format for results
    pub output_format: String,

    /// Rooms per generated level
    pub rooms_per_level: usize,

    /// Random seed for reproducible generation
    pub seed: Option<u64>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for the application configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// A numeric setting is NaN or infinite
    #[error("Invalid value for {field}: {value} (must be a finite number)")]
    NonFinite {
        /// Name of the offending field
        field: String,
        /// The rejected value
        value: f64,
    },

    /// Output format is not recognised
    #[error("Unknown output format: {0} (supported: json, text)")]
    InvalidOutputFormat(String),

    /// Query name is not recognised
    #[error("Unknown metric: {0}")]
    InvalidQuery(String),

    /// Generated levels need at least one room
    #[error("Rooms per level must be greater than 0, got {0}")]
    InvalidRoomsPerLevel(usize),

    /// A level or room was selected without its parent
    #[error("--{child} requires --{parent}")]
    MissingParentSelector {
        /// The selector that was given
        child: String,
        /// The selector it depends on
        parent: String,
    },
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: defaults::DATA_PATH.to_string(),
            unit_light_cost: defaults::UNIT_LIGHT_COST,
            unit_energy_cost: defaults::UNIT_ENERGY_COST,
            energy_limit: defaults::ENERGY_LIMIT,
            output_format: "json".to_string(),
            rooms_per_level: defaults::ROOMS_PER_LEVEL,
            seed: None,
        }
    }
}

impl AppConfig {
    /// Create a new configuration from command line arguments and optional config file
    pub fn from_args() -> Result<Self, ConfigError> {
        let args = CliArgs::parse();
        Self::from_cli_args(&args)
    }

    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(config_path) => Self::from_file(config_path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(args);
        Ok(config)
    }

    /// Load configuration from a JSON file, merging with defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Merge a partial config file over the defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            data_path: config_file.data_path.unwrap_or(defaults.data_path),
            unit_light_cost: config_file.unit_light_cost.unwrap_or(defaults.unit_light_cost),
            unit_energy_cost: config_file.unit_energy_cost.unwrap_or(defaults.unit_energy_cost),
            energy_limit: config_file.energy_limit.unwrap_or(defaults.energy_limit),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            rooms_per_level: config_file.rooms_per_level.unwrap_or(defaults.rooms_per_level),
            seed: config_file.seed.or(defaults.seed),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(value) = &args.data {
            self.data_path = value.clone();
        }
        if let Some(value) = args.light_cost {
            self.unit_light_cost = value;
        }
        if let Some(value) = args.energy_cost {
            self.unit_energy_cost = value;
        }
        if let Some(value) = args.energy_limit {
            self.energy_limit = value;
        }
        if let Some(value) = &args.output_format {
            self.output_format = value.clone();
        }
        if let Some(value) = args.rooms_per_level {
            self.rooms_per_level = value;
        }
        if let Some(value) = args.seed {
            self.seed = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    ///
    /// Costs and the limit may be negative or zero; only values that cannot
    /// take part in arithmetic are rejected.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        Self::validate_finite("unit_light_cost", self.unit_light_cost)?;
        Self::validate_finite("unit_energy_cost", self.unit_energy_cost)?;
        Self::validate_finite("energy_limit", self.energy_limit)?;

        self.get_output_format()?;

        if self.rooms_per_level == 0 {
            return Err(ConfigValidationError::InvalidRoomsPerLevel(self.rooms_per_level));
        }

        Ok(())
    }

    fn validate_finite(field: &str, value: f64) -> Result<(), ConfigValidationError> {
        if !value.is_finite() {
            return Err(ConfigValidationError::NonFinite { field: field.to_string(), value });
        }
        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, ConfigValidationError> {
        self.output_format
            .parse::<OutputFormat>()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))
    }
}
