use clap::Parser;
use config::{
    Config as ConfigCrate, // Need this for builder
    ConfigError as ConfigCrateError,
    Environment,
    File,
    Map,
    Source,
    Value,
};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{path::PathBuf, str::FromStr};
use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

const DEFAULT_INPUT_FILE: &str = "input.txt";
const DEFAULT_OUTPUT_FILE: &str = "output.txt";
const DEFAULT_LOG_LEVEL: &str = "warn";
const ENV_PREFIX: &str = "WORDWRAP";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    ConfigFile(#[from] ConfigCrateError),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

// Everything optional so each layer only overrides what it sets.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(default)]
struct FileConfig {
    input_file: Option<String>,
    output_file: Option<String>,
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

/// Wrap text blocks from a file to per-block line widths
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// File of alternating text and width lines
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where the wrapped blocks are written
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level for messages on stderr (error, warn, info, debug, trace)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Print the resolved configuration and exit
    #[arg(long)]
    pub debug_config: bool,
}

/// Loads configuration from defaults, config file, environment and `args`.
pub fn load_config(args: CliArgs) -> Result<Config, ConfigError> {
    let env_source = Environment::with_prefix(ENV_PREFIX).separator("__");
    // Missing env vars are fine; a failed collect just means no overrides.
    let env_map: Map<String, Value> = env_source.collect().unwrap_or_else(|_| Map::new());

    build_config_from_args(args, Some(env_map))
}

fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "wordwrap").map(|dirs| dirs.config_dir().join("config.toml"))
}

// Split out so tests can pass their own args and override map
fn build_config_from_args(
    args: CliArgs,
    override_source: Option<Map<String, Value>>,
) -> Result<Config, ConfigError> {
    let config_file_path = args.config.clone().or_else(default_config_path);

    let mut config_builder = ConfigCrate::builder();

    if let Some(ref path) = config_file_path {
        config_builder = config_builder.add_source(File::from(path.clone()).required(false));
    }

    // Overrides beat the file
    if let Some(overrides) = override_source {
        for (key, value) in overrides {
            config_builder = config_builder.set_override(&key, value)?;
        }
    }

    let loaded_sources: FileConfig = config_builder.build()?.try_deserialize()?;

    // args > overrides > file > defaults
    let config = Config {
        input_file: args
            .input
            .or_else(|| loaded_sources.input_file.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT_FILE)),
        output_file: args
            .output
            .or_else(|| loaded_sources.output_file.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE)),
        log_level: args
            .log_level
            .or(loaded_sources.log_level)
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
    };

    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if LevelFilter::from_str(&config.log_level).is_err() {
        return Err(ConfigError::ValidationError(format!(
            "unknown log_level '{}'",
            config.log_level
        )));
    }

    if config.input_file == config.output_file {
        return Err(ConfigError::ValidationError(format!(
            "input and output are the same file: {}",
            config.input_file.display()
        )));
    }

    Ok(())
}
