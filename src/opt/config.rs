// CLASSIFICATION: COMMUNITY
// Filename: config.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

use std::path::{Path, PathBuf};

use clap::Parser;
use log::debug;
use serde::Deserialize;
use thiserror::Error;

use crate::frontend::infer_tag;
use crate::output::{infer_target_from_path, Target};
use crate::pass_framework::PassFilter;

/// Environment variable naming a config file used when `--config` is absent.
pub const CONFIG_ENV: &str = "CHOCO_OPT_CONFIG";

/// Frontend used for stdin or extension-less inputs.
pub const DEFAULT_FRONTEND: &str = "ir";

#[derive(Parser, Debug)]
#[command(name = "choco-opt", author, version, about = "Choco toy-language optimizer driver")]
pub struct Cli {
    /// Input file; stdin when omitted or `-`.
    pub input: Option<PathBuf>,
    /// Output file; stdout when omitted or `-`.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
    /// Frontend tag (defaults to the input file extension).
    #[arg(short = 'f', long)]
    pub frontend: Option<String>,
    /// Output target: ir or json.
    #[arg(short = 't', long)]
    pub target: Option<String>,
    /// Comma separated pass pipeline, e.g. `fold-constants,dead-code`.
    #[arg(short = 'p', long)]
    pub passes: Option<String>,
    /// List available passes (all, native or integrated) and exit.
    #[arg(long = "list-passes", value_name = "FILTER", num_args = 0..=1, require_equals = true, default_missing_value = "all")]
    pub list_passes: Option<PassFilter>,
    /// Re-validate the module after every pass.
    #[arg(long)]
    pub verify_each: bool,
    /// Print the module to stderr after every pass.
    #[arg(long)]
    pub print_between_passes: bool,
    /// Accept operations from unregistered dialects.
    #[arg(long)]
    pub allow_unregistered_dialect: bool,
    /// Process `// -----` separated chunks independently.
    #[arg(long)]
    pub split_input_file: bool,
    /// TOML file providing defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Enable debug logging.
    #[arg(long)]
    pub trace: bool,
}

/// Errors produced while resolving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("unknown output target `{0}`")]
    UnknownTarget(String),
}

/// Defaults loadable from a TOML file. CLI flags take precedence.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub passes: Option<Vec<String>>,
    pub target: Option<String>,
    pub frontend: Option<String>,
    pub verify_each: Option<bool>,
    pub allow_unregistered_dialect: Option<bool>,
}

impl FileConfig {
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("loaded config from {}", path.display());
        Self::from_toml(&text)
    }
}

/// Resolved configuration after CLI parsing.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub frontend: Option<String>,
    pub target: Target,
    pub passes: Vec<String>,
    pub list_passes: Option<PassFilter>,
    pub verify_each: bool,
    pub print_between_passes: bool,
    pub allow_unregistered_dialect: bool,
    pub split_input_file: bool,
}

impl Config {
    /// Resolve the CLI against `--config`, or the file named by
    /// `CHOCO_OPT_CONFIG` when the flag is absent.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let path = cli
            .config
            .clone()
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        let file = match path {
            Some(p) => FileConfig::load(&p)?,
            None => FileConfig::default(),
        };
        Self::merge(cli, file)
    }

    /// Combine CLI flags with file defaults. Target precedence: `--target`,
    /// config file, output extension, `ir`.
    pub fn merge(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let target = match cli.target.clone().or(file.target) {
            Some(name) => name
                .parse::<Target>()
                .map_err(|_| ConfigError::UnknownTarget(name))?,
            None => cli
                .output
                .as_deref()
                .and_then(infer_target_from_path)
                .unwrap_or_default(),
        };
        let passes = match &cli.passes {
            Some(spec) => spec.split(',').map(str::to_owned).collect(),
            None => file.passes.unwrap_or_default(),
        };
        Ok(Config {
            input: cli.input.clone().filter(|p| p.as_os_str() != "-"),
            output: cli.output.clone().filter(|p| p.as_os_str() != "-"),
            frontend: cli.frontend.clone().or(file.frontend),
            target,
            passes,
            list_passes: cli.list_passes,
            verify_each: cli.verify_each || file.verify_each.unwrap_or(false),
            print_between_passes: cli.print_between_passes,
            allow_unregistered_dialect: cli.allow_unregistered_dialect
                || file.allow_unregistered_dialect.unwrap_or(false),
            split_input_file: cli.split_input_file,
        })
    }

    /// Explicit `--frontend`, else the input extension, else `ir`.
    pub fn frontend_tag(&self) -> String {
        self.frontend
            .clone()
            .or_else(|| self.input.as_deref().and_then(infer_tag))
            .unwrap_or_else(|| DEFAULT_FRONTEND.to_string())
    }
}
