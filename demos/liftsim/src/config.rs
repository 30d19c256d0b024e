//! TOML run configuration and its merge with command-line flags.
//!
//! Precedence for every setting: flag, then config file, then the request
//! file's metadata line, then the built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use lift_core::{PolicyKind, SimConfig};
use lift_schedule::FileHeader;

use crate::Args;

pub const DEFAULT_PASSENGERS:   usize = 20;
pub const DEFAULT_WINDOW_TICKS: u64   = 60;

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub simulation: SimulationConfig,
    pub generator:  GeneratorConfig,
    pub output:     OutputConfig,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationConfig {
    pub floors:      Option<u32>,
    pub total_ticks: Option<u64>,
    pub policy:      Option<PolicyKind>,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub passengers:   Option<usize>,
    pub window_ticks: Option<u64>,
    pub seed:         Option<u64>,
}

#[derive(Deserialize, Clone, Debug, Default)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub dir: Option<PathBuf>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

/// Everything the driver needs after merging flags, file and header.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub sim:          SimConfig,
    pub passengers:   usize,
    pub window_ticks: u64,
    pub output_dir:   Option<PathBuf>,
}

impl Settings {
    pub fn resolve(args: &Args, file: &FileConfig, header: FileHeader) -> Result<Self> {
        let defaults = SimConfig::default();
        let policy = match &args.policy {
            Some(name) => name.parse::<PolicyKind>()?,
            None => file.simulation.policy.unwrap_or(defaults.policy),
        };

        let sim = SimConfig {
            floors: args
                .floors
                .or(file.simulation.floors)
                .or(header.floors)
                .unwrap_or(defaults.floors),
            total_ticks: args
                .ticks
                .or(file.simulation.total_ticks)
                .or(header.total_ticks)
                .unwrap_or(defaults.total_ticks),
            seed: args.seed.or(file.generator.seed).unwrap_or(defaults.seed),
            policy,
        };
        sim.validate()?;

        Ok(Self {
            sim,
            passengers: args
                .generate
                .or(file.generator.passengers)
                .unwrap_or(DEFAULT_PASSENGERS),
            window_ticks: file.generator.window_ticks.unwrap_or(DEFAULT_WINDOW_TICKS),
            output_dir: args.out.clone().or_else(|| file.output.dir.clone()),
        })
    }
}
