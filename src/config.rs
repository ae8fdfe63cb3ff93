//! Board configuration: optional JSON file plus command line overrides
//!
//! Every field is optional in the file; missing ones fall back to the
//! reference board (54 x 33 mm, 4 mm inset, horizontal).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

use crate::layout::params::{
    GridSettings, LayoutParams, DEFAULT_BOARD_LENGTH, DEFAULT_BOARD_WIDTH, DEFAULT_INSET,
    DEFAULT_LABEL,
};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    pub board_width: f64,
    pub board_length: f64,
    pub inset: f64,
    pub horizontal: bool,
    pub label: String,
    pub grid: GridOverrides,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            board_width: DEFAULT_BOARD_WIDTH,
            board_length: DEFAULT_BOARD_LENGTH,
            inset: DEFAULT_INSET,
            horizontal: true,
            label: DEFAULT_LABEL.to_string(),
            grid: GridOverrides::default(),
        }
    }
}

/// Replacements for individual grid constants; unset fields keep the
/// orientation's reference value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GridOverrides {
    pub pitch: Option<f64>,
    pub holes_per_group: Option<usize>,
    pub bus_count: Option<usize>,
    pub gap: Option<f64>,
    pub edge_clearance: Option<f64>,
    pub extra_rows: Option<usize>,
    pub proto_columns: Option<usize>,
    pub proto_ranks: Option<usize>,
    pub bus_trim: Option<usize>,
}

impl GridOverrides {
    pub fn apply(&self, mut settings: GridSettings) -> GridSettings {
        if let Some(pitch) = self.pitch {
            settings.pitch = pitch;
        }
        if let Some(holes) = self.holes_per_group {
            settings.holes_per_group = holes;
        }
        if let Some(count) = self.bus_count {
            settings.bus_count = count;
        }
        if let Some(gap) = self.gap {
            settings.gap = gap;
        }
        if let Some(clearance) = self.edge_clearance {
            settings.edge_clearance = clearance;
        }
        if let Some(rows) = self.extra_rows {
            settings.extra_rows = rows;
        }
        if let Some(columns) = self.proto_columns {
            settings.proto_columns = columns;
        }
        if let Some(ranks) = self.proto_ranks {
            settings.proto_ranks = ranks;
        }
        if let Some(trim) = self.bus_trim {
            settings.bus_trim = trim;
        }
        settings
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse board configuration")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            board_width: self.board_width,
            board_length: self.board_length,
            inset: self.inset,
            horizontal: self.horizontal,
            label: self.label.clone(),
        }
    }

    /// Reference grid for the configured orientation with the file's overrides applied
    pub fn grid_settings(&self) -> GridSettings {
        self.grid.apply(GridSettings::for_orientation(self.horizontal))
    }
}

/// Parsed command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub board_width: Option<f64>,
    pub board_length: Option<f64>,
    pub inset: Option<f64>,
    pub horizontal: Option<bool>,
    pub label: Option<String>,
    pub output: Option<PathBuf>,
    pub help: bool,
}

pub const USAGE: &str = "\
Usage: genprotoboard [options]

Writes an EAGLE board file for a prototyping breadboard PCB to stdout.

Options:
  --config <file>     JSON board configuration
  --width <mm>        Board width (default 54)
  --length <mm>       Board length (default 33)
  --inset <mm>        Mounting hole inset and corner radius (default 4)
  --horizontal        Main grid along the width (default)
  --vertical          Main grid along the length
  --label <text>      Silkscreen label
  --output <file>     Write to a file instead of stdout
  --help              Show this message

Set RUST_LOG=info (or debug) for generation details on stderr.";

impl CliOptions {
    /// Parses arguments, excluding the program name
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = CliOptions::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => options.config = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--width" => options.board_width = Some(parse_length(&arg, args.next())?),
                "--length" => options.board_length = Some(parse_length(&arg, args.next())?),
                "--inset" => options.inset = Some(parse_length(&arg, args.next())?),
                "--horizontal" => options.horizontal = Some(true),
                "--vertical" => options.horizontal = Some(false),
                "--label" => options.label = Some(value_for(&arg, args.next())?),
                "--output" => options.output = Some(PathBuf::from(value_for(&arg, args.next())?)),
                "--help" | "-h" => options.help = true,
                other => bail!("unknown argument '{}'", other),
            }
        }
        Ok(options)
    }

    /// Loads the config file if one was given, then applies command line values on top
    pub fn resolve(&self) -> Result<BoardConfig> {
        let mut config = match &self.config {
            Some(path) => BoardConfig::load(path)?,
            None => BoardConfig::default(),
        };
        if let Some(width) = self.board_width {
            config.board_width = width;
        }
        if let Some(length) = self.board_length {
            config.board_length = length;
        }
        if let Some(inset) = self.inset {
            config.inset = inset;
        }
        if let Some(horizontal) = self.horizontal {
            config.horizontal = horizontal;
        }
        if let Some(label) = &self.label {
            config.label = label.clone();
        }
        Ok(config)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => bail!("{} requires a value", flag),
    }
}

fn parse_length(flag: &str, value: Option<String>) -> Result<f64> {
    let value = value_for(flag, value)?;
    value
        .parse::<f64>()
        .with_context(|| format!("{} expects a number in millimeters, got '{}'", flag, value))
}
