//! Command-line flags, the optional TOML config file, and how they combine.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use casino_core::{MealType, menu::WeeklyMenu};
use clap::Parser;
use serde::Deserialize;

const DEFAULT_LOG_FILE: &str = "casino.log";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "casino", about = "Lunch reservations for the Casino cafeteria")]
pub struct Args {
  /// Path to a TOML config file (menu, log_file, meal_type).
  #[arg(short, long, value_name = "FILE", env = "CASINO_CONFIG")]
  pub config: Option<PathBuf>,

  /// Weekly menu file (TOML).
  #[arg(long, value_name = "FILE", env = "CASINO_MENU")]
  pub menu: Option<PathBuf>,

  /// Where log output is written (default: casino.log).
  #[arg(long, value_name = "FILE", env = "CASINO_LOG_FILE")]
  pub log_file: Option<PathBuf>,

  /// Meal type preselected for new reservations.
  #[arg(long, value_name = "TYPE")]
  pub meal_type: Option<MealType>,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Shape of the optional TOML config file.
#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
  #[serde(default)]
  pub menu:      Option<PathBuf>,
  #[serde(default)]
  pub log_file:  Option<PathBuf>,
  #[serde(default)]
  pub meal_type: Option<MealType>,
}

impl ConfigFile {
  pub fn load(path: &Path) -> Result<Self> {
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading config file {}", path.display()))?;
    toml::from_str(&raw)
      .with_context(|| format!("parsing config file {}", path.display()))
  }
}

// ─── Resolved settings ────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
  pub menu:      Option<PathBuf>,
  pub log_file:  PathBuf,
  pub meal_type: MealType,
}

impl Settings {
  /// CLI flags override the config file, which overrides defaults.
  pub fn resolve(args: Args, file: ConfigFile) -> Self {
    Self {
      menu:      args.menu.or(file.menu),
      log_file:  args
        .log_file
        .or(file.log_file)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE)),
      meal_type: args.meal_type.or(file.meal_type).unwrap_or_default(),
    }
  }

  /// Read the weekly menu, or an empty one when no file is configured.
  pub fn load_menu(&self) -> Result<WeeklyMenu> {
    let Some(path) = &self.menu else {
      return Ok(WeeklyMenu::default());
    };
    let raw = std::fs::read_to_string(path)
      .with_context(|| format!("reading menu file {}", path.display()))?;
    toml::from_str(&raw)
      .with_context(|| format!("parsing menu file {}", path.display()))
  }
}
