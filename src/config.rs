// amount-checker is a directory retention tool
// Copyright (C) 2025  Javier Lancha Vázquez <javier.lancha@gmail.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use crate::global::defaults::{DEFAULT_DURATION_LIMIT, DEFAULT_FILES_LIMIT, DEFAULT_LOAD_DIR};
use crate::ui;
use crate::utils::duration::DurationSpec;

/// Effective configuration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum number of entries left in the target directory.
    pub files_limit: usize,
    /// Entries older than this are deleted regardless of `files_limit`.
    pub duration_limit: DurationSpec,
    /// Target directory.
    pub load_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            files_limit: DEFAULT_FILES_LIMIT,
            duration_limit: default_duration_limit(),
            load_dir: PathBuf::from(DEFAULT_LOAD_DIR),
        }
    }
}

fn default_duration_limit() -> DurationSpec {
    DurationSpec::parse(DEFAULT_DURATION_LIMIT).unwrap_or_else(|_| DurationSpec::unlimited())
}

/// Settings as written in the settings file, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct RawSettings {
    files_limit: Option<toml::Value>,
    duration_limit: Option<toml::Value>,
    load_dir: Option<toml::Value>,
}

impl Config {
    /// Loads the settings file at `path`.
    ///
    /// A missing, unreadable or non-regular settings file is not an error:
    /// the built-in defaults are used.
    pub fn load(path: &Path) -> Self {
        if !path.is_file() {
            return Self::default();
        }

        match std::fs::read_to_string(path)
            .with_context(|| format!("Could not read settings file {}", path.display()))
        {
            Ok(contents) => Self::from_toml_str(&contents),
            Err(e) => {
                ui::cli::warning!("{:#}. Using default settings", e);
                Self::default()
            }
        }
    }

    /// Builds a configuration from a TOML document.
    ///
    /// Each field falls back to its default independently, so a malformed
    /// value does not invalidate the others.
    pub fn from_toml_str(contents: &str) -> Self {
        let raw: RawSettings = match toml::from_str(contents) {
            Ok(raw) => raw,
            Err(e) => {
                ui::cli::warning!("Could not parse settings: {}. Using default settings", e);
                RawSettings::default()
            }
        };

        let mut config = Self::default();

        if let Some(value) = &raw.files_limit {
            match parse_files_limit(value) {
                Ok(limit) => config.files_limit = limit,
                Err(e) => ui::cli::warning!(
                    "Ignoring files-limit: {:#}. Using {}",
                    e,
                    config.files_limit
                ),
            }
        }

        if let Some(value) = &raw.duration_limit {
            match parse_duration_limit(value) {
                Ok(spec) => config.duration_limit = spec,
                Err(e) => ui::cli::warning!(
                    "Ignoring duration-limit: {:#}. Using \"{}\"",
                    e,
                    config.duration_limit
                ),
            }
        }

        if let Some(value) = &raw.load_dir {
            match parse_load_dir(value) {
                Ok(dir) => config.load_dir = dir,
                Err(e) => ui::cli::warning!(
                    "Ignoring load-dir: {:#}. Using {}",
                    e,
                    config.load_dir.display()
                ),
            }
        }

        config
    }
}

/// Integers are accepted as their decimal rendering, so `files-limit = 5`
/// behaves like `files-limit = "5"`.
fn raw_string(value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        other => bail!("expected a string, found {}", other.type_str()),
    }
}

fn parse_files_limit(value: &toml::Value) -> Result<usize> {
    let s = raw_string(value)?;
    if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit()) {
        bail!("\"{}\" is not a non-negative integer", s);
    }
    s.parse::<usize>()
        .with_context(|| format!("\"{}\" is out of range", s))
}

fn parse_duration_limit(value: &toml::Value) -> Result<DurationSpec> {
    let s = match value {
        toml::Value::String(s) => s,
        other => bail!("expected a string, found {}", other.type_str()),
    };
    if s.trim().is_empty() {
        bail!("value is blank");
    }
    DurationSpec::parse(s)
}

fn parse_load_dir(value: &toml::Value) -> Result<PathBuf> {
    let s = match value {
        toml::Value::String(s) => s,
        other => bail!("expected a string, found {}", other.type_str()),
    };
    let dir = PathBuf::from(s);
    if !dir.is_dir() {
        bail!("{} is not an existing directory", dir.display());
    }
    std::fs::read_dir(&dir).with_context(|| format!("{} is not readable", dir.display()))?;
    Ok(dir)
}
