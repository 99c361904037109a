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

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use crate::backend::{StorageBackend, localfs::LocalFS};
use crate::config::Config;
use crate::global::defaults::SETTINGS_FILE;
use crate::retention::{self, Enforcement};
use crate::ui::report;

pub fn run() -> Result<()> {
    let config = Config::load(Path::new(SETTINGS_FILE));
    let backend = LocalFS::new();
    check(&config, &backend, Local::now())?;
    Ok(())
}

/// Lists the target directory and enforces the limits of `config` on it.
///
/// Fails without deleting anything if the target directory cannot be listed.
pub fn check(
    config: &Config,
    backend: &dyn StorageBackend,
    now: DateTime<Local>,
) -> Result<Enforcement> {
    let entries = backend
        .list_entries(&config.load_dir)
        .with_context(|| "Invalid target directory")?;

    let enforcement = retention::enforce(entries, config, backend, now);
    match &enforcement {
        Enforcement::WithinLimit { count, limit } => report::print_within_limit(*count, *limit),
        Enforcement::Pruned(outcome) => report::print_outcome(outcome),
    }

    Ok(enforcement)
}
