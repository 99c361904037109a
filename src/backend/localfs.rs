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

use std::{
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};

use super::StorageBackend;
use crate::global::FileEntry;

/// Backend for directories in the local filesystem.
#[derive(Default)]
pub struct LocalFS {}

impl LocalFS {
    pub fn new() -> Self {
        Self {}
    }
}

/// Modification time of a path, following symlinks.
///
/// Dangling symlinks fall back to the link itself. Entries without a
/// readable modification time sort as the oldest possible.
fn modified_time(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .or_else(|_| std::fs::symlink_metadata(path))
        .and_then(|meta| meta.modified())
        .unwrap_or(UNIX_EPOCH)
}

impl StorageBackend for LocalFS {
    fn list_entries(&self, dir: &Path) -> Result<Vec<FileEntry>> {
        if !dir.exists() {
            bail!("Directory \'{}\' does not exist", dir.display());
        }
        if !dir.is_dir() {
            bail!("\'{}\' is not a directory", dir.display());
        }

        let mut entries = Vec::new();
        for entry in std::fs::read_dir(dir)
            .with_context(|| format!("Could not list directory \'{}\'", dir.display()))?
        {
            let entry = entry
                .with_context(|| format!("Could not list directory \'{}\'", dir.display()))?;
            let path = entry.path();
            let modified: DateTime<Local> = modified_time(&path).into();
            entries.push(FileEntry::new(path, modified));
        }

        Ok(entries)
    }

    fn remove(&self, entry: &FileEntry) -> Result<()> {
        let path = entry.path();
        let is_dir = std::fs::symlink_metadata(path)
            .with_context(|| format!("Could not stat \'{}\'", path.display()))?
            .is_dir();

        if is_dir {
            std::fs::remove_dir(path)
                .with_context(|| format!("Could not remove directory \'{}\'", path.display()))
        } else {
            std::fs::remove_file(path)
                .with_context(|| format!("Could not remove file \'{}\'", path.display()))
        }
    }
}
