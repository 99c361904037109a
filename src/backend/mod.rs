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

pub mod localfs;

use std::path::Path;

use anyhow::Result;

use crate::global::FileEntry;

/// Abstraction of the filesystem holding the target directory.
///
/// Every call acquires and releases its own resources; nothing is kept open
/// between calls.
pub trait StorageBackend {
    /// Lists the direct children of `dir` with their modification times.
    ///
    /// Fails if `dir` does not exist, is not a directory or cannot be
    /// enumerated. An empty directory yields an empty list.
    fn list_entries(&self, dir: &Path) -> Result<Vec<FileEntry>>;

    /// Removes an entry previously returned by `list_entries`.
    fn remove(&self, entry: &FileEntry) -> Result<()>;
}
