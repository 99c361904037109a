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

use chrono::{DateTime, Local};

use crate::backend::StorageBackend;
use crate::config::Config;
use crate::global::FileEntry;

/// Entries selected for deletion, in ascending order of modification time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RetentionPlan {
    /// Entries older than the duration limit.
    pub expired: Vec<FileEntry>,
    /// Oldest entries beyond the count limit once the expired ones are gone.
    pub excess: Vec<FileEntry>,
    /// Entries that survive both passes.
    pub kept: Vec<FileEntry>,
    /// Count limit the plan was computed for.
    pub files_limit: usize,
}

/// Result of deleting the entries of a `RetentionPlan`.
#[derive(Debug, Default)]
pub struct RetentionOutcome {
    pub deleted_by_age: Vec<FileEntry>,
    pub deleted_by_count: Vec<FileEntry>,
    /// Entries that could not be deleted, with the cause. They are still on disk.
    pub failed: Vec<(FileEntry, String)>,
    /// Entries left in the directory, in ascending order of modification time.
    pub survivors: Vec<FileEntry>,
}

impl RetentionOutcome {
    /// All deleted entries, age pass first.
    pub fn deleted(&self) -> impl Iterator<Item = &FileEntry> {
        self.deleted_by_age.iter().chain(self.deleted_by_count.iter())
    }

    pub fn deleted_count(&self) -> usize {
        self.deleted_by_age.len() + self.deleted_by_count.len()
    }
}

#[derive(Debug)]
pub enum Enforcement {
    /// The directory already holds no more than `limit` entries. Nothing was touched.
    WithinLimit { count: usize, limit: usize },
    Pruned(RetentionOutcome),
}

/// Sorts entries by ascending modification time.
///
/// The sort is stable: entries with identical timestamps keep their listing order.
pub fn sort_by_modified(mut entries: Vec<FileEntry>) -> Vec<FileEntry> {
    entries.sort_by_key(|entry| entry.modified);
    entries
}

/// Selects the entries to delete. Nothing is deleted here.
///
/// Entries strictly older than `now - duration_limit` are expired. If more
/// than `files_limit` entries remain, the oldest ones are marked as excess
/// until exactly `files_limit` are kept.
pub fn plan(entries: Vec<FileEntry>, config: &Config, now: DateTime<Local>) -> RetentionPlan {
    let files_limit = config.files_limit;

    if entries.len() <= files_limit {
        return RetentionPlan {
            kept: entries,
            files_limit,
            ..Default::default()
        };
    }

    let sorted = sort_by_modified(entries);

    // A cutoff before the representable range cannot expire anything
    let cutoff = match config.duration_limit.is_unlimited() {
        true => None,
        false => now.checked_sub_signed(config.duration_limit.total()),
    };

    let (expired, mut remaining): (Vec<FileEntry>, Vec<FileEntry>) = match cutoff {
        Some(cutoff) => sorted.into_iter().partition(|entry| entry.modified < cutoff),
        None => (Vec::new(), sorted),
    };

    let num_excess = remaining.len().saturating_sub(files_limit);
    let kept = remaining.split_off(num_excess);

    RetentionPlan {
        expired,
        excess: remaining,
        kept,
        files_limit,
    }
}

/// Deletes the entries selected by `plan`, oldest first.
///
/// A failed deletion does not abort the run. The entry stays on disk, is
/// recorded in `failed` and remains a survivor. In the count pass a failure
/// does not reduce the count, so the next-oldest kept entry is deleted in
/// its place until the limit holds or no candidate is left.
pub fn apply(plan: RetentionPlan, backend: &dyn StorageBackend) -> RetentionOutcome {
    let mut outcome = RetentionOutcome::default();

    for entry in plan.expired {
        match backend.remove(&entry) {
            Ok(()) => outcome.deleted_by_age.push(entry),
            Err(e) => {
                outcome.failed.push((entry.clone(), format!("{:#}", e)));
                outcome.survivors.push(entry);
            }
        }
    }

    let candidates: Vec<FileEntry> = plan.excess.into_iter().chain(plan.kept).collect();
    let mut remaining = outcome.survivors.len() + candidates.len();

    for entry in candidates {
        if remaining <= plan.files_limit {
            outcome.survivors.push(entry);
            continue;
        }

        match backend.remove(&entry) {
            Ok(()) => {
                outcome.deleted_by_count.push(entry);
                remaining -= 1;
            }
            Err(e) => {
                outcome.failed.push((entry.clone(), format!("{:#}", e)));
                outcome.survivors.push(entry);
            }
        }
    }

    outcome
}

/// Enforces both limits of `config` on a snapshot of the target directory.
///
/// The count check runs before any sorting or deletion.
pub fn enforce(
    entries: Vec<FileEntry>,
    config: &Config,
    backend: &dyn StorageBackend,
    now: DateTime<Local>,
) -> Enforcement {
    if entries.len() <= config.files_limit {
        return Enforcement::WithinLimit {
            count: entries.len(),
            limit: config.files_limit,
        };
    }

    Enforcement::Pruned(apply(plan(entries, config, now), backend))
}
