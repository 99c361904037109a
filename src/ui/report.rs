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

use crate::retention::RetentionOutcome;
use crate::{ui, utils};

pub fn within_limit_line(count: usize, limit: usize) -> String {
    format!("{} files are there. (it <= {})", count, limit)
}

/// One line per deleted entry followed by a summary, or nothing if no entry
/// was deleted.
pub fn deleted_lines(outcome: &RetentionOutcome) -> Vec<String> {
    let num_deleted = outcome.deleted_count();
    if num_deleted == 0 {
        return Vec::new();
    }

    let mut lines: Vec<String> = outcome
        .deleted()
        .map(|entry| format!("Deleted: {}", entry.name()))
        .collect();
    lines.push(format!(
        "{} deleted.",
        utils::format_count(num_deleted, "file", "files")
    ));
    lines
}

pub fn print_within_limit(count: usize, limit: usize) {
    ui::cli::log!("{}", within_limit_line(count, limit));
}

pub fn print_outcome(outcome: &RetentionOutcome) {
    for (entry, cause) in &outcome.failed {
        ui::cli::warning!("Could not delete {}: {}", entry.name(), cause);
    }

    for line in deleted_lines(outcome) {
        ui::cli::log!("{}", line);
    }
}
