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

// -- Settings --
/// Settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "ac.toml";

// -- Retention --
/// Maximum number of entries kept in the target directory.
pub const DEFAULT_FILES_LIMIT: usize = 21;
/// Maximum age of an entry before it is deleted regardless of the count limit.
pub const DEFAULT_DURATION_LIMIT: &str = "3month";
/// Target directory.
pub const DEFAULT_LOAD_DIR: &str = ".";

// Fixed calendar approximations used by the duration parser.
pub const DAYS_PER_YEAR: i64 = 365;
pub const DAYS_PER_MONTH: i64 = 30;
pub const DAYS_PER_WEEK: i64 = 7;
