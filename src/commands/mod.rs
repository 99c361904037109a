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

pub mod cmd_check;

use anyhow::Result;
use clap::Parser;

// CLI arguments
#[derive(Parser, Debug)]
#[clap(
    version = env!("CARGO_PKG_VERSION"), // Version from crate metadata
    about = "Deletes the oldest files of a directory until its count and age limits hold",
    long_about = "Deletes the oldest files of a directory until its count and age limits hold.\n\n\
                  Settings are read from `ac.toml` in the working directory:\n  \
                  files-limit = \"21\"        maximum number of entries\n  \
                  duration-limit = \"3month\" maximum age (year, month, week, day, hour, minute, second, milli)\n  \
                  load-dir = \".\"            target directory"
)]
pub struct Cli {}

pub fn run(_args: &Cli) -> Result<()> {
    cmd_check::run()
}
