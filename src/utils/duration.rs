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

use std::str::FromStr;

use anyhow::{Context, Error, Result, anyhow, bail};
use chrono::Duration;

use crate::global::defaults::{DAYS_PER_MONTH, DAYS_PER_WEEK, DAYS_PER_YEAR};

/// Unit of a duration component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DurationUnit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
    Milli,
}

impl DurationUnit {
    /// Converts `amount` units into a `Duration`, or `None` if it does not fit.
    ///
    /// Years, months and weeks are fixed numbers of days, not calendar-aware.
    pub fn to_duration(self, amount: i64) -> Option<Duration> {
        match self {
            DurationUnit::Year => amount.checked_mul(DAYS_PER_YEAR).and_then(Duration::try_days),
            DurationUnit::Month => amount
                .checked_mul(DAYS_PER_MONTH)
                .and_then(Duration::try_days),
            DurationUnit::Week => amount.checked_mul(DAYS_PER_WEEK).and_then(Duration::try_days),
            DurationUnit::Day => Duration::try_days(amount),
            DurationUnit::Hour => Duration::try_hours(amount),
            DurationUnit::Minute => Duration::try_minutes(amount),
            DurationUnit::Second => Duration::try_seconds(amount),
            DurationUnit::Milli => Duration::try_milliseconds(amount),
        }
    }
}

impl FromStr for DurationUnit {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "year" => Ok(DurationUnit::Year),
            "month" => Ok(DurationUnit::Month),
            "week" => Ok(DurationUnit::Week),
            "day" => Ok(DurationUnit::Day),
            "hour" => Ok(DurationUnit::Hour),
            "minute" => Ok(DurationUnit::Minute),
            "second" => Ok(DurationUnit::Second),
            "milli" => Ok(DurationUnit::Milli),
            _ => Err(anyhow!("Invalid duration unit: \"{}\"", s)),
        }
    }
}

impl std::fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DurationUnit::Year => write!(f, "year"),
            DurationUnit::Month => write!(f, "month"),
            DurationUnit::Week => write!(f, "week"),
            DurationUnit::Day => write!(f, "day"),
            DurationUnit::Hour => write!(f, "hour"),
            DurationUnit::Minute => write!(f, "minute"),
            DurationUnit::Second => write!(f, "second"),
            DurationUnit::Milli => write!(f, "milli"),
        }
    }
}

/// A compact duration such as `3month` or `1year6month`.
///
/// The empty spec means "no age limit".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationSpec {
    source: String,
    components: Vec<(i64, DurationUnit)>,
    total: Duration,
}

impl DurationSpec {
    /// Parses a sequence of `<digits><unit>` groups with no separators.
    ///
    /// The whole string must be consumed. An unknown unit, a number without
    /// a unit, a unit without a number, any other character, or an amount
    /// that overflows rejects the entire value.
    pub fn parse(s: &str) -> Result<Self> {
        let mut components = Vec::new();
        let mut total = Duration::zero();
        let mut rest = s;

        while !rest.is_empty() {
            let digits_len = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            if digits_len == 0 {
                bail!("Invalid duration format: expected a number at \"{}\" in \"{}\"", rest, s);
            }
            let (digits, tail) = rest.split_at(digits_len);

            let unit_len = tail
                .find(|c: char| !c.is_ascii_alphabetic())
                .unwrap_or(tail.len());
            if unit_len == 0 {
                bail!("Invalid duration format: number without unit in \"{}\"", s);
            }
            let (unit_str, tail) = tail.split_at(unit_len);

            let amount = digits
                .parse::<i64>()
                .with_context(|| format!("Duration amount \"{}\" is out of range", digits))?;
            let unit = unit_str.parse::<DurationUnit>()?;

            let component = unit
                .to_duration(amount)
                .ok_or_else(|| anyhow!("Duration component \"{}{}\" is out of range", amount, unit))?;
            total = total
                .checked_add(&component)
                .ok_or_else(|| anyhow!("Duration \"{}\" is out of range", s))?;

            components.push((amount, unit));
            rest = tail;
        }

        Ok(Self {
            source: s.to_string(),
            components,
            total,
        })
    }

    /// An empty spec, which disables age-based deletion.
    pub fn unlimited() -> Self {
        Self {
            source: String::new(),
            components: Vec::new(),
            total: Duration::zero(),
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.components.is_empty()
    }

    pub fn components(&self) -> &[(i64, DurationUnit)] {
        &self.components
    }

    /// Total elapsed time of all components.
    pub fn total(&self) -> Duration {
        self.total
    }
}

impl FromStr for DurationSpec {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DurationSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}
