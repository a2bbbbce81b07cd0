/*
 * Virtual Thermostat - circular thermostat dial for embedded displays
 * Copyright (C) 2026 Josh Kropf <josh@slashdev.ca>
 *
 * This program is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see <https://www.gnu.org/licenses/>.
 */

/// Integer value domain of the dial.
///
/// Stored as an absolute lower bound plus a width so both bounds can be
/// changed independently without one going stale. Progress is kept in
/// offset space (`0..=width`) and translated at the public boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValueRange {
    min: i32,
    /// `max - min`, wide enough for the full `i32` span
    width: i64
}

impl ValueRange {
    /// An inverted range collapses to a single value at `min`.
    pub fn new(min: i32, max: i32) -> Self {
        Self {
            min,
            width: (max as i64 - min as i64).max(0)
        }
    }

    pub fn min(&self) -> i32 {
        self.min
    }

    pub fn max(&self) -> i32 {
        self.to_absolute(self.width)
    }

    pub fn width(&self) -> i64 {
        self.width
    }

    /// Move the lower bound, keeping the upper bound where it is. If the
    /// new lower bound passes the upper bound, the upper bound follows it.
    pub fn with_min(self, min: i32) -> Self {
        Self::new(min, self.max().max(min))
    }

    /// Move the upper bound, keeping the lower bound where it is.
    pub fn with_max(self, max: i32) -> Self {
        Self::new(self.min, max)
    }

    pub fn to_offset(&self, value: i32) -> i64 {
        value as i64 - self.min as i64
    }

    /// Offsets outside `0..=width` saturate at the `i32` limits.
    pub fn to_absolute(&self, offset: i64) -> i32 {
        (self.min as i64 + offset).clamp(i32::MIN as i64, i32::MAX as i64) as i32
    }

    pub fn clamp_offset(&self, offset: i64) -> i64 {
        offset.clamp(0, self.width)
    }

    pub fn contains(&self, value: i32) -> bool {
        value >= self.min && value <= self.max()
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::new(0, 100)
    }
}
