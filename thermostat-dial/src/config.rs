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

use serde::Deserialize;

/// Construction-time settings of a dial. Values outside their valid range
/// are clamped when the dial is built.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DialConfig {
    pub min: i32,
    pub max: i32,
    /// Initial value, absolute
    pub progress: i32,
    /// Stroke width of the progress arc
    pub progress_width: u32,
    /// Stroke width of the background arc
    pub arc_width: u32,
    /// Start of the arc in degrees; 0 is 12 o'clock
    pub start_angle: i32,
    /// Degrees covered by the arc, up to 360
    pub sweep_angle: i32,
    /// Rotation of the whole dial in degrees
    pub rotation: i32,
    pub rounded_edges: bool,
    /// Accept touches over most of the dial face, not just the ring
    pub touch_inside: bool,
    pub clockwise: bool,
    pub enabled: bool,
    /// Pixels trimmed from the smaller side of the bounds when fitting the arc
    pub padding: u32
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            min: 0,
            max: 100,
            progress: 0,
            progress_width: 4,
            arc_width: 2,
            start_angle: 0,
            sweep_angle: 360,
            rotation: 0,
            rounded_edges: false,
            touch_inside: true,
            clockwise: true,
            enabled: true,
            padding: 40
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config: DialConfig = toml::from_str(r#"
            min = 10
            max = 32
            sweep_angle = 300
            start_angle = 210
        "#).unwrap();

        assert_eq!(config.min, 10);
        assert_eq!(config.max, 32);
        assert_eq!(config.sweep_angle, 300);
        assert_eq!(config.start_angle, 210);
        assert_eq!(config.progress_width, 4);
        assert!(config.clockwise);
        assert!(config.touch_inside);
    }
}
