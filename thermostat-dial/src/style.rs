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

use embedded_graphics::{pixelcolor::Bgr888, prelude::*};
use serde::Deserialize;

use crate::de;

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DialStyle {
    /// Disc behind the arc
    #[serde(deserialize_with = "de::colour")]
    pub background_colour: Bgr888,
    /// Background arc
    #[serde(deserialize_with = "de::colour")]
    pub arc_colour: Bgr888,
    /// Progress arc when `gradient` is off
    #[serde(deserialize_with = "de::colour")]
    pub progress_colour: Bgr888,

    /// Blend the progress arc from `cold_colour` to `hot_colour`
    pub gradient: bool,
    #[serde(deserialize_with = "de::colour")]
    pub cold_colour: Bgr888,
    #[serde(deserialize_with = "de::colour")]
    pub hot_colour: Bgr888,

    /// Selected value drawn next to the thumb
    #[serde(deserialize_with = "de::colour")]
    pub value_colour: Bgr888,
    /// Degrees between the thumb and the selected value
    pub value_offset_deg: f32,

    /// Current temperature readout
    #[serde(deserialize_with = "de::colour")]
    pub current_colour: Bgr888,
    /// Caption above the current temperature
    pub caption: String,
    #[serde(deserialize_with = "de::colour")]
    pub caption_colour: Bgr888,
    /// Gap between the caption and the current temperature
    pub caption_gap: u32,

    #[serde(deserialize_with = "de::size")]
    pub thumb_size: Size,
    #[serde(deserialize_with = "de::colour")]
    pub thumb_colour: Bgr888,
    #[serde(deserialize_with = "de::colour")]
    pub thumb_pressed_colour: Bgr888,

    #[serde(deserialize_with = "de::size")]
    pub leaf_size: Size,
    #[serde(deserialize_with = "de::colour")]
    pub leaf_colour: Bgr888,
    /// Gap between the current temperature and the leaf
    pub leaf_gap: u32
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            background_colour: Bgr888::new(0xf5, 0x7f, 0x17),
            arc_colour: Bgr888::CSS_LIGHT_GRAY,
            progress_colour: Bgr888::new(0x33, 0xb5, 0xe5),

            gradient: true,
            cold_colour: Bgr888::new(0x33, 0xb5, 0xe5),
            hot_colour: Bgr888::new(0xe2, 0x23, 0x1a),

            value_colour: Bgr888::new(0x38, 0x38, 0x38),
            value_offset_deg: 10.0,

            current_colour: Bgr888::WHITE,
            caption: String::from("Current"),
            caption_colour: Bgr888::CSS_DIM_GRAY,
            caption_gap: 20,

            thumb_size: Size::new(24, 24),
            thumb_colour: Bgr888::WHITE,
            thumb_pressed_colour: Bgr888::CSS_GAINSBORO,

            leaf_size: Size::new(28, 16),
            leaf_colour: Bgr888::CSS_FOREST_GREEN,
            leaf_gap: 20
        }
    }
}
