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

//! Circular thermostat dial for `embedded-graphics` displays.
//!
//! The dial maps touches on a ring to a bounded integer value, draws an
//! arc whose colour runs from cold to hot with the value, and shows the
//! current temperature in the middle. An eco leaf appears while the value
//! is inside a configured range.

pub mod angle;
pub mod colour;
pub mod de;
pub mod geometry;
pub mod hit_test;

mod config;
mod font;
mod gesture;
mod listener;
mod range;
mod render;
mod style;
mod widget;

pub use config::DialConfig;
pub use font::{DialFont, DialFonts};
pub use gesture::{GestureState, TouchAction, TouchEvent};
pub use listener::DialListener;
pub use range::ValueRange;
pub use style::DialStyle;
pub use widget::DialWidget;
