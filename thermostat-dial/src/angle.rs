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

//! Conversions between touch position, dial angle and progress offset.
//!
//! Angles here are dial angles: 0 degrees at 12 o'clock, increasing in the
//! direction of travel of the dial.

use embedded_graphics::prelude::Point;

/// Angle of `touch` relative to the start of the arc.
///
/// The result is deliberately not limited to the sweep of the arc, touches
/// in the dead zone produce angles past the sweep (or negative angles when
/// the arc starts away from 12 o'clock) and are rejected by
/// [`progress_for_angle`].
pub fn touch_degrees(
    touch: Point,
    center: Point,
    clockwise: bool,
    rotation: i32,
    start_angle: i32
) -> f64 {
    let x = (touch.x - center.x) as f64;
    let y = (touch.y - center.y) as f64;

    // mirror x when progress runs anti-clockwise
    let x = if clockwise { x } else { -x };

    let angle = y.atan2(x).to_degrees() + 90.0 - rotation as f64;

    normalise_degrees(angle) - start_angle as f64
}

/// Map a dial angle onto a progress offset in `0..=width`.
///
/// Returns `None` when the angle lands outside the sweep of the arc.
pub fn progress_for_angle(angle: f64, width: i64, sweep_angle: i32) -> Option<i64> {
    if sweep_angle <= 0 {
        return None;
    }

    // round half up
    let progress = (angle * width as f64 / sweep_angle as f64 + 0.5).floor();

    if progress < 0.0 || progress > width as f64 {
        None
    } else {
        Some(progress as i64)
    }
}

/// Portion of the sweep covered by `offset`, in degrees.
pub fn angle_for_progress(offset: i64, width: i64, sweep_angle: i32) -> f32 {
    if width <= 0 {
        return 0.0;
    }

    (offset as f64 * sweep_angle as f64 / width as f64) as f32
}

/// Wrap an angle into `[0, 360)`.
pub fn normalise_degrees(angle: f64) -> f64 {
    let angle = angle.rem_euclid(360.0);
    if angle >= 360.0 { 0.0 } else { angle }
}
