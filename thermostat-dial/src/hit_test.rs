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

use embedded_graphics::prelude::{Point, Size};

/// Radius around the dial centre inside which touches are dropped.
///
/// With `touch_inside` most of the dial face is draggable and only a small
/// hub is inert. Otherwise only the ring under the thumb reacts; the exact
/// arc radius is too tight to hit, so it is pulled in by half the thumb.
pub fn touch_ignore_radius(arc_radius: i32, touch_inside: bool, thumb_size: Size) -> f32 {
    if touch_inside {
        arc_radius as f32 / 4.0
    } else {
        let thumb_half = thumb_size.width.min(thumb_size.height) / 2;
        arc_radius as f32 - thumb_half as f32
    }
}

/// True if the touch lands inside the inert region. The centre itself is
/// always inert, there is no angle to take from it.
pub fn is_touch_ignored(touch: Point, center: Point, ignore_radius: f32) -> bool {
    let delta = touch - center;
    if delta == Point::zero() {
        return true;
    }

    let (x, y) = (delta.x as f32, delta.y as f32);
    let distance = (x * x + y * y).sqrt();

    distance < ignore_radius
}

#[cfg(test)]
mod tests {
    use super::*;

    const CENTER: Point = Point::new(60, 60);

    #[test]
    fn inside_mode_uses_quarter_radius() {
        assert_eq!(touch_ignore_radius(100, true, Size::new(20, 20)), 25.0);
    }

    #[test]
    fn outside_mode_subtracts_smaller_thumb_half() {
        assert_eq!(touch_ignore_radius(100, false, Size::new(30, 20)), 90.0);
        assert_eq!(touch_ignore_radius(100, false, Size::zero()), 100.0);
    }

    #[test]
    fn centre_is_always_ignored() {
        assert!(is_touch_ignored(CENTER, CENTER, 0.0));
        assert!(is_touch_ignored(CENTER, CENTER, 25.0));
    }

    #[test]
    fn touch_on_arc_is_accepted_with_zero_thumb() {
        let radius = touch_ignore_radius(50, false, Size::zero());
        assert!(!is_touch_ignored(Point::new(110, 60), CENTER, radius));
        assert!(!is_touch_ignored(Point::new(60, 10), CENTER, radius));
        assert!(is_touch_ignored(Point::new(109, 60), CENTER, radius));
    }

    #[test]
    fn inside_mode_keeps_hub_inert() {
        let radius = touch_ignore_radius(100, true, Size::new(20, 20));
        assert!(is_touch_ignored(Point::new(70, 70), CENTER, radius));
        assert!(!is_touch_ignored(Point::new(90, 60), CENTER, radius));
    }
}
