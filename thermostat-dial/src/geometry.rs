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

use embedded_graphics::{prelude::*, primitives::Rectangle};

/// Screen geometry derived from the dial's bounds and progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DialGeometry {
    pub center: Point,
    pub arc_diameter: u32,
    pub arc_radius: i32,
    /// Centre of the thumb
    pub thumb: Point,
    /// Anchor of the selected value label, trailing the thumb
    pub value_label: Point
}

impl DialGeometry {
    /// Fit the arc inside `bounds`, leaving `padding` pixels of slack.
    pub fn layout(bounds: Rectangle, padding: u32) -> Self {
        let center = bounds.center();
        let smallest = bounds.size.width.min(bounds.size.height);
        let arc_diameter = smallest.saturating_sub(padding);

        Self {
            center,
            arc_diameter,
            arc_radius: (arc_diameter / 2) as i32,
            thumb: center,
            value_label: center
        }
    }

    pub fn arc_rect(&self) -> Rectangle {
        Rectangle::with_center(self.center, Size::new_equal(self.arc_diameter))
    }

    /// Move the thumb to `thumb_angle` and the value label `label_offset`
    /// degrees further along.
    pub fn place_thumb(&mut self, thumb_angle: f32, label_offset: f32, clockwise: bool) {
        self.thumb = arc_point(self.center, self.arc_radius, thumb_angle, clockwise);
        self.value_label = arc_point(
            self.center,
            self.arc_radius,
            thumb_angle + label_offset,
            clockwise
        );
    }
}

/// Angle fed to [`arc_point`] for a thumb `progress_sweep` degrees along
/// the arc.
pub fn thumb_angle(start_angle: i32, progress_sweep: f32, rotation: i32) -> f32 {
    start_angle as f32 + progress_sweep + rotation as f32 + 90.0
}

/// Point on a circle of `radius` around `center`. An angle of 90 degrees
/// is 12 o'clock; anti-clockwise dials are mirrored around the centre.
pub fn arc_point(center: Point, radius: i32, angle: f32, clockwise: bool) -> Point {
    let (sin, cos) = angle.to_radians().sin_cos();
    let x = (radius as f32 * cos).round() as i32;
    let y = (radius as f32 * sin).round() as i32;
    let x = if clockwise { x } else { -x };

    Point::new(center.x - x, center.y - y)
}

/// Start and sweep in drawing degrees (0 at 3 o'clock, clockwise) for an
/// arc that covers `sweep` degrees of the dial from its start.
pub fn arc_span(start_angle: i32, rotation: i32, sweep: f32, clockwise: bool) -> (f32, f32) {
    let start = (start_angle + rotation - 90) as f32;
    if clockwise {
        (start, sweep)
    } else {
        (180.0 - start - sweep, sweep)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry() -> DialGeometry {
        DialGeometry::layout(Rectangle::new(Point::zero(), Size::new(201, 241)), 1)
    }

    #[test]
    fn layout_fits_smallest_side() {
        let bounds = Rectangle::new(Point::new(10, 20), Size::new(300, 200));
        let geometry = DialGeometry::layout(bounds, 20);

        assert_eq!(geometry.center, bounds.center());
        assert_eq!(geometry.arc_diameter, 180);
        assert_eq!(geometry.arc_radius, 90);
        assert_eq!(geometry.arc_rect().center(), bounds.center());
    }

    #[test]
    fn thumb_starts_at_twelve_oclock() {
        let mut geometry = geometry();
        let center = geometry.center;

        geometry.place_thumb(thumb_angle(0, 0.0, 0), 10.0, true);
        assert_eq!(geometry.thumb, center - Point::new(0, 100));
    }

    #[test]
    fn thumb_follows_progress_clockwise() {
        let mut geometry = geometry();
        let center = geometry.center;

        geometry.place_thumb(thumb_angle(0, 90.0, 0), 10.0, true);
        assert_eq!(geometry.thumb, center + Point::new(100, 0));

        geometry.place_thumb(thumb_angle(0, 90.0, 0), 10.0, false);
        assert_eq!(geometry.thumb, center - Point::new(100, 0));
    }

    #[test]
    fn value_label_trails_thumb() {
        let mut geometry = geometry();
        geometry.place_thumb(thumb_angle(0, 80.0, 0), 10.0, true);

        let expected = arc_point(geometry.center, 100, thumb_angle(0, 90.0, 0), true);
        assert_eq!(geometry.value_label, expected);
    }

    #[test]
    fn span_starts_at_twelve_oclock() {
        assert_eq!(arc_span(0, 0, 360.0, true), (-90.0, 360.0));
        assert_eq!(arc_span(30, 60, 120.0, true), (0.0, 120.0));
    }

    #[test]
    fn anti_clockwise_span_is_mirrored() {
        // 12 o'clock to 3 o'clock mirrored is 9 o'clock to 12 o'clock
        assert_eq!(arc_span(0, 0, 90.0, false), (180.0, 90.0));
    }
}
