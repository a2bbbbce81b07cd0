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

/// Colour as hue (degrees, `0..360`), saturation and value (`0..=1`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f32,
    pub saturation: f32,
    pub value: f32
}

impl From<Bgr888> for Hsv {
    fn from(colour: Bgr888) -> Self {
        let r = colour.r() as f32 / 255.0;
        let g = colour.g() as f32 / 255.0;
        let b = colour.b() as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let hue = if delta == 0.0 {
            0.0
        } else if max == r {
            60.0 * ((g - b) / delta)
        } else if max == g {
            60.0 * ((b - r) / delta) + 120.0
        } else {
            60.0 * ((r - g) / delta) + 240.0
        };

        let hue = if hue < 0.0 { hue + 360.0 } else { hue };
        let saturation = if max == 0.0 { 0.0 } else { delta / max };

        Self { hue, saturation, value: max }
    }
}

impl From<Hsv> for Bgr888 {
    fn from(hsv: Hsv) -> Self {
        let hue = hsv.hue.rem_euclid(360.0);
        let saturation = hsv.saturation.clamp(0.0, 1.0);
        let value = hsv.value.clamp(0.0, 1.0);

        let chroma = value * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x)
        };

        let m = value - chroma;
        let channel = |c: f32| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;

        Bgr888::new(channel(r), channel(g), channel(b))
    }
}

fn interpolate(a: f32, b: f32, bias: f32) -> f32 {
    a + (b - a) * bias
}

/// Blend `from` towards `to` in HSV space.
///
/// `bias` is clamped to `0..=1`, and the end points come back untouched
/// rather than through a lossy HSV round trip. In preview mode `from` is
/// returned as is.
pub fn interpolate_colour(from: Bgr888, to: Bgr888, bias: f32, preview: bool) -> Bgr888 {
    if preview || bias.is_nan() || bias <= 0.0 {
        return from;
    }
    if bias >= 1.0 {
        return to;
    }

    let a = Hsv::from(from);
    let b = Hsv::from(to);

    Hsv {
        hue: interpolate(a.hue, b.hue, bias),
        saturation: interpolate(a.saturation, b.saturation, bias),
        value: interpolate(a.value, b.value, bias)
    }
    .into()
}

/// Position of the progress sweep within the full sweep of the arc.
pub fn progress_bias(progress_sweep: f32, sweep_angle: i32) -> f32 {
    if sweep_angle <= 0 {
        0.0
    } else {
        (progress_sweep / sweep_angle as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLD: Bgr888 = Bgr888::new(0x33, 0xb5, 0xe5);
    const HOT: Bgr888 = Bgr888::new(0xe2, 0x23, 0x1a);

    #[test]
    fn primary_colours_to_hsv() {
        let red = Hsv::from(Bgr888::RED);
        assert_eq!((red.hue, red.saturation, red.value), (0.0, 1.0, 1.0));

        let green = Hsv::from(Bgr888::GREEN);
        assert_eq!(green.hue, 120.0);

        let blue = Hsv::from(Bgr888::BLUE);
        assert_eq!(blue.hue, 240.0);

        let grey = Hsv::from(Bgr888::new(128, 128, 128));
        assert_eq!(grey.saturation, 0.0);
    }

    #[test]
    fn hsv_round_trip_is_stable() {
        for colour in [COLD, HOT, Bgr888::CSS_PERU, Bgr888::CSS_DODGER_BLUE, Bgr888::WHITE] {
            assert_eq!(Bgr888::from(Hsv::from(colour)), colour);
        }
    }

    #[test]
    fn end_points_are_exact() {
        assert_eq!(interpolate_colour(COLD, HOT, 0.0, false), COLD);
        assert_eq!(interpolate_colour(COLD, HOT, 1.0, false), HOT);
        assert_eq!(interpolate_colour(COLD, HOT, -2.0, false), COLD);
        assert_eq!(interpolate_colour(COLD, HOT, 3.0, false), HOT);
    }

    #[test]
    fn preview_skips_interpolation() {
        assert_eq!(interpolate_colour(COLD, HOT, 0.5, true), COLD);
        assert_eq!(interpolate_colour(COLD, HOT, 1.0, true), COLD);
    }

    #[test]
    fn midpoint_blends_hue() {
        let mid = Hsv::from(interpolate_colour(COLD, HOT, 0.5, false));
        let (a, b) = (Hsv::from(COLD), Hsv::from(HOT));
        let expected = (a.hue + b.hue) / 2.0;
        assert!((mid.hue - expected).abs() < 1.5, "hue {}", mid.hue);
    }

    #[test]
    fn bias_of_progress_sweep() {
        assert_eq!(progress_bias(0.0, 300), 0.0);
        assert_eq!(progress_bias(150.0, 300), 0.5);
        assert_eq!(progress_bias(300.0, 300), 1.0);
        assert_eq!(progress_bias(1.0, 1), 1.0);
        assert_eq!(progress_bias(10.0, 0), 0.0);
    }
}
