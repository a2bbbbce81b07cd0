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

use embedded_graphics::{
    pixelcolor::Bgr888,
    prelude::*,
    primitives::{Arc, Circle, Ellipse, Line, PrimitiveStyle},
    text::Alignment
};

use crate::{DialWidget, geometry::arc_span};

impl DialWidget {
    /// Draw the dial in the bounds given to [`DialWidget::layout`].
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
        where D: DrawTarget<Color = Bgr888>
    {
        let geometry = self.geometry();
        let bg_colour = self.style.background_colour;

        Circle::with_center(geometry.center, geometry.arc_diameter)
            .into_styled(PrimitiveStyle::with_fill(bg_colour))
            .draw(target)?;

        self.draw_arc(target, self.sweep_angle() as f32, self.arc_width(), self.style.arc_colour)?;

        if self.progress_sweep() > 0.0 {
            self.draw_arc(
                target,
                self.progress_sweep(),
                self.progress_width(),
                self.progress_arc_colour()
            )?;
        }

        self.fonts.value.draw_text(
            target,
            &self.progress().to_string(),
            geometry.value_label,
            self.style.value_colour,
            bg_colour,
            Alignment::Center
        )?;

        self.draw_readout(target)?;

        if self.is_leaf_visible() {
            self.draw_leaf(target)?;
        }

        self.draw_thumb(target)?;

        Ok(())
    }

    fn draw_arc<D>(
        &self,
        target: &mut D,
        sweep: f32,
        width: u32,
        colour: Bgr888
    ) -> Result<(), D::Error>
        where D: DrawTarget<Color = Bgr888>
    {
        if width == 0 || sweep <= 0.0 {
            return Ok(());
        }

        let geometry = self.geometry();
        let (start, sweep) = arc_span(
            self.start_angle(),
            self.arc_rotation(),
            sweep,
            self.is_clockwise()
        );

        let arc = Arc::with_center(
            geometry.center,
            geometry.arc_diameter,
            Angle::from_degrees(start),
            Angle::from_degrees(sweep)
        );

        if self.rounded_edges() {
            // round ends: one dot per point of the arc
            for p in arc.points() {
                Circle::with_center(p, width)
                    .into_styled(PrimitiveStyle::with_fill(colour))
                    .draw(target)?;
            }
        } else {
            arc.into_styled(PrimitiveStyle::with_stroke(colour, width))
                .draw(target)?;
        }

        Ok(())
    }

    /// Current temperature in the middle, caption above it
    fn draw_readout<D>(&self, target: &mut D) -> Result<(), D::Error>
        where D: DrawTarget<Color = Bgr888>
    {
        let center = self.geometry().center;
        let bg_colour = self.style.background_colour;

        self.fonts.current.draw_text(
            target,
            self.current_temperature(),
            center,
            self.style.current_colour,
            bg_colour,
            Alignment::Center
        )?;

        let caption_y = center.y
            - (self.fonts.current.line_height() / 2) as i32
            - self.style.caption_gap as i32
            - (self.fonts.caption.line_height() / 2) as i32;

        self.fonts.caption.draw_text(
            target,
            &self.style.caption,
            Point::new(center.x, caption_y),
            self.style.caption_colour,
            bg_colour,
            Alignment::Center
        )?;

        Ok(())
    }

    fn leaf_center(&self) -> Point {
        let center = self.geometry().center;
        let top = center.y
            + (self.fonts.current.line_height() / 2) as i32
            + self.style.leaf_gap as i32;

        Point::new(center.x, top + (self.style.leaf_size.height / 2) as i32)
    }

    fn draw_leaf<D>(&self, target: &mut D) -> Result<(), D::Error>
        where D: DrawTarget<Color = Bgr888>
    {
        let size = self.style.leaf_size;
        let leaf_center = self.leaf_center();
        let half = Point::new((size.width / 2) as i32, (size.height / 2) as i32);

        Ellipse::with_center(leaf_center, size)
            .into_styled(PrimitiveStyle::with_fill(self.style.leaf_colour))
            .draw(target)?;

        // midrib
        Line::new(leaf_center - Point::new(half.x, 0), leaf_center + Point::new(half.x, 0))
            .into_styled(PrimitiveStyle::with_stroke(self.style.background_colour, 1))
            .draw(target)?;

        // stem
        let stem_start = leaf_center - Point::new(half.x, 0);
        Line::new(stem_start, stem_start + Point::new(-half.y, half.y))
            .into_styled(PrimitiveStyle::with_stroke(self.style.leaf_colour, 2))
            .draw(target)?;

        Ok(())
    }

    fn draw_thumb<D>(&self, target: &mut D) -> Result<(), D::Error>
        where D: DrawTarget<Color = Bgr888>
    {
        let thumb = self.geometry().thumb;
        let colour = if self.is_pressed() {
            self.style.thumb_pressed_colour
        } else {
            self.style.thumb_colour
        };

        Ellipse::with_center(thumb, self.style.thumb_size)
            .into_styled(PrimitiveStyle::with_fill(colour))
            .draw(target)?;

        Circle::with_center(thumb, self.progress_width().max(2))
            .into_styled(PrimitiveStyle::with_fill(self.style.background_colour))
            .draw(target)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use embedded_graphics::primitives::Rectangle;
    use embedded_graphics_framebuf::FrameBuf;

    use crate::{DialConfig, DialFonts, DialStyle, TouchEvent};
    use super::*;

    const LEAF: Bgr888 = Bgr888::new(1, 2, 3);
    const PROGRESS: Bgr888 = Bgr888::new(4, 5, 6);
    const PRESSED: Bgr888 = Bgr888::new(7, 8, 9);

    /// Draw target that remembers which colours were drawn
    struct ColourRecorder {
        colours: Vec<Bgr888>
    }

    impl ColourRecorder {
        fn new() -> Self {
            Self { colours: Vec::new() }
        }

        fn drew(&self, colour: Bgr888) -> bool {
            self.colours.contains(&colour)
        }
    }

    impl OriginDimensions for ColourRecorder {
        fn size(&self) -> Size {
            Size::new(200, 200)
        }
    }

    impl DrawTarget for ColourRecorder {
        type Color = Bgr888;
        type Error = Infallible;

        fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
            where I: IntoIterator<Item = Pixel<Self::Color>>
        {
            let bounds = self.bounding_box();
            for Pixel(point, colour) in pixels {
                if bounds.contains(point) && !self.colours.contains(&colour) {
                    self.colours.push(colour);
                }
            }
            Ok(())
        }
    }

    fn dial(config: DialConfig) -> DialWidget {
        let style = DialStyle {
            gradient: false,
            progress_colour: PROGRESS,
            leaf_colour: LEAF,
            thumb_pressed_colour: PRESSED,
            ..DialStyle::default()
        };

        let mut dial = DialWidget::new(&config, style, DialFonts::default());
        dial.layout(Rectangle::new(Point::zero(), Size::new(200, 200)));
        dial
    }

    #[test]
    fn leaf_only_drawn_in_range() {
        let mut dial = dial(DialConfig { progress: 22, ..DialConfig::default() });
        dial.set_leaf_limit(21, 26);

        let mut target = ColourRecorder::new();
        dial.draw(&mut target).unwrap();
        assert!(target.drew(LEAF));

        dial.set_progress(30);
        let mut target = ColourRecorder::new();
        dial.draw(&mut target).unwrap();
        assert!(!target.drew(LEAF));
    }

    #[test]
    fn no_progress_arc_at_zero() {
        let mut dial = dial(DialConfig::default());

        let mut target = ColourRecorder::new();
        dial.draw(&mut target).unwrap();
        assert!(!target.drew(PROGRESS));

        dial.set_progress(50);
        let mut target = ColourRecorder::new();
        dial.draw(&mut target).unwrap();
        assert!(target.drew(PROGRESS));
    }

    #[test]
    fn pressed_thumb_changes_colour() {
        let mut dial = dial(DialConfig::default());
        let mut target = ColourRecorder::new();
        dial.draw(&mut target).unwrap();
        assert!(!target.drew(PRESSED));

        let touch = dial.geometry().center + Point::new(70, 0);
        dial.on_touch_event(TouchEvent::down(touch));

        let mut target = ColourRecorder::new();
        dial.draw(&mut target).unwrap();
        assert!(target.drew(PRESSED));
    }

    #[test]
    fn background_disc_inside_arc_only() {
        let dial = dial(DialConfig { padding: 20, ..DialConfig::default() });
        let center = dial.geometry().center;

        let mut fb = FrameBuf::new([Bgr888::BLACK; 200 * 200], 200, 200);
        dial.draw(&mut fb).unwrap();

        assert_eq!(fb.get_color_at(Point::new(2, 2)), Bgr888::BLACK);
        assert_eq!(
            fb.get_color_at(center + Point::new(40, 40)),
            DialStyle::default().background_colour
        );
    }

    #[test]
    fn arc_is_drawn_on_ring() {
        let dial = dial(DialConfig { arc_width: 4, padding: 20, ..DialConfig::default() });
        let center = dial.geometry().center;
        let radius = dial.geometry().arc_radius;

        let mut fb = FrameBuf::new([Bgr888::BLACK; 200 * 200], 200, 200);
        dial.draw(&mut fb).unwrap();

        // bottom of a full circle arc, away from the thumb at the top
        assert_eq!(
            fb.get_color_at(center + Point::new(0, radius - 1)),
            DialStyle::default().arc_colour
        );
    }

    #[test]
    fn rounded_arcs_are_drawn_on_ring() {
        let mut dial = dial(DialConfig {
            arc_width: 4,
            progress_width: 4,
            padding: 20,
            rounded_edges: true,
            ..DialConfig::default()
        });
        dial.set_progress(50);
        let center = dial.geometry().center;
        let radius = dial.geometry().arc_radius;

        let mut fb = FrameBuf::new([Bgr888::BLACK; 200 * 200], 200, 200);
        dial.draw(&mut fb).unwrap();

        // progress covers 12 to 6 o'clock, the track shows past the thumb
        assert_eq!(fb.get_color_at(center + Point::new(radius - 1, 0)), PROGRESS);
        assert_eq!(
            fb.get_color_at(center + Point::new(-(radius - 1), 0)),
            DialStyle::default().arc_colour
        );
        assert_eq!(fb.get_color_at(Point::new(2, 2)), Bgr888::BLACK);
    }
}
