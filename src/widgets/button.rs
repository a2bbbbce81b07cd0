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

use embedded_graphics::{pixelcolor::Bgr888, prelude::*, primitives::Rectangle, text::Alignment};
use thermostat_dial::DialFont;

use crate::theme::FormStyle;
use super::text_field::draw_rect;

pub struct ButtonWidget {
    label: String,
    rect: Rectangle
}

impl ButtonWidget {
    pub fn new(label: &str, rect: Rectangle) -> Self {
        Self { label: String::from(label), rect }
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    pub fn draw<D>(&self, target: &mut D, style: &FormStyle, font: &DialFont) -> Result<(), D::Error>
        where D: DrawTarget<Color = Bgr888>
    {
        draw_rect(target, self.rect, &style.button_rect)?;

        let text_bg = style.button_rect.fill_colour.unwrap_or(style.bg_colour);
        font.draw_text(
            target,
            &self.label,
            self.rect.center(),
            style.button_text_colour,
            text_bg,
            Alignment::Center
        )?;

        Ok(())
    }
}
