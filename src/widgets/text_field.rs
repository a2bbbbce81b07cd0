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
    primitives::{Rectangle, RoundedRectangle},
    text::Alignment
};
use thermostat_dial::DialFont;

use crate::theme::{FormStyle, RectStyle};

const MAX_LEN: usize = 4;

/// Labelled single line field holding an integer as it is typed.
pub struct TextFieldWidget {
    label: String,
    text: String,
    rect: Rectangle
}

impl TextFieldWidget {
    pub fn new(label: &str, text: &str, rect: Rectangle) -> Self {
        Self {
            label: String::from(label),
            text: String::from(text),
            rect
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = text.into();
    }

    /// Append a typed character. Digits are accepted up to the field
    /// length, a minus sign only as the first character.
    pub fn push(&mut self, c: char) -> bool {
        let accepted = match c {
            '0'..='9' => self.text.len() < MAX_LEN,
            '-' => self.text.is_empty(),
            _ => false
        };

        if accepted {
            self.text.push(c);
        }

        accepted
    }

    pub fn pop(&mut self) -> bool {
        self.text.pop().is_some()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.rect.contains(point)
    }

    pub fn draw<D>(
        &self,
        target: &mut D,
        style: &FormStyle,
        font: &DialFont,
        focused: bool
    ) -> Result<(), D::Error>
        where D: DrawTarget<Color = Bgr888>
    {
        let label_pos = Point::new(
            self.rect.top_left.x,
            self.rect.top_left.y - font.line_height() as i32 / 2 - 2
        );
        font.draw_text(target, &self.label, label_pos, style.label_colour, style.bg_colour, Alignment::Left)?;

        let rect_style = if focused { &style.focused_rect } else { &style.field_rect };
        draw_rect(target, self.rect, rect_style)?;

        let text_pos = Point::new(self.rect.top_left.x + 8, self.rect.center().y);
        let text_bg = rect_style.fill_colour.unwrap_or(style.bg_colour);
        font.draw_text(target, &self.text, text_pos, style.text_colour, text_bg, Alignment::Left)?;

        Ok(())
    }
}

pub(crate) fn draw_rect<D>(target: &mut D, rect: Rectangle, style: &RectStyle) -> Result<(), D::Error>
    where D: DrawTarget<Color = Bgr888>
{
    if style.corner_radius > 0 {
        RoundedRectangle::with_equal_corners(rect, Size::new_equal(style.corner_radius))
            .into_styled(style.rect_style())
            .draw(target)
    } else {
        rect.into_styled(style.rect_style())
            .draw(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(text: &str) -> TextFieldWidget {
        TextFieldWidget::new("Target", text, Rectangle::new(Point::new(10, 10), Size::new(100, 30)))
    }

    #[test]
    fn accepts_digits_up_to_max_len() {
        let mut field = field("");

        for c in "1234".chars() {
            assert!(field.push(c));
        }
        assert!(!field.push('5'));
        assert_eq!(field.text(), "1234");
    }

    #[test]
    fn minus_only_leads() {
        let mut field = field("");

        assert!(field.push('-'));
        assert!(field.push('5'));
        assert!(!field.push('-'));
        assert_eq!(field.text(), "-5");
    }

    #[test]
    fn rejects_other_characters() {
        let mut field = field("2");

        assert!(!field.push('a'));
        assert!(!field.push('.'));
        assert_eq!(field.text(), "2");
    }

    #[test]
    fn backspace() {
        let mut field = field("25");

        assert!(field.pop());
        assert!(field.pop());
        assert!(!field.pop());
        assert_eq!(field.text(), "");
    }

    #[test]
    fn hit_test() {
        let field = field("");

        assert!(field.contains(Point::new(10, 10)));
        assert!(field.contains(Point::new(109, 39)));
        assert!(!field.contains(Point::new(110, 20)));
    }
}
