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
    mono_font::{MonoFont, MonoTextStyle, ascii::{FONT_6X13, FONT_10X20}},
    pixelcolor::Bgr888,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyle, TextStyleBuilder}
};
use embedded_ttf::{FontTextStyle, FontTextStyleBuilder};
use rusttype::Font;

/// Font used for one piece of dial text.
#[derive(Clone)]
pub enum DialFont {
    /// Built-in bitmap font
    Mono(&'static MonoFont<'static>),
    /// TrueType font rendered at `size` pixels
    TrueType { font: Font<'static>, size: u32 }
}

impl DialFont {
    pub fn truetype(font: &Font<'static>, size: u32) -> Self {
        Self::TrueType { font: font.clone(), size }
    }

    pub fn line_height(&self) -> u32 {
        match self {
            Self::Mono(font) => font.character_size.height,
            Self::TrueType { size, .. } => *size
        }
    }

    fn ttf_style(font: &Font<'static>, size: u32, fg: Bgr888, bg: Bgr888) -> FontTextStyle<Bgr888> {
        FontTextStyleBuilder::new(font.clone())
            .font_size(size)
            .text_color(fg)
            .anti_aliasing_color(bg)
            .build()
    }

    /// Draw `text` vertically centred on `position`.
    pub fn draw_text<D>(
        &self,
        target: &mut D,
        text: &str,
        position: Point,
        fg_colour: Bgr888,
        bg_colour: Bgr888,
        alignment: Alignment
    ) -> Result<Point, D::Error>
        where D: DrawTarget<Color = Bgr888>
    {
        let text_style = centred_text(alignment);

        match self {
            Self::Mono(font) => {
                let style = MonoTextStyle::new(font, fg_colour);
                Text::with_text_style(text, position, style, text_style).draw(target)
            }
            Self::TrueType { font, size } => {
                let style = Self::ttf_style(font, *size, fg_colour, bg_colour);
                Text::with_text_style(text, position, style, text_style).draw(target)
            }
        }
    }
}

fn centred_text(alignment: Alignment) -> TextStyle {
    TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Middle)
        .build()
}

/// Fonts for the three pieces of text on the dial.
#[derive(Clone)]
pub struct DialFonts {
    /// Selected value next to the thumb
    pub value: DialFont,
    /// Current temperature in the middle of the dial
    pub current: DialFont,
    /// Caption above the current temperature
    pub caption: DialFont
}

impl DialFonts {
    /// Regular face for captions, bold face for the numbers. Sizes are
    /// scaled from a 100% layout by `scale_percent`.
    pub fn truetype(regular: &Font<'static>, bold: &Font<'static>, scale_percent: u32) -> Self {
        Self {
            value: DialFont::truetype(bold, 22 * scale_percent / 100),
            current: DialFont::truetype(bold, 110 * scale_percent / 100),
            caption: DialFont::truetype(regular, 25 * scale_percent / 100)
        }
    }
}

impl Default for DialFonts {
    fn default() -> Self {
        Self {
            value: DialFont::Mono(&FONT_10X20),
            current: DialFont::Mono(&FONT_10X20),
            caption: DialFont::Mono(&FONT_6X13)
        }
    }
}
