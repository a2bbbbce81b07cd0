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
    primitives::{PrimitiveStyle, PrimitiveStyleBuilder}
};
use serde::Deserialize;
use thermostat_dial::de;

/// Colours and sizes of the demo form below the dial.
#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FormStyle {
    #[serde(deserialize_with = "de::colour")]
    pub bg_colour: Bgr888,

    #[serde(deserialize_with = "de::colour")]
    pub label_colour: Bgr888,

    #[serde(deserialize_with = "de::colour")]
    pub text_colour: Bgr888,

    #[serde(deserialize_with = "de::size")]
    pub field_size: Size,

    pub field_rect: RectStyle,

    /// Outline of the field receiving key input
    pub focused_rect: RectStyle,

    #[serde(deserialize_with = "de::size")]
    pub button_size: Size,

    pub button_rect: RectStyle,

    #[serde(deserialize_with = "de::colour")]
    pub button_text_colour: Bgr888
}

impl Default for FormStyle {
    fn default() -> Self {
        Self {
            bg_colour: Bgr888::WHITE,
            label_colour: Bgr888::CSS_DIM_GRAY,
            text_colour: Bgr888::BLACK,
            field_size: Size::new(120, 32),
            field_rect: RectStyle {
                stroke: Some(StrokeStyle { width: 1, colour: Bgr888::CSS_LIGHT_GRAY }),
                fill_colour: Some(Bgr888::WHITE),
                corner_radius: 4
            },
            focused_rect: RectStyle {
                stroke: Some(StrokeStyle { width: 2, colour: Bgr888::new(0x33, 0xb5, 0xe5) }),
                fill_colour: Some(Bgr888::WHITE),
                corner_radius: 4
            },
            button_size: Size::new(120, 36),
            button_rect: RectStyle {
                stroke: None,
                fill_colour: Some(Bgr888::new(0x38, 0x38, 0x38)),
                corner_radius: 6
            },
            button_text_colour: Bgr888::WHITE
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RectStyle {
    pub stroke: Option<StrokeStyle>,
    #[serde(default, deserialize_with = "de::optional_colour")]
    pub fill_colour: Option<Bgr888>,
    #[serde(default)]
    pub corner_radius: u32
}

impl RectStyle {
    pub fn rect_style(&self) -> PrimitiveStyle<Bgr888> {
        let mut style_builder = PrimitiveStyleBuilder::new();

        if let Some(stroke) = &self.stroke {
            style_builder = style_builder
                .stroke_color(stroke.colour)
                .stroke_width(stroke.width);
        }

        if let Some(fill) = self.fill_colour {
            style_builder = style_builder.fill_color(fill);
        }

        style_builder.build()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: u32,
    #[serde(deserialize_with = "de::colour")]
    pub colour: Bgr888
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_form_style() {
        let style: FormStyle = toml::from_str(r##"
            bg_colour = "#000000"
            field_size = [100, 40]

            [button_rect]
            fill_colour = "#00ff00"
        "##).unwrap();

        assert_eq!(style.bg_colour, Bgr888::BLACK);
        assert_eq!(style.field_size, Size::new(100, 40));
        assert_eq!(style.button_rect.fill_colour, Some(Bgr888::GREEN));
        assert_eq!(style.button_rect.stroke, None);
        assert_eq!(style.button_rect.corner_radius, 0);
        assert_eq!(style.text_colour, Bgr888::BLACK);
    }

    #[test]
    fn stroke_only_rect() {
        let rect = RectStyle {
            stroke: Some(StrokeStyle { width: 3, colour: Bgr888::RED }),
            fill_colour: None,
            corner_radius: 0
        };
        let style = rect.rect_style();

        assert_eq!(style.stroke_color, Some(Bgr888::RED));
        assert_eq!(style.stroke_width, 3);
        assert_eq!(style.fill_color, None);
    }
}
