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

use std::{fs, path::Path};

use anyhow::{Result, anyhow};
use log::info;
use rusttype::Font;
use thermostat_dial::DialFonts;

use crate::config::FontsConfig;

/// Dial fonts from the configured TrueType files, or the built-in
/// bitmap fonts when no file is configured.
pub fn load_fonts(config: &FontsConfig) -> Result<DialFonts> {
    let Some(regular_path) = &config.regular else {
        info!("No TrueType font configured, using built-in fonts");
        return Ok(DialFonts::default());
    };

    let regular = load_font(regular_path)?;
    let bold = match &config.bold {
        Some(bold_path) => load_font(bold_path)?,
        None => regular.clone()
    };

    Ok(DialFonts::truetype(&regular, &bold, config.scale_percent))
}

fn load_font(path: &Path) -> Result<Font<'static>> {
    info!("Loading font {}", path.display());

    // fonts are kept for the life of the process
    let data: &'static [u8] = Box::leak(fs::read(path)?.into_boxed_slice());

    Font::try_from_bytes(data)
        .ok_or_else(|| anyhow!("Invalid font file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use thermostat_dial::DialFont;

    #[test]
    fn builtin_fonts_without_config() {
        let fonts = load_fonts(&FontsConfig::default()).unwrap();
        assert!(matches!(fonts.current, DialFont::Mono(_)));
    }

    #[test]
    fn missing_font_file_is_an_error() {
        let config = FontsConfig {
            regular: Some("/nonexistent/font.ttf".into()),
            ..FontsConfig::default()
        };

        assert!(load_fonts(&config).is_err());
    }
}
