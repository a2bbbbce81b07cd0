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

use std::{fs, path::{Path, PathBuf}};

use anyhow::Result;
use embedded_graphics::pixelcolor::Bgr888;
use serde::Deserialize;
use thermostat_dial::{DialConfig, DialStyle, de};

use crate::theme::FormStyle;

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub dial: DialConfig,
    pub dial_style: DialStyle,
    pub form_style: FormStyle,
    pub fonts: FontsConfig,
    pub demo: DemoConfig,
    pub device: DeviceConfig
}

impl Config {
    pub fn load<P: AsRef<Path>>(file_path: P) -> Result<Self> {
        let toml_src = fs::read_to_string(file_path)?;
        let config = toml::from_str(&toml_src)?;
        Ok(config)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DemoConfig {
    /// Initial text of the current temperature field
    pub current_temp: String,

    /// Initial dial value, also shown in the target field
    pub target_temp: i32,

    /// Values for which the eco leaf is shown
    pub eco_min: i32,
    pub eco_max: i32,

    /// Current temperatures below this use the cold background
    pub cold_threshold: i32,

    #[serde(deserialize_with = "de::colour")]
    pub cold_colour: Bgr888,

    #[serde(deserialize_with = "de::colour")]
    pub heat_colour: Bgr888
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            current_temp: String::from("25"),
            target_temp: 20,
            eco_min: 21,
            eco_max: 26,
            cold_threshold: 18,
            cold_colour: Bgr888::new(0x33, 0xb5, 0xe5),
            heat_colour: Bgr888::new(0xf5, 0x7f, 0x17)
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct FontsConfig {
    /// TrueType face for captions; built-in fonts are used when unset
    pub regular: Option<PathBuf>,

    /// TrueType face for numbers; falls back to `regular`
    pub bold: Option<PathBuf>,

    /// Dial text size relative to a 100% layout
    pub scale_percent: u32
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            regular: None,
            bold: None,
            scale_percent: 60
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct DeviceConfig {
    /// Path to framebuffer device file
    pub framebuffer: String,

    /// Touchscreen input device
    pub touch_device: String,

    /// Optional keyboard input device for editing the form
    pub keyboard_device: Option<String>
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            framebuffer: String::from("/dev/fb0"),
            touch_device: String::from("/dev/input/event0"),
            keyboard_device: Some(String::from("/dev/input/event1"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.dial, DialConfig::default());
        assert_eq!(config.demo.current_temp, "25");
        assert_eq!(config.demo.target_temp, 20);
        assert_eq!((config.demo.eco_min, config.demo.eco_max), (21, 26));
        assert_eq!(config.fonts.regular, None);
        assert_eq!(config.device.framebuffer, "/dev/fb0");
    }

    #[test]
    fn sections_override_defaults() {
        let config: Config = toml::from_str(r##"
            [dial]
            min = 10
            max = 30
            start_angle = 30
            sweep_angle = 300

            [demo]
            target_temp = 22
            cold_colour = [0, 0, 255]
            heat_colour = "#ff0000"

            [fonts]
            regular = "/usr/share/fonts/Roboto-Regular.ttf"

            [device]
            keyboard_device = "/dev/input/event3"
        "##).unwrap();

        assert_eq!(config.dial.min, 10);
        assert_eq!(config.dial.max, 30);
        assert_eq!(config.dial.sweep_angle, 300);
        assert_eq!(config.demo.target_temp, 22);
        assert_eq!(config.demo.eco_min, 21);
        assert_eq!(config.demo.cold_colour, Bgr888::new(0, 0, 255));
        assert_eq!(config.demo.heat_colour, Bgr888::new(255, 0, 0));
        assert_eq!(
            config.fonts.regular,
            Some(PathBuf::from("/usr/share/fonts/Roboto-Regular.ttf"))
        );
        assert_eq!(config.fonts.scale_percent, 60);
        assert_eq!(config.device.keyboard_device.as_deref(), Some("/dev/input/event3"));
    }

    #[test]
    fn sample_config_loads() {
        let config = Config::load(concat!(env!("CARGO_MANIFEST_DIR"), "/thermostat.toml")).unwrap();

        assert_eq!((config.dial.min, config.dial.max), (10, 30));
        assert!(config.dial.rounded_edges);
        assert_eq!(config.dial_style.thumb_size, embedded_graphics::prelude::Size::new(24, 24));
        assert_eq!(config.device.touch_device, "/dev/input/event0");
    }

    #[test]
    fn bad_colour_is_an_error() {
        let result: Result<Config, _> = toml::from_str(r#"
            [demo]
            cold_colour = "blue"
        "#);

        assert!(result.is_err());
    }
}
