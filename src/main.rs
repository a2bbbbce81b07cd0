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

mod config;
mod demo_screen;
mod drawable;
mod events;
mod fonts;
#[cfg(feature = "device")]
mod input_events;
mod theme;
mod widgets;
mod window;

use std::path::PathBuf;

use anyhow::Result;
use argh::FromArgs;
use log::info;

use crate::config::{Config, DeviceConfig};
use crate::demo_screen::DemoScreen;
use crate::events::{Event, EventHandler, EventSender, EventSource};

#[derive(FromArgs)]
/// Circular thermostat dial demo
struct Args {
    /// path to TOML config file
    #[argh(option, short = 'c')]
    config: Option<PathBuf>,

    /// log debug messages
    #[argh(switch, short = 'v')]
    verbose: bool
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    init_logging(args.verbose)?;

    let config = match &args.config {
        Some(path) => {
            info!("Loading config {}", path.display());
            Config::load(path)?
        }
        None => Config::default()
    };

    let fonts = fonts::load_fonts(&config.fonts)?;

    let mut event_source = window::new_event_source()?;
    let mut window = window::new_window(&config.device)?;
    let mut screen = DemoScreen::new(&config, fonts, event_source.event_sender());

    start_input_threads(&config.device, &event_source)?;

    'running: loop {
        if screen.needs_redraw() {
            window.draw_screen(&screen)?;
            screen.mark_drawn();
        }

        let event = event_source.wait_event()?;
        if matches!(event, Event::Quit) {
            break 'running;
        }

        screen.handle_event(&event)?;
    }

    Ok(())
}

#[cfg(feature = "simulate")]
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(level));
    Ok(())
}

#[cfg(feature = "device")]
fn init_logging(verbose: bool) -> Result<()> {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    syslog::init(syslog::Facility::LOG_USER, level, Some("virtual-thermostat"))
        .map_err(|e| anyhow::anyhow!("Error connecting to syslog: {}", e))?;

    Ok(())
}

#[cfg(feature = "device")]
fn start_input_threads<S, E>(config: &DeviceConfig, events: &E) -> Result<()>
    where S: EventSender + Send + 'static, E: EventSource<S>
{
    input_events::start_touch_events(&config.touch_device, events.event_sender())?;

    if let Some(keyboard) = &config.keyboard_device {
        input_events::start_key_events(keyboard, events.event_sender())?;
    }

    Ok(())
}

#[cfg(feature = "simulate")]
fn start_input_threads<S, E>(_config: &DeviceConfig, _events: &E) -> Result<()>
    where S: EventSender, E: EventSource<S>
{
    Ok(())
}
