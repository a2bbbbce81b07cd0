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

use std::thread;

use anyhow::Result;
use embedded_graphics::prelude::Point;
use evdev::{AbsoluteAxisCode, Device, EventSummary, KeyCode, SynchronizationCode};
use log::{error, info};
use thermostat_dial::{TouchAction, TouchEvent};

use crate::events::{Event, EventSender, KeyInput};

pub fn start_touch_events<S>(path: &str, sender: S) -> Result<()>
    where S: EventSender + Send + 'static
{
    let mut device = Device::open(path)?;
    info!("Reading touch events from {}", path);

    thread::spawn(move || {
        let mut touch = TouchTracker::default();

        loop {
            let events = match device.fetch_events() {
                Ok(events) => events,
                Err(e) => {
                    error!("Touch device read failed: {}", e);
                    return;
                }
            };

            for e in events {
                let touch_event = match e.destructure() {
                    EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_X | AbsoluteAxisCode::ABS_MT_POSITION_X, x) => {
                        touch.set_x(x);
                        None
                    }
                    EventSummary::AbsoluteAxis(_, AbsoluteAxisCode::ABS_Y | AbsoluteAxisCode::ABS_MT_POSITION_Y, y) => {
                        touch.set_y(y);
                        None
                    }
                    // value 1 = finger down, 0 = lifted
                    EventSummary::Key(_, KeyCode::BTN_TOUCH, value) => {
                        touch.set_pressed(value != 0);
                        None
                    }
                    EventSummary::Synchronization(_, SynchronizationCode::SYN_REPORT, _) =>
                        touch.report(),
                    _ => None
                };

                if let Some(touch_event) = touch_event {
                    if let Err(e) = sender.send_event(Event::Touch(touch_event)) {
                        error!("Failed to send touch event: {}", e);
                        return;
                    }
                }
            }
        }
    });

    Ok(())
}

pub fn start_key_events<S>(path: &str, sender: S) -> Result<()>
    where S: EventSender + Send + 'static
{
    let mut device = Device::open(path)?;
    info!("Reading key events from {}", path);

    thread::spawn(move || {
        loop {
            let events = match device.fetch_events() {
                Ok(events) => events,
                Err(e) => {
                    error!("Key device read failed: {}", e);
                    return;
                }
            };

            for e in events {
                // value 1 = down, followed by value 0 = up
                if let EventSummary::Key(_, code, 1) = e.destructure() {
                    if let Some(event) = map_key(code) {
                        if let Err(e) = sender.send_event(event) {
                            error!("Failed to send key event: {}", e);
                            return;
                        }
                    }
                }
            }
        }
    });

    Ok(())
}

fn map_key(code: KeyCode) -> Option<Event> {
    let digit = match code {
        KeyCode::KEY_0 => Some('0'),
        KeyCode::KEY_1 => Some('1'),
        KeyCode::KEY_2 => Some('2'),
        KeyCode::KEY_3 => Some('3'),
        KeyCode::KEY_4 => Some('4'),
        KeyCode::KEY_5 => Some('5'),
        KeyCode::KEY_6 => Some('6'),
        KeyCode::KEY_7 => Some('7'),
        KeyCode::KEY_8 => Some('8'),
        KeyCode::KEY_9 => Some('9'),
        KeyCode::KEY_MINUS => Some('-'),
        _ => None
    };

    if let Some(c) = digit {
        return Some(Event::Key(KeyInput::Char(c)));
    }

    match code {
        KeyCode::KEY_BACKSPACE => Some(Event::Key(KeyInput::Backspace)),
        KeyCode::KEY_TAB => Some(Event::Key(KeyInput::NextField)),
        KeyCode::KEY_ENTER | KeyCode::KEY_KPENTER => Some(Event::Key(KeyInput::Submit)),
        KeyCode::KEY_D => Some(Event::Key(KeyInput::ToggleEnabled)),
        KeyCode::KEY_ESC => Some(Event::Quit),
        _ => None
    }
}

/// Folds axis and button updates into one touch event per sync report.
#[derive(Default)]
struct TouchTracker {
    position: Point,
    pressed: bool,
    pending: Option<TouchAction>
}

impl TouchTracker {
    fn set_x(&mut self, x: i32) {
        self.position.x = x;
        self.moved();
    }

    fn set_y(&mut self, y: i32) {
        self.position.y = y;
        self.moved();
    }

    fn moved(&mut self) {
        if self.pressed && self.pending.is_none() {
            self.pending = Some(TouchAction::Move);
        }
    }

    fn set_pressed(&mut self, pressed: bool) {
        if pressed != self.pressed {
            self.pressed = pressed;
            self.pending = Some(if pressed { TouchAction::Down } else { TouchAction::Up });
        }
    }

    fn report(&mut self) -> Option<TouchEvent> {
        self.pending.take()
            .map(|action| TouchEvent::new(action, self.position))
    }
}
