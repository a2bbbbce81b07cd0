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

use anyhow::Result;
use embedded_graphics::{prelude::*, primitives::Rectangle};
use log::{debug, error, info, warn};
use thermostat_dial::{DialFont, DialFonts, DialListener, DialWidget, GestureState, TouchAction, TouchEvent};

use crate::{
    config::{Config, DemoConfig},
    drawable::{AppDrawable, AppFrameBuf, SCREEN_WIDTH},
    events::{Event, EventHandler, EventSender, KeyInput},
    theme::FormStyle,
    widgets::{ButtonWidget, TextFieldWidget}
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Current,
    Target
}

/// Dial on top, current/target fields and a save button below.
pub struct DemoScreen {
    dial: DialWidget,
    current_field: TextFieldWidget,
    target_field: TextFieldWidget,
    save_button: ButtonWidget,
    focus: Focus,
    demo: DemoConfig,
    style: FormStyle,
    font: DialFont,
    dirty: bool
}

impl DemoScreen {
    pub fn new<S>(config: &Config, fonts: DialFonts, event_sender: S) -> Self
        where S: EventSender + 'static
    {
        let demo = config.demo.clone();
        let style = config.form_style.clone();
        let font = fonts.value.clone();

        let width = SCREEN_WIDTH as u32;
        let mut dial = DialWidget::new(&config.dial, config.dial_style.clone(), fonts);
        dial.layout(Rectangle::new(Point::zero(), Size::new_equal(width)));
        dial.set_current_temperature(demo.current_temp.as_str());
        dial.set_progress(demo.target_temp);
        dial.set_leaf_limit(demo.eco_min, demo.eco_max);
        dial.set_listener(DialEvents { event_sender });

        let field_y = width as i32 + 26;
        let field_x = |column: i32| column * width as i32 / 4 - style.field_size.width as i32 / 2;

        let current_field = TextFieldWidget::new(
            "Current",
            &demo.current_temp,
            Rectangle::new(Point::new(field_x(1), field_y), style.field_size)
        );

        let target_field = TextFieldWidget::new(
            "Target",
            &dial.progress().to_string(),
            Rectangle::new(Point::new(field_x(3), field_y), style.field_size)
        );

        let button_pos = Point::new(
            (width - style.button_size.width) as i32 / 2,
            field_y + style.field_size.height as i32 + 12
        );
        let save_button = ButtonWidget::new("Save", Rectangle::new(button_pos, style.button_size));

        Self {
            dial,
            current_field,
            target_field,
            save_button,
            focus: Focus::Target,
            demo,
            style,
            font,
            dirty: true
        }
    }

    pub fn dial(&self) -> &DialWidget {
        &self.dial
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn current_text(&self) -> &str {
        self.current_field.text()
    }

    pub fn target_text(&self) -> &str {
        self.target_field.text()
    }

    pub fn needs_redraw(&self) -> bool {
        self.dirty || self.dial.needs_redraw()
    }

    pub fn mark_drawn(&mut self) {
        self.dirty = false;
        self.dial.mark_drawn();
    }

    fn handle_touch(&mut self, touch: &TouchEvent) {
        let dial_touch = self.dial.gesture_state() == GestureState::Tracking
            || self.dial.bounds().contains(touch.position);

        if dial_touch && self.dial.on_touch_event(*touch) {
            return;
        }

        if touch.action != TouchAction::Down {
            return;
        }

        if self.current_field.contains(touch.position) {
            self.set_focus(Focus::Current);
        } else if self.target_field.contains(touch.position) {
            self.set_focus(Focus::Target);
        } else if self.save_button.contains(touch.position) {
            self.save();
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        match key {
            KeyInput::Char(c) => {
                if self.focused_field().push(c) {
                    self.dirty = true;
                }
            }
            KeyInput::Backspace => {
                if self.focused_field().pop() {
                    self.dirty = true;
                }
            }
            KeyInput::NextField => {
                let next = match self.focus {
                    Focus::Current => Focus::Target,
                    Focus::Target => Focus::Current
                };
                self.set_focus(next);
            }
            KeyInput::Submit => self.save(),
            KeyInput::ToggleEnabled => {
                let enabled = !self.dial.is_enabled();
                info!("Dial {}", if enabled { "enabled" } else { "disabled" });
                self.dial.set_enabled(enabled);
            }
        }
    }

    fn focused_field(&mut self) -> &mut TextFieldWidget {
        match self.focus {
            Focus::Current => &mut self.current_field,
            Focus::Target => &mut self.target_field
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            self.focus = focus;
            self.dirty = true;
        }
    }

    /// Push the form values into the dial.
    fn save(&mut self) {
        let current = self.current_field.text();
        if !current.is_empty() {
            self.dial.set_current_temperature(current);

            match current.parse::<i32>() {
                Ok(temp) => {
                    let colour = if temp < self.demo.cold_threshold {
                        self.demo.cold_colour
                    } else {
                        self.demo.heat_colour
                    };
                    self.dial.set_background_colour(colour);
                }
                Err(e) => warn!("Ignoring current temperature {:?}: {}", current, e)
            }
        }

        let target = self.target_field.text();
        if !target.is_empty() {
            match target.parse::<i32>() {
                Ok(value) => self.dial.set_progress(value),
                Err(e) => warn!("Ignoring target temperature {:?}: {}", target, e)
            }
        }
    }
}

impl EventHandler for DemoScreen {
    fn handle_event(&mut self, event: &Event) -> Result<()> {
        match event {
            Event::Touch(touch) => self.handle_touch(touch),
            Event::Key(key) => self.handle_key(*key),
            Event::DialReleased => {
                self.target_field.set_text(self.dial.progress().to_string());
                self.dirty = true;
            }
            Event::Quit => { }
        }
        Ok(())
    }
}

impl AppDrawable for DemoScreen {
    fn draw(&self, target: &mut AppFrameBuf) -> Result<()> {
        target.clear(self.style.bg_colour)?;

        self.dial.draw(target)?;

        self.current_field.draw(target, &self.style, &self.font, self.focus == Focus::Current)?;
        self.target_field.draw(target, &self.style, &self.font, self.focus == Focus::Target)?;
        self.save_button.draw(target, &self.style, &self.font)?;

        Ok(())
    }
}

/// Relays dial notifications onto the event queue.
struct DialEvents<S> {
    event_sender: S
}

impl<S: EventSender> DialListener for DialEvents<S> {
    fn on_progress_changed(&mut self, value: i32, from_user: bool) {
        debug!("Dial value {} (from user: {})", value, from_user);
    }

    fn on_start_tracking_touch(&mut self) {
        debug!("Dial pressed");
    }

    fn on_stop_tracking_touch(&mut self) {
        if let Err(e) = self.event_sender.send_event(Event::DialReleased) {
            error!("Failed to send dial release: {}", e);
        }
    }
}
