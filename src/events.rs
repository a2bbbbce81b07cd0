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

use std::sync::mpsc::{Receiver, Sender, channel};

use anyhow::Result;
use thermostat_dial::TouchEvent;

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Touch(TouchEvent),
    Key(KeyInput),
    /// The user let go of the dial
    DialReleased,
    Quit
}

/// Keyboard input, already reduced to what the demo screen understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyInput {
    Char(char),
    Backspace,
    NextField,
    Submit,
    ToggleEnabled
}

impl KeyInput {
    /// Map a typed character; anything the form can't use is dropped.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '-' => Some(Self::Char(c)),
            'd' | 'D' => Some(Self::ToggleEnabled),
            '\t' => Some(Self::NextField),
            '\n' | '\r' => Some(Self::Submit),
            _ => None
        }
    }
}

pub trait EventSender {
    fn send_event(&self, event: Event) -> Result<()>;
}

pub trait EventHandler {
    fn handle_event(&mut self, event: &Event) -> Result<()>;
}

pub trait EventSource<S: EventSender> {
    fn wait_event(&mut self) -> Result<Event>;
    fn event_sender(&self) -> S;
}

pub struct DefaultEventSource {
    sender: Sender<Event>,
    receiver: Receiver<Event>
}

impl DefaultEventSource {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }
}

impl EventSource<Sender<Event>> for DefaultEventSource {
    fn wait_event(&mut self) -> Result<Event> {
        Ok(self.receiver.recv()?)
    }

    fn event_sender(&self) -> Sender<Event> {
        self.sender.clone()
    }
}

impl EventSender for Sender<Event> {
    fn send_event(&self, event: Event) -> Result<()> {
        Ok(self.send(event)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_characters() {
        assert_eq!(KeyInput::from_char('7'), Some(KeyInput::Char('7')));
        assert_eq!(KeyInput::from_char('-'), Some(KeyInput::Char('-')));
        assert_eq!(KeyInput::from_char('D'), Some(KeyInput::ToggleEnabled));
        assert_eq!(KeyInput::from_char('x'), None);
    }

    #[test]
    fn default_source_delivers_in_order() {
        let mut source = DefaultEventSource::new();
        let sender = source.event_sender();

        sender.send_event(Event::DialReleased).unwrap();
        sender.send_event(Event::Quit).unwrap();

        assert_eq!(source.wait_event().unwrap(), Event::DialReleased);
        assert_eq!(source.wait_event().unwrap(), Event::Quit);
    }
}
