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

use std::sync::Arc;

use anyhow::{Result, anyhow};
use embedded_graphics::prelude::*;
use sdl2::{
    EventPump,
    event::{Event as SdlEvent, EventSender as SdlEventSender, WindowEvent},
    keyboard::Keycode,
    mouse::MouseButton,
    pixels::PixelFormatEnum,
    render::Canvas,
    video::Window
};
use thermostat_dial::TouchEvent;

use crate::{
    drawable::{AppDrawable, AppFrameBuf, SCREEN_HEIGHT, SCREEN_WIDTH, new_frame_buf},
    events::{Event, EventSender, EventSource, KeyInput}
};

pub struct SdlWindow {
    window_canvas: Canvas<Window>,
    buffer: Box<AppFrameBuf>
}

impl SdlWindow {
    pub fn new() -> Result<Self> {
        let sdl_context = sdl2::init()
            .map_err(|e| anyhow!(e))?;

        let window = sdl_context.video()
            .map_err(|e| anyhow!(e))?
            .window("Virtual Thermostat", SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
            .position_centered()
            .build()?;

        let window_canvas = window.into_canvas()
            .build()
            .map_err(|e| anyhow!(e))?;

        let buffer = Box::new(new_frame_buf());

        Ok(Self { window_canvas, buffer })
    }

    fn flush(&mut self) -> Result<()> {
        let texture_creator = self.window_canvas.texture_creator();
        let mut texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::BGR888, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32)
            .map_err(|e| anyhow!(e))?;

        texture.with_lock(None, |dest, _| {
            for (i, p) in self.buffer.data.iter().enumerate() {
                let offset = i*4;
                dest[offset] = p.r();
                dest[offset + 1] = p.g();
                dest[offset + 2] = p.b();
            }
        }).map_err(|e| anyhow!(e))?;

        self.window_canvas.clear();
        self.window_canvas.copy(&texture, None, None)
            .map_err(|e| anyhow!(e))?;
        self.window_canvas.present();

        Ok(())
    }

    pub fn draw_screen(&mut self, screen: &dyn AppDrawable) -> Result<()> {
        screen.draw(&mut self.buffer)?;
        self.flush()?;
        Ok(())
    }
}

/// Mouse stands in for the touchscreen, the keyboard edits the form.
pub struct SdlEventSource {
    event_pump: EventPump,
    event_sender: SdlEventSenderHandle,
    last_mouse: Point
}

impl SdlEventSource {
    pub fn new() -> Result<Self> {
        let sdl_context = sdl2::init()
            .map_err(|e| anyhow!(e))?;

        let event_pump = sdl_context.event_pump()
            .map_err(|e| anyhow!(e))?;

        let sdl_events = sdl_context.event()
            .map_err(|e| anyhow!(e))?;

        sdl_events.register_custom_event::<Event>()
            .map_err(|e| anyhow!(e))?;

        let event_sender = SdlEventSenderHandle::new(sdl_events.event_sender());

        Ok(Self {
            event_pump,
            event_sender,
            last_mouse: Point::zero()
        })
    }

    fn map_sdl_event(&mut self, event: SdlEvent) -> Option<Event> {
        match event {
            SdlEvent::Quit { .. } =>
                Some(Event::Quit),
            SdlEvent::MouseButtonDown { mouse_btn: MouseButton::Left, x, y, .. } => {
                self.last_mouse = Point::new(x, y);
                Some(Event::Touch(TouchEvent::down(self.last_mouse)))
            }
            SdlEvent::MouseMotion { mousestate, x, y, .. } if mousestate.left() => {
                self.last_mouse = Point::new(x, y);
                Some(Event::Touch(TouchEvent::moved(self.last_mouse)))
            }
            SdlEvent::MouseButtonUp { mouse_btn: MouseButton::Left, x, y, .. } => {
                self.last_mouse = Point::new(x, y);
                Some(Event::Touch(TouchEvent::up(self.last_mouse)))
            }
            SdlEvent::Window { win_event: WindowEvent::Leave, .. } =>
                Some(Event::Touch(TouchEvent::cancel(self.last_mouse))),
            SdlEvent::TextInput { text, .. } =>
                text.chars().next()
                    .and_then(KeyInput::from_char)
                    .map(Event::Key),
            SdlEvent::KeyDown { keycode: Some(keycode), .. } =>
                map_keycode(keycode),
            sdl_event => {
                if sdl_event.is_user_event() {
                    sdl_event.as_user_event_type::<Event>()
                } else {
                    None
                }
            }
        }
    }
}

fn map_keycode(keycode: Keycode) -> Option<Event> {
    match keycode {
        Keycode::ESCAPE => Some(Event::Quit),
        Keycode::BACKSPACE => Some(Event::Key(KeyInput::Backspace)),
        Keycode::TAB => Some(Event::Key(KeyInput::NextField)),
        Keycode::RETURN | Keycode::KP_ENTER => Some(Event::Key(KeyInput::Submit)),
        _ => None
    }
}

impl EventSource<SdlEventSenderHandle> for SdlEventSource {
    fn wait_event(&mut self) -> Result<Event> {
        loop {
            let event = self.event_pump.wait_event();
            if let Some(event) = self.map_sdl_event(event) {
                return Ok(event);
            }
        }
    }

    fn event_sender(&self) -> SdlEventSenderHandle {
        self.event_sender.clone()
    }
}

#[derive(Clone)]
pub struct SdlEventSenderHandle {
    inner: Arc<SdlEventSender>
}

impl SdlEventSenderHandle {
    fn new(sender: SdlEventSender) -> Self {
        Self { inner: Arc::new(sender) }
    }
}

impl EventSender for SdlEventSenderHandle {
    fn send_event(&self, event: Event) -> Result<()> {
        self.inner.push_custom_event(event)
            .map_err(|e| anyhow!(e))
    }
}
