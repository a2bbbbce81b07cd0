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

use anyhow::{Result, anyhow};
use embedded_graphics::prelude::*;
use linuxfb::Framebuffer;
use log::info;

use crate::{
    config::DeviceConfig,
    drawable::{AppDrawable, AppFrameBuf, SCREEN_HEIGHT, SCREEN_WIDTH, new_frame_buf}
};

pub struct FramebufferWindow {
    fb_dev: Framebuffer,
    fb_width: usize,
    fb_height: usize,
    bytes_per_pixel: usize,
    buffer: Box<AppFrameBuf>
}

impl FramebufferWindow {
    pub fn new(config: &DeviceConfig) -> Result<Self> {
        let mut fb_dev = Framebuffer::new(&config.framebuffer)
            .or(Err(anyhow!("Error opening {}", config.framebuffer)))?;

        // the panning offset is not always reset when the device is opened
        fb_dev.set_offset(0, 0)
            .or(Err(anyhow!("Error changing offset of {}", config.framebuffer)))?;

        let (width, height) = fb_dev.get_size();
        let bytes_per_pixel = fb_dev.get_bytes_per_pixel() as usize;

        if bytes_per_pixel < 3 {
            return Err(anyhow!("Unsupported framebuffer depth {} bytes per pixel", bytes_per_pixel));
        }

        info!("Framebuffer {} is {}x{}, {} bytes per pixel", config.framebuffer, width, height, bytes_per_pixel);

        Ok(Self {
            fb_dev,
            fb_width: width as usize,
            fb_height: height as usize,
            bytes_per_pixel,
            buffer: Box::new(new_frame_buf())
        })
    }

    fn flush(&self) -> Result<()> {
        let mut fb_mem = self.fb_dev.map()
            .or(Err(anyhow!("Error mapping framebuffer memory")))?;

        let stride = self.fb_width * self.bytes_per_pixel;
        let width = SCREEN_WIDTH.min(self.fb_width);
        let height = SCREEN_HEIGHT.min(self.fb_height);

        // screens larger than the device are clipped to the top left
        for y in 0..height {
            for x in 0..width {
                let p = self.buffer.data[y * SCREEN_WIDTH + x];
                let offset = y * stride + x * self.bytes_per_pixel;
                fb_mem[offset] = p.b();
                fb_mem[offset + 1] = p.g();
                fb_mem[offset + 2] = p.r();
            }
        }

        Ok(())
    }

    pub fn draw_screen(&mut self, screen: &dyn AppDrawable) -> Result<()> {
        screen.draw(&mut self.buffer)?;
        self.flush()?;
        Ok(())
    }
}
