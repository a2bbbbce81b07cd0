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

use embedded_graphics::{pixelcolor::Bgr888, prelude::*, primitives::Rectangle};
use log::{debug, trace};

use crate::{
    DialConfig, DialFonts, DialListener, DialStyle,
    angle::{angle_for_progress, progress_for_angle, touch_degrees},
    colour::{interpolate_colour, progress_bias},
    geometry::{DialGeometry, thumb_angle},
    gesture::{GestureState, GestureStep, TouchEvent},
    hit_test::{is_touch_ignored, touch_ignore_radius},
    range::ValueRange
};

/// Circular thermostat dial.
///
/// Holds the selected value as an offset from `min` and keeps the derived
/// geometry in step with it. Call [`DialWidget::layout`] once the screen
/// bounds are known, before the first draw or touch.
pub struct DialWidget {
    range: ValueRange,
    /// Offset from `range.min()`, always within `0..=range.width()`
    progress: i64,
    /// Degrees of the arc covered by `progress`
    progress_sweep: f32,

    progress_width: u32,
    arc_width: u32,
    start_angle: i32,
    sweep_angle: i32,
    rotation: i32,
    rounded_edges: bool,
    touch_inside: bool,
    clockwise: bool,
    enabled: bool,
    preview: bool,
    padding: u32,

    leaf_down: i32,
    leaf_up: i32,
    current_temperature: String,

    gesture: GestureState,
    pressed: bool,
    touch_ignore_radius: f32,
    bounds: Rectangle,
    geometry: DialGeometry,

    pub(crate) style: DialStyle,
    pub(crate) fonts: DialFonts,
    listener: Option<Box<dyn DialListener>>,
    dirty: bool
}

impl DialWidget {
    pub fn new(config: &DialConfig, style: DialStyle, fonts: DialFonts) -> Self {
        debug!("Initialising dial {:?}", config);

        let range = ValueRange::new(config.min, config.max);
        let progress = range.clamp_offset(range.to_offset(config.progress));
        let sweep_angle = clamp_sweep(config.sweep_angle);

        let mut dial = Self {
            range,
            progress,
            progress_sweep: angle_for_progress(progress, range.width(), sweep_angle),
            progress_width: config.progress_width,
            arc_width: config.arc_width,
            start_angle: clamp_start(config.start_angle),
            sweep_angle,
            rotation: config.rotation,
            rounded_edges: config.rounded_edges,
            touch_inside: config.touch_inside,
            clockwise: config.clockwise,
            enabled: config.enabled,
            preview: false,
            padding: config.padding,
            leaf_down: 0,
            leaf_up: 0,
            current_temperature: String::from("0"),
            gesture: GestureState::Idle,
            pressed: false,
            touch_ignore_radius: 0.0,
            bounds: Rectangle::zero(),
            geometry: DialGeometry::default(),
            style,
            fonts,
            listener: None,
            dirty: true
        };

        dial.update_touch_ignore_radius();
        dial
    }

    /// Fit the dial inside `bounds` (screen coordinates).
    pub fn layout(&mut self, bounds: Rectangle) {
        self.bounds = bounds;
        self.geometry = DialGeometry::layout(bounds, self.padding);
        self.update_thumb_position();
        self.update_touch_ignore_radius();
        self.invalidate();
    }

    pub fn bounds(&self) -> Rectangle {
        self.bounds
    }

    pub fn geometry(&self) -> &DialGeometry {
        &self.geometry
    }

    /// Replace the listener; only one is held at a time.
    pub fn set_listener<L: DialListener + 'static>(&mut self, listener: L) {
        self.listener = Some(Box::new(listener));
    }

    pub fn remove_listener(&mut self) {
        self.listener = None;
    }

    /// Feed a touch sample to the dial.
    ///
    /// Returns `false` when the dial is disabled, leaving the event for
    /// whatever sits behind it.
    pub fn on_touch_event(&mut self, event: TouchEvent) -> bool {
        if !self.enabled {
            return false;
        }

        let (gesture, step) = self.gesture.next(event.action);
        self.gesture = gesture;

        match step {
            GestureStep::Start => {
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_start_tracking_touch();
                }
                self.update_on_touch(event.position);
            }
            GestureStep::Track => {
                self.update_on_touch(event.position);
            }
            GestureStep::Stop => {
                if let Some(listener) = self.listener.as_mut() {
                    listener.on_stop_tracking_touch();
                }
                self.set_pressed(false);
            }
            GestureStep::Ignore => { }
        }

        true
    }

    fn update_on_touch(&mut self, position: Point) {
        if is_touch_ignored(position, self.geometry.center, self.touch_ignore_radius) {
            trace!("Touch {:?} inside inert radius {}", position, self.touch_ignore_radius);
            return;
        }

        self.set_pressed(true);

        let angle = touch_degrees(
            position,
            self.geometry.center,
            self.clockwise,
            self.rotation,
            self.start_angle
        );

        let progress = progress_for_angle(angle, self.range.width(), self.sweep_angle);
        if progress.is_none() {
            trace!("Touch at {:.1} degrees is outside the sweep", angle);
        }

        self.update_progress(progress, true);
    }

    /// Store a new offset and notify the listener. `None` (a touch outside
    /// the sweep) leaves everything untouched.
    fn update_progress(&mut self, offset: Option<i64>, from_user: bool) {
        let Some(offset) = offset else {
            return;
        };

        self.progress = self.range.clamp_offset(offset);
        self.update_progress_sweep();

        let value = self.progress();
        if let Some(listener) = self.listener.as_mut() {
            listener.on_progress_changed(value, from_user);
        }

        self.invalidate();
    }

    fn update_progress_sweep(&mut self) {
        self.progress_sweep = angle_for_progress(
            self.progress,
            self.range.width(),
            self.sweep_angle
        );
        self.update_thumb_position();
    }

    fn update_thumb_position(&mut self) {
        let angle = thumb_angle(self.start_angle, self.progress_sweep, self.rotation);
        self.geometry.place_thumb(angle, self.style.value_offset_deg, self.clockwise);
    }

    fn update_touch_ignore_radius(&mut self) {
        self.touch_ignore_radius = touch_ignore_radius(
            self.geometry.arc_radius,
            self.touch_inside,
            self.style.thumb_size
        );
    }

    /// Swap in a new range, keeping the absolute value where possible.
    fn set_range(&mut self, range: ValueRange) {
        let value = self.progress();
        let offset = range.clamp_offset(range.to_offset(value));
        self.range = range;

        if range.to_absolute(offset) != value {
            self.update_progress(Some(offset), false);
        } else {
            self.progress = offset;
            self.update_progress_sweep();
            self.invalidate();
        }
    }

    fn set_pressed(&mut self, pressed: bool) {
        if self.pressed != pressed {
            self.pressed = pressed;
            self.invalidate();
        }
    }

    fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// True when something changed since the last [`DialWidget::mark_drawn`].
    pub fn needs_redraw(&self) -> bool {
        self.dirty
    }

    pub fn mark_drawn(&mut self) {
        self.dirty = false;
    }

    /// Selected value, absolute.
    pub fn progress(&self) -> i32 {
        self.range.to_absolute(self.progress)
    }

    /// Select `value` (absolute), clamped into `min..=max`.
    pub fn set_progress(&mut self, value: i32) {
        self.update_progress(Some(self.range.to_offset(value)), false);
    }

    pub fn progress_sweep(&self) -> f32 {
        self.progress_sweep
    }

    pub fn min(&self) -> i32 {
        self.range.min()
    }

    /// Move the lower bound; the upper bound stays put.
    pub fn set_min(&mut self, min: i32) {
        self.set_range(self.range.with_min(min));
    }

    pub fn max(&self) -> i32 {
        self.range.max()
    }

    /// Move the upper bound; the lower bound stays put.
    pub fn set_max(&mut self, max: i32) {
        self.set_range(self.range.with_max(max));
    }

    pub fn progress_width(&self) -> u32 {
        self.progress_width
    }

    pub fn set_progress_width(&mut self, width: u32) {
        self.progress_width = width;
        self.invalidate();
    }

    pub fn arc_width(&self) -> u32 {
        self.arc_width
    }

    pub fn set_arc_width(&mut self, width: u32) {
        self.arc_width = width;
        self.invalidate();
    }

    pub fn arc_rotation(&self) -> i32 {
        self.rotation
    }

    pub fn set_arc_rotation(&mut self, rotation: i32) {
        self.rotation = rotation;
        self.update_thumb_position();
        self.invalidate();
    }

    pub fn start_angle(&self) -> i32 {
        self.start_angle
    }

    /// Angles past 360 or below 0 reset the start to 12 o'clock.
    pub fn set_start_angle(&mut self, angle: i32) {
        self.start_angle = clamp_start(angle);
        self.update_thumb_position();
        self.invalidate();
    }

    pub fn sweep_angle(&self) -> i32 {
        self.sweep_angle
    }

    pub fn set_sweep_angle(&mut self, angle: i32) {
        self.sweep_angle = clamp_sweep(angle);
        self.update_progress_sweep();
        self.invalidate();
    }

    pub fn rounded_edges(&self) -> bool {
        self.rounded_edges
    }

    pub fn set_rounded_edges(&mut self, rounded: bool) {
        self.rounded_edges = rounded;
        self.invalidate();
    }

    pub fn touch_inside(&self) -> bool {
        self.touch_inside
    }

    pub fn set_touch_inside(&mut self, touch_inside: bool) {
        self.touch_inside = touch_inside;
        self.update_touch_ignore_radius();
    }

    pub fn touch_ignore_radius(&self) -> f32 {
        self.touch_ignore_radius
    }

    pub fn set_thumb_size(&mut self, size: Size) {
        self.style.thumb_size = size;
        self.update_touch_ignore_radius();
        self.invalidate();
    }

    pub fn is_clockwise(&self) -> bool {
        self.clockwise
    }

    pub fn set_clockwise(&mut self, clockwise: bool) {
        self.clockwise = clockwise;
        self.update_thumb_position();
        self.invalidate();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Disabling the dial ends any drag in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;

        if !enabled && self.gesture == GestureState::Tracking {
            self.gesture = GestureState::Idle;
            if let Some(listener) = self.listener.as_mut() {
                listener.on_stop_tracking_touch();
            }
            self.set_pressed(false);
        }
    }

    /// In preview mode the progress arc keeps the cold colour.
    pub fn set_preview(&mut self, preview: bool) {
        self.preview = preview;
        self.invalidate();
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub fn gesture_state(&self) -> GestureState {
        self.gesture
    }

    pub fn progress_colour(&self) -> Bgr888 {
        self.style.progress_colour
    }

    pub fn set_progress_colour(&mut self, colour: Bgr888) {
        self.style.progress_colour = colour;
        self.invalidate();
    }

    pub fn arc_colour(&self) -> Bgr888 {
        self.style.arc_colour
    }

    pub fn set_arc_colour(&mut self, colour: Bgr888) {
        self.style.arc_colour = colour;
        self.invalidate();
    }

    pub fn background_colour(&self) -> Bgr888 {
        self.style.background_colour
    }

    pub fn set_background_colour(&mut self, colour: Bgr888) {
        self.style.background_colour = colour;
        self.invalidate();
    }

    pub fn current_temperature(&self) -> &str {
        &self.current_temperature
    }

    pub fn set_current_temperature<S: Into<String>>(&mut self, temperature: S) {
        self.current_temperature = temperature.into();
        self.invalidate();
    }

    /// Show the leaf while the value is within `down..=up`. The limits are
    /// taken as given.
    pub fn set_leaf_limit(&mut self, down: i32, up: i32) {
        self.leaf_down = down;
        self.leaf_up = up;
        self.invalidate();
    }

    pub fn leaf_limit(&self) -> (i32, i32) {
        (self.leaf_down, self.leaf_up)
    }

    pub fn is_leaf_visible(&self) -> bool {
        let value = self.progress();
        value >= self.leaf_down && value <= self.leaf_up
    }

    /// Colour of the progress arc at the current value.
    pub fn progress_arc_colour(&self) -> Bgr888 {
        if self.style.gradient {
            let bias = progress_bias(self.progress_sweep, self.sweep_angle);
            interpolate_colour(self.style.cold_colour, self.style.hot_colour, bias, self.preview)
        } else {
            self.style.progress_colour
        }
    }
}

fn clamp_sweep(angle: i32) -> i32 {
    angle.clamp(0, 360)
}

fn clamp_start(angle: i32) -> i32 {
    if (0..=360).contains(&angle) { angle } else { 0 }
}
