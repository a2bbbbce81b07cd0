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

/// Receives notifications from a [`DialWidget`](crate::DialWidget).
///
/// All methods default to doing nothing so implementors only pick the
/// events they care about.
pub trait DialListener {
    /// Progress changed to `value` (absolute). `from_user` is true when
    /// the change came from a touch gesture rather than a setter.
    fn on_progress_changed(&mut self, _value: i32, _from_user: bool) { }

    /// A touch gesture started on the dial.
    fn on_start_tracking_touch(&mut self) { }

    /// The touch gesture ended or was cancelled.
    fn on_stop_tracking_touch(&mut self) { }
}
