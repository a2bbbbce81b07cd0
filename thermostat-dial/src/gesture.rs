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

use embedded_graphics::prelude::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchAction {
    Down,
    Move,
    Up,
    Cancel
}

/// Single pointer sample in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub position: Point
}

impl TouchEvent {
    pub fn new(action: TouchAction, position: Point) -> Self {
        Self { action, position }
    }

    pub fn down(position: Point) -> Self {
        Self::new(TouchAction::Down, position)
    }

    pub fn moved(position: Point) -> Self {
        Self::new(TouchAction::Move, position)
    }

    pub fn up(position: Point) -> Self {
        Self::new(TouchAction::Up, position)
    }

    pub fn cancel(position: Point) -> Self {
        Self::new(TouchAction::Cancel, position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Tracking
}

/// What the dial should do in response to a touch, given the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureStep {
    /// Gesture started: notify, then update from the touch
    Start,
    /// Update from the touch
    Track,
    /// Gesture ended (up or cancel): notify and release
    Stop,
    /// Nothing to do
    Ignore
}

impl GestureState {
    /// Advance the state machine, returning the new state and the step to take.
    pub fn next(self, action: TouchAction) -> (Self, GestureStep) {
        match (self, action) {
            (_, TouchAction::Down) => (Self::Tracking, GestureStep::Start),
            (Self::Tracking, TouchAction::Move) => (Self::Tracking, GestureStep::Track),
            (Self::Tracking, TouchAction::Up | TouchAction::Cancel) =>
                (Self::Idle, GestureStep::Stop),
            (Self::Idle, _) => (Self::Idle, GestureStep::Ignore)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down_move_up() {
        let (state, step) = GestureState::Idle.next(TouchAction::Down);
        assert_eq!((state, step), (GestureState::Tracking, GestureStep::Start));

        let (state, step) = state.next(TouchAction::Move);
        assert_eq!((state, step), (GestureState::Tracking, GestureStep::Track));

        let (state, step) = state.next(TouchAction::Up);
        assert_eq!((state, step), (GestureState::Idle, GestureStep::Stop));
    }

    #[test]
    fn cancel_is_same_as_up() {
        let (state, step) = GestureState::Tracking.next(TouchAction::Cancel);
        assert_eq!((state, step), (GestureState::Idle, GestureStep::Stop));
    }

    #[test]
    fn idle_ignores_everything_but_down() {
        for action in [TouchAction::Move, TouchAction::Up, TouchAction::Cancel] {
            assert_eq!(
                GestureState::Idle.next(action),
                (GestureState::Idle, GestureStep::Ignore)
            );
        }
    }
}
