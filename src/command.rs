//! Directions, speed modes and the wire-level [`Command`] vocabulary.
//!
//! A [`Direction`] is a unit compass vector `(h, v)` with both components in
//! `{-1, 0, 1}` and never both zero.  How far a window actually travels is
//! decided separately by the step sizes in
//! [`StepConfig`](crate::config::StepConfig).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight compass directions a window can be nudged in.
///
/// Screen coordinates grow to the right and downwards, so `Up` has `v = -1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// All eight directions.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Build a direction from its `(h, v)` multipliers.
    ///
    /// Returns `None` for `(0, 0)` and for any component outside `{-1, 0, 1}`.
    pub fn from_multipliers(h: i32, v: i32) -> Option<Direction> {
        match (h, v) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            (-1, -1) => Some(Direction::UpLeft),
            (1, -1) => Some(Direction::UpRight),
            (-1, 1) => Some(Direction::DownLeft),
            (1, 1) => Some(Direction::DownRight),
            _ => None,
        }
    }

    /// The `(h, v)` multipliers of this direction.
    pub fn multipliers(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (1, -1),
            Direction::DownLeft => (-1, 1),
            Direction::DownRight => (1, 1),
        }
    }

    /// The direction pointing the exact opposite way.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::UpLeft => Direction::DownRight,
            Direction::UpRight => Direction::DownLeft,
            Direction::DownLeft => Direction::UpRight,
            Direction::DownRight => Direction::UpLeft,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
            Direction::UpLeft => write!(f, "up-left"),
            Direction::UpRight => write!(f, "up-right"),
            Direction::DownLeft => write!(f, "down-left"),
            Direction::DownRight => write!(f, "down-right"),
        }
    }
}

/// How far a single directional command moves the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpeedMode {
    /// Move by the configured step sizes.
    Normal,
    /// Move by exactly one unit on each active axis.
    Slow,
}

impl SpeedMode {
    /// Suffix appended to a command name for this speed.
    pub fn suffix(self) -> &'static str {
        match self {
            SpeedMode::Normal => "",
            SpeedMode::Slow => "-slowly",
        }
    }
}

/// Opaque reference to a window owned by the window manager.
///
/// The contents are whatever the backend uses to address a window (on
/// Hyprland, the client address such as `"0x55d0c1a2b3c0"`).  This crate
/// never creates windows; it only passes handles back to the backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WindowHandle(String);

impl WindowHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request delivered to the daemon by a
/// [`CommandSource`](crate::traits::CommandSource).
///
/// Both variants act on the window that is active when the command is
/// handled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// A key chord such as `"A-KP_6"`, resolved through the window keymap.
    Key(String),

    /// Invoke a catalog command by name, e.g. `"upright-slowly"` or
    /// `"center"`.
    Invoke(String),
}
