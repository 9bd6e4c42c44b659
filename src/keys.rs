//! Keypad bindings for the command catalog.
//!
//! Directions follow the numeric keypad layout:
//!
//! ```text
//!   7 8 9      upleft   up     upright
//!   4 5 6      left     center right
//!   1 2 3      downleft down   downright
//! ```
//!
//! Every direction is bound twice, `<normal>-KP_<digit>` for the normal
//! command and `<slow>-KP_<digit>` for the slow one.  `KP_5` is bound to
//! `center` under the normal prefix only.

use crate::catalog::{Catalog, CENTER};
use crate::command::{Direction, SpeedMode};
use log::debug;
use std::collections::BTreeMap;

/// Default prefix for normal-speed moves (alt).
pub const DEFAULT_NORMAL_PREFIX: &str = "A";

/// Default prefix for slow moves (control-alt).
pub const DEFAULT_SLOW_PREFIX: &str = "C-A";

/// Keypad digit for each direction.
pub const KEYPAD: [(u8, Direction); 8] = [
    (7, Direction::UpLeft),
    (8, Direction::Up),
    (9, Direction::UpRight),
    (4, Direction::Left),
    (6, Direction::Right),
    (1, Direction::DownLeft),
    (2, Direction::Down),
    (3, Direction::DownRight),
];

/// Keypad digit bound to [`CENTER`].
pub const CENTER_DIGIT: u8 = 5;

/// A table that maps key chords to command names.
///
/// Binding a chord that is already bound replaces the old binding.
pub trait Keymap {
    fn bind(&mut self, chord: &str, command: &str);
}

/// In-memory keymap used as the daemon's window keymap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTable {
    bindings: BTreeMap<String, String>,
}

impl KeyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The command bound to `chord`, if any.
    pub fn lookup(&self, chord: &str) -> Option<&str> {
        self.bindings.get(chord).map(String::as_str)
    }

    /// Iterate over `(chord, command)` pairs, sorted by chord.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Keymap for KeyTable {
    fn bind(&mut self, chord: &str, command: &str) {
        self.bindings.insert(chord.to_string(), command.to_string());
    }
}

/// Build the chord for keypad `digit` under `prefix`, e.g. `"C-A-KP_9"`.
pub fn keypad_chord(prefix: &str, digit: u8) -> String {
    format!("{}-KP_{}", prefix, digit)
}

/// Bind the keypad layout into `keymap`.
///
/// `None` prefixes fall back to [`DEFAULT_NORMAL_PREFIX`] and
/// [`DEFAULT_SLOW_PREFIX`].  Existing bindings for other chords are left
/// alone, so installing twice with different prefixes adds both sets.
/// Returns the number of chords bound (17).
pub fn install_keypad_bindings<K: Keymap + ?Sized>(
    keymap: &mut K,
    catalog: &Catalog,
    normal_prefix: Option<&str>,
    slow_prefix: Option<&str>,
) -> usize {
    let normal_prefix = normal_prefix.unwrap_or(DEFAULT_NORMAL_PREFIX);
    let slow_prefix = slow_prefix.unwrap_or(DEFAULT_SLOW_PREFIX);
    let mut bound = 0;

    for (digit, direction) in KEYPAD {
        for (prefix, speed) in [(normal_prefix, SpeedMode::Normal), (slow_prefix, SpeedMode::Slow)] {
            let Some(descriptor) = catalog.find_move(direction, speed) else {
                continue;
            };
            let chord = keypad_chord(prefix, digit);
            debug!("bind {} -> {}", chord, descriptor.name);
            keymap.bind(&chord, &descriptor.name);
            bound += 1;
        }
    }

    let chord = keypad_chord(normal_prefix, CENTER_DIGIT);
    debug!("bind {} -> {}", chord, CENTER);
    keymap.bind(&chord, CENTER);
    bound + 1
}
