//! The fixed table of named commands.
//!
//! [`Catalog::generate`] walks the cross product of the vertical tokens
//! `{up, down, none}` and the horizontal tokens `{left, right, none}`.  Every
//! combination except `(none, none)` yields two commands: a normal-speed one
//! named after the tokens (`"upright"`) and a slow one with a `-slowly`
//! suffix (`"upright-slowly"`).  A single `"center"` command is appended
//! last, giving 17 entries in total.

use crate::command::{Direction, SpeedMode};

/// Name of the centering command.  It has no slow variant.
pub const CENTER: &str = "center";

/// Vertical tokens and their multipliers, in generation order.
const VERTICAL: [(&str, i32); 3] = [("up", -1), ("down", 1), ("", 0)];

/// Horizontal tokens and their multipliers, in generation order.
const HORIZONTAL: [(&str, i32); 3] = [("left", -1), ("right", 1), ("", 0)];

/// What a command does when invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Nudge the window one step in `direction` at `speed`.
    Move {
        direction: Direction,
        speed: SpeedMode,
    },
    /// Move the window to the center of its display.
    Center,
}

/// One named, independently invocable command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDescriptor {
    pub name: String,
    pub action: Action,
}

/// Immutable list of every command the daemon exposes.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CommandDescriptor>,
}

impl Catalog {
    /// Generate the catalog.  Deterministic; calling it twice yields equal
    /// catalogs.
    pub fn generate() -> Self {
        let mut entries = Vec::with_capacity(17);
        for (v_token, v) in VERTICAL {
            for (h_token, h) in HORIZONTAL {
                // (0, 0) has no direction and is skipped here.
                let Some(direction) = Direction::from_multipliers(h, v) else {
                    continue;
                };
                let base = format!("{}{}", v_token, h_token);
                for speed in [SpeedMode::Normal, SpeedMode::Slow] {
                    entries.push(CommandDescriptor {
                        name: format!("{}{}", base, speed.suffix()),
                        action: Action::Move { direction, speed },
                    });
                }
            }
        }
        entries.push(CommandDescriptor {
            name: CENTER.to_string(),
            action: Action::Center,
        });
        Self { entries }
    }

    /// Look up a command by name.
    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.entries.iter().find(|e| e.name == name)
    }

    /// Find the directional command for `direction` at `speed`.
    pub fn find_move(&self, direction: Direction, speed: SpeedMode) -> Option<&CommandDescriptor> {
        self.entries
            .iter()
            .find(|e| e.action == Action::Move { direction, speed })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::generate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_seventeen_entries() {
        let catalog = Catalog::generate();
        assert_eq!(catalog.len(), 17);
        let moves = catalog
            .iter()
            .filter(|e| matches!(e.action, Action::Move { .. }))
            .count();
        assert_eq!(moves, 16);
        let centers: Vec<_> = catalog.iter().filter(|e| e.action == Action::Center).collect();
        assert_eq!(centers.len(), 1);
        assert_eq!(centers[0].name, "center");
    }

    #[test]
    fn every_direction_has_normal_and_slow_command() {
        let catalog = Catalog::generate();
        for dir in Direction::ALL {
            for speed in [SpeedMode::Normal, SpeedMode::Slow] {
                assert!(catalog.find_move(dir, speed).is_some(), "missing {} {:?}", dir, speed);
            }
            let normal = &catalog.find_move(dir, SpeedMode::Normal).unwrap().name;
            let slow = &catalog.find_move(dir, SpeedMode::Slow).unwrap().name;
            assert_eq!(*slow, format!("{}-slowly", normal));
        }
    }

    #[test]
    fn names_come_from_the_token_table() {
        let catalog = Catalog::generate();
        let name = |d, s| catalog.find_move(d, s).unwrap().name.as_str();
        assert_eq!(name(Direction::UpLeft, SpeedMode::Normal), "upleft");
        assert_eq!(name(Direction::DownRight, SpeedMode::Slow), "downright-slowly");
        assert_eq!(name(Direction::Left, SpeedMode::Normal), "left");
    }

    #[test]
    fn names_are_vertical_then_horizontal() {
        let catalog = Catalog::generate();
        let names: HashSet<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        for expected in [
            "upleft", "upright", "up", "downleft", "downright", "down", "left", "right",
            "upleft-slowly", "upright-slowly", "up-slowly", "downleft-slowly",
            "downright-slowly", "down-slowly", "left-slowly", "right-slowly", "center",
        ] {
            assert!(names.contains(expected), "missing {}", expected);
        }
        assert_eq!(names.len(), 17);
    }

    #[test]
    fn upright_carries_positive_h_negative_v() {
        let catalog = Catalog::generate();
        let entry = catalog.get("upright-slowly").unwrap();
        assert_eq!(
            entry.action,
            Action::Move {
                direction: Direction::UpRight,
                speed: SpeedMode::Slow
            }
        );
        if let Action::Move { direction, .. } = entry.action {
            assert_eq!(direction.multipliers(), (1, -1));
        }
    }

    #[test]
    fn no_empty_or_slow_center_command() {
        let catalog = Catalog::generate();
        assert!(catalog.get("").is_none());
        assert!(catalog.get("-slowly").is_none());
        assert!(catalog.get("center-slowly").is_none());
    }

    #[test]
    fn generation_is_deterministic() {
        let a: Vec<_> = Catalog::generate().iter().cloned().collect();
        let b: Vec<_> = Catalog::generate().iter().cloned().collect();
        assert_eq!(a, b);
    }
}
