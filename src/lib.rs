//! **hyprnudge**: move and center windows from the keyboard.
//!
//! Every window can be nudged in eight compass directions, either by the
//! configured step size or by a single pixel, and centered on its display.
//! The 17 resulting commands are bound to the numeric keypad: `ALT+KP_<n>`
//! for normal moves, `CTRL+ALT+KP_<n>` for slow ones and `ALT+KP_5` to
//! center.
//!
//! # Architecture
//!
//! * [`catalog::Catalog`] is the fixed table of named commands.
//! * [`mover::Mover`] runs a command against a window, surrounded by the
//!   ordered callbacks in [`hooks::HookRegistry`].
//! * [`keys`] maps keypad chords onto catalog commands.
//! * [`traits::WindowManager`] abstracts the compositor so the mover is not
//!   coupled to any specific one, and [`traits::CommandSource`] abstracts the
//!   transport that delivers key presses.
//!
//! Concrete implementations live in [`hyprland`] (Hyprland IPC) and
//! [`ipc`] (Unix-socket command listener).

pub mod catalog;
pub mod command;
pub mod config;
pub mod hooks;
pub mod hyprland;
pub mod ipc;
pub mod keys;
pub mod mover;
pub mod traits;
