//! Hyprland-specific implementations.
//!
//! This module provides the concrete
//! [`WindowManager`](crate::traits::WindowManager) backend, powered by
//! Hyprland's IPC socket, and the translation of the window keymap into
//! `hyprland.conf` bind lines.
//!
//! Nothing outside this module should reference Hyprland directly.

pub mod binds;
pub mod wm;
