//! Core traits that decouple hyprnudge from any specific window manager or
//! transport mechanism.
//!
//! Every concrete backend (Hyprland, a Unix-socket listener, a test harness,
//! …) implements one of these traits.  The [`Mover`](crate::mover::Mover)
//! only depends on these abstractions.

use crate::command::{Command, WindowHandle};
use std::sync::mpsc;

/// Placement strategy name that puts a window in the middle of its display.
pub const CENTERED: &str = "centered";

/// Abstraction over a window manager that can report and change window
/// positions.
///
/// An implementation might talk to Hyprland via IPC, or it might be a
/// recording stub used in tests.
pub trait WindowManager {
    /// The error type produced by this window manager.
    type Error: std::error::Error + Send + 'static;

    /// Return the currently focused window, or `None` if no window is
    /// focused.
    fn active_window(&self) -> Result<Option<WindowHandle>, Self::Error>;

    /// Return the top-left corner of `window` in layout coordinates.
    ///
    /// Fails if the handle no longer refers to a live window.
    fn window_position(&self, window: &WindowHandle) -> Result<(i32, i32), Self::Error>;

    /// Move the top-left corner of `window` to `(x, y)`.
    fn move_window_to(&self, window: &WindowHandle, x: i32, y: i32) -> Result<(), Self::Error>;

    /// Whether the placement strategy called `strategy` is known.
    fn supports_placement(&self, strategy: &str) -> bool;

    /// Place `window` using the named strategy (at least [`CENTERED`]).
    fn apply_placement(&self, strategy: &str, window: &WindowHandle) -> Result<(), Self::Error>;
}

/// A source of [`Command`]s.
///
/// Implementations listen on some transport (a Unix socket, an in-memory
/// channel, …) and forward parsed commands into the provided
/// [`mpsc::Sender`].
///
/// # Contract
///
/// * [`run`](CommandSource::run) **blocks** until the source is exhausted or
///   an unrecoverable error occurs.
/// * Each received command must be sent through `sink` exactly once.
/// * Implementations must be [`Send`] so they can run on a dedicated thread.
pub trait CommandSource: Send {
    /// The error type produced by this source.
    type Error: std::error::Error + Send + 'static;

    /// Start listening and forward every incoming [`Command`] into `sink`.
    ///
    /// This method blocks the calling thread.
    fn run(&mut self, sink: mpsc::Sender<Command>) -> Result<(), Self::Error>;
}
