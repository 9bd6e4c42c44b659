//! The orchestrator that ties the command catalog, hooks, keymap and window
//! manager together.
//!
//! Every command is a self-contained synchronous transaction:
//!
//! 1. resolve the step sizes,
//! 2. dispatch the `before` hook,
//! 3. ask the window manager to move or place the window,
//! 4. dispatch the `after` hook.
//!
//! Any failure aborts the remaining steps and is returned to the caller; the
//! `after` hook only runs when the window-manager call succeeded.

use crate::catalog::{Action, Catalog};
use crate::command::{Command, Direction, SpeedMode, WindowHandle};
use crate::config::{ConfigError, StepConfig};
use crate::hooks::{CenterArgs, HookError, HookRegistry, MoveArgs};
use crate::keys::{install_keypad_bindings, KeyTable};
use crate::traits::{WindowManager, CENTERED};
use log::{debug, info};

/// Possible errors from the mover.
#[derive(Debug, thiserror::Error)]
pub enum MoverError {
    /// The window manager returned an error (e.g. the window is gone).
    #[error("window manager error: {0}")]
    WindowManager(String),

    /// A hook callback failed.
    #[error("{event} hook failed: {source}")]
    Hook {
        event: &'static str,
        source: HookError,
    },

    /// The window manager does not know the requested placement strategy.
    #[error("unknown placement strategy: {0}")]
    PlacementStrategyMissing(String),

    /// No catalog command has this name.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// The key chord has no binding in the window keymap.
    #[error("no binding for {0}")]
    Unbound(String),

    /// The step sizes are not positive.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Executes catalog commands against a [`WindowManager`].
///
/// # Typical usage
///
/// ```ignore
/// let mut mover = Mover::new(HyprlandWm::new(), StepConfig::default())?;
/// mover.install_keypad_bindings(None, None);
/// mover.handle(Command::Key("A-KP_6".into()))?;
/// ```
pub struct Mover<W: WindowManager> {
    wm: W,
    steps: StepConfig,
    hooks: HookRegistry,
    catalog: Catalog,
    keymap: KeyTable,
}

impl<W: WindowManager> Mover<W> {
    /// Create a mover with an empty keymap and no hooks.
    ///
    /// Fails if either step is not positive.
    pub fn new(wm: W, steps: StepConfig) -> Result<Self, MoverError> {
        steps.validate()?;
        Ok(Self {
            wm,
            steps,
            hooks: HookRegistry::new(),
            catalog: Catalog::generate(),
            keymap: KeyTable::new(),
        })
    }

    /// The configured normal-speed steps.
    pub fn steps(&self) -> StepConfig {
        self.steps
    }

    /// Replace the configured steps.  Non-positive steps are rejected and
    /// the previous ones kept.
    pub fn set_steps(&mut self, steps: StepConfig) -> Result<(), MoverError> {
        steps.validate()?;
        self.steps = steps;
        Ok(())
    }

    pub fn hooks(&self) -> &HookRegistry {
        &self.hooks
    }

    /// Mutable access to the hook lists, for registering callbacks.
    pub fn hooks_mut(&mut self) -> &mut HookRegistry {
        &mut self.hooks
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The window keymap consulted by [`Command::Key`].
    pub fn keymap(&self) -> &KeyTable {
        &self.keymap
    }

    pub fn keymap_mut(&mut self) -> &mut KeyTable {
        &mut self.keymap
    }

    pub fn window_manager(&self) -> &W {
        &self.wm
    }

    /// Install the keypad layout into the window keymap.
    ///
    /// See [`install_keypad_bindings`] for the prefix defaults.
    pub fn install_keypad_bindings(&mut self, normal_prefix: Option<&str>, slow_prefix: Option<&str>) -> usize {
        let bound = install_keypad_bindings(&mut self.keymap, &self.catalog, normal_prefix, slow_prefix);
        info!("installed {} keypad binding(s)", bound);
        bound
    }

    /// Process a single [`Command`] against the active window.
    ///
    /// If no window is focused the command is a no-op.
    pub fn handle(&self, cmd: Command) -> Result<(), MoverError> {
        let name = match cmd {
            Command::Key(chord) => self
                .keymap
                .lookup(&chord)
                .ok_or_else(|| MoverError::Unbound(chord.clone()))?
                .to_string(),
            Command::Invoke(name) => name,
        };

        let active = self
            .wm
            .active_window()
            .map_err(|e| MoverError::WindowManager(e.to_string()))?;
        match active {
            Some(window) => self.invoke(&name, &window),
            None => {
                debug!("no active window, ignoring {}", name);
                Ok(())
            }
        }
    }

    /// Invoke the catalog command called `name` on `window`.
    pub fn invoke(&self, name: &str, window: &WindowHandle) -> Result<(), MoverError> {
        let descriptor = self
            .catalog
            .get(name)
            .ok_or_else(|| MoverError::UnknownCommand(name.to_string()))?;
        info!("{} on {}", descriptor.name, window);
        match descriptor.action {
            Action::Move { direction, speed } => self.nudge(window, direction, speed),
            Action::Center => self.center(window),
        }
    }

    /// Move `window` one step in `direction` at `speed`.
    ///
    /// Slow moves use [`StepConfig::SLOW`]; the configured steps are never
    /// modified.
    pub fn nudge(&self, window: &WindowHandle, direction: Direction, speed: SpeedMode) -> Result<(), MoverError> {
        self.move_window(window, direction, self.steps.for_speed(speed))
    }

    /// Move `window` by `steps` scaled by the multipliers of `direction`.
    pub fn move_window(&self, window: &WindowHandle, direction: Direction, steps: StepConfig) -> Result<(), MoverError> {
        let (h, v) = direction.multipliers();
        let args = MoveArgs {
            window: window.clone(),
            h,
            v,
        };

        self.hooks
            .before_move
            .dispatch(&args)
            .map_err(|source| MoverError::Hook {
                event: self.hooks.before_move.name(),
                source,
            })?;

        let (x, y) = self
            .wm
            .window_position(window)
            .map_err(|e| MoverError::WindowManager(e.to_string()))?;
        let new_x = x.saturating_add(h.saturating_mul(steps.horizontal_step));
        let new_y = y.saturating_add(v.saturating_mul(steps.vertical_step));
        debug!("move {} from ({}, {}) to ({}, {})", window, x, y, new_x, new_y);
        self.wm
            .move_window_to(window, new_x, new_y)
            .map_err(|e| MoverError::WindowManager(e.to_string()))?;

        self.hooks
            .after_move
            .dispatch(&args)
            .map_err(|source| MoverError::Hook {
                event: self.hooks.after_move.name(),
                source,
            })
    }

    /// Move `window` to the center of its display.
    pub fn center(&self, window: &WindowHandle) -> Result<(), MoverError> {
        let args = CenterArgs {
            window: window.clone(),
        };

        self.hooks
            .before_center
            .dispatch(&args)
            .map_err(|source| MoverError::Hook {
                event: self.hooks.before_center.name(),
                source,
            })?;

        if !self.wm.supports_placement(CENTERED) {
            return Err(MoverError::PlacementStrategyMissing(CENTERED.to_string()));
        }
        self.wm
            .apply_placement(CENTERED, window)
            .map_err(|e| MoverError::WindowManager(e.to_string()))?;

        self.hooks
            .after_center
            .dispatch(&args)
            .map_err(|source| MoverError::Hook {
                event: self.hooks.after_center.name(),
                source,
            })
    }
}

//  Tests
