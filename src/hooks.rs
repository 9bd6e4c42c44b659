//! Ordered callback lists invoked around moves and centering.
//!
//! A [`Hook`] is an append-only list of callbacks sharing one argument type.
//! [`HookRegistry`] owns the four lists the mover dispatches:
//!
//! | event           | argument       |
//! |-----------------|----------------|
//! | `before-move`   | [`MoveArgs`]   |
//! | `after-move`    | [`MoveArgs`]   |
//! | `before-center` | [`CenterArgs`] |
//! | `after-center`  | [`CenterArgs`] |
//!
//! Dispatch is synchronous and runs callbacks in registration order.  There
//! is no failure isolation: the first callback returning an error stops the
//! chain, and the error is returned to the caller.

use crate::command::WindowHandle;
use log::debug;

/// Arguments passed to move hooks.
///
/// `h` and `v` are the direction multipliers of the requested move, not the
/// resulting position.  A hook that needs the new position must ask the
/// window manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveArgs {
    pub window: WindowHandle,
    pub h: i32,
    pub v: i32,
}

/// Arguments passed to center hooks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CenterArgs {
    pub window: WindowHandle,
}

/// Error returned by a hook callback.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct HookError(String);

impl HookError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Result type returned by hook callbacks.
pub type HookResult = Result<(), HookError>;

type Callback<A> = Box<dyn Fn(&A) -> HookResult>;

/// A named, ordered list of callbacks.
pub struct Hook<A> {
    name: &'static str,
    callbacks: Vec<Callback<A>>,
}

impl<A> Hook<A> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            callbacks: Vec::new(),
        }
    }

    /// Event name, e.g. `"before-move"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Append `callback`.  Callbacks are never reordered or deduplicated.
    pub fn register<F>(&mut self, callback: F)
    where
        F: Fn(&A) -> HookResult + 'static,
    {
        self.callbacks.push(Box::new(callback));
    }

    /// Call every callback in registration order with the same `args`.
    ///
    /// Stops at the first failure and returns it.
    pub fn dispatch(&self, args: &A) -> HookResult {
        if !self.callbacks.is_empty() {
            debug!("dispatching {} to {} callback(s)", self.name, self.callbacks.len());
        }
        for callback in &self.callbacks {
            callback(args)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl<A> std::fmt::Debug for Hook<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hook")
            .field("name", &self.name)
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

/// The four hook lists around moves and centering.
#[derive(Debug)]
pub struct HookRegistry {
    pub before_move: Hook<MoveArgs>,
    pub after_move: Hook<MoveArgs>,
    pub before_center: Hook<CenterArgs>,
    pub after_center: Hook<CenterArgs>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self {
            before_move: Hook::new("before-move"),
            after_move: Hook::new("after-move"),
            before_center: Hook::new("before-center"),
            after_center: Hook::new("after-center"),
        }
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn args() -> MoveArgs {
        MoveArgs {
            window: WindowHandle::new("0xbeef"),
            h: 1,
            v: -1,
        }
    }

    #[test]
    fn callbacks_run_in_registration_order_with_same_args() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut hook: Hook<MoveArgs> = Hook::new("before-move");
        for label in ["A", "B", "C"] {
            let seen = Rc::clone(&seen);
            hook.register(move |a: &MoveArgs| {
                seen.borrow_mut().push((label, a.clone()));
                Ok(())
            });
        }

        hook.dispatch(&args()).unwrap();

        let seen = seen.borrow();
        let labels: Vec<&str> = seen.iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["A", "B", "C"]);
        assert!(seen.iter().all(|(_, a)| *a == args()));
    }

    #[test]
    fn failure_stops_the_chain() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let mut hook: Hook<MoveArgs> = Hook::new("after-move");
        {
            let calls = Rc::clone(&calls);
            hook.register(move |_: &MoveArgs| {
                calls.borrow_mut().push("first");
                Ok(())
            });
        }
        hook.register(|_: &MoveArgs| Err(HookError::new("boom")));
        {
            let calls = Rc::clone(&calls);
            hook.register(move |_: &MoveArgs| {
                calls.borrow_mut().push("third");
                Ok(())
            });
        }

        let err = hook.dispatch(&args()).unwrap_err();
        assert_eq!(err, HookError::new("boom"));
        assert_eq!(*calls.borrow(), vec!["first"]);
    }

    #[test]
    fn same_callback_may_be_registered_twice() {
        let count = Rc::new(RefCell::new(0));
        let mut hook: Hook<CenterArgs> = Hook::new("after-center");
        for _ in 0..2 {
            let count = Rc::clone(&count);
            hook.register(move |_: &CenterArgs| {
                *count.borrow_mut() += 1;
                Ok(())
            });
        }
        hook.dispatch(&CenterArgs {
            window: WindowHandle::new("0x1"),
        })
        .unwrap();
        assert_eq!(*count.borrow(), 2);
        assert_eq!(hook.len(), 2);
    }

    #[test]
    fn empty_hook_dispatch_is_ok() {
        let hook: Hook<MoveArgs> = Hook::new("before-move");
        assert!(hook.is_empty());
        hook.dispatch(&args()).unwrap();
    }

    #[test]
    fn registry_lists_are_named() {
        let reg = HookRegistry::new();
        assert_eq!(reg.before_move.name(), "before-move");
        assert_eq!(reg.after_move.name(), "after-move");
        assert_eq!(reg.before_center.name(), "before-center");
        assert_eq!(reg.after_center.name(), "after-center");
    }
}
