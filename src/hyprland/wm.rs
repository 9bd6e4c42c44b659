//! [`WindowManager`] implementation backed by Hyprland IPC.
//!
//! Communicates directly with Hyprland through its Unix socket at
//! `$XDG_RUNTIME_DIR/hypr/$HYPRLAND_INSTANCE_SIGNATURE/.socket.sock`,
//! avoiding any shell command invocation or third-party crate for socket
//! discovery.

use crate::command::WindowHandle;
use crate::traits::{WindowManager, CENTERED};
use serde::Deserialize;
use std::io::{Read, Write};
use std::os::unix::net::UnixStream;
use std::path::PathBuf;

/// Hyprland-backed window manager.
///
/// Window handles are Hyprland client addresses (`"0x…"`).
pub struct HyprlandWm;

/// Errors that can occur when talking to Hyprland.
#[derive(Debug, thiserror::Error)]
#[error("hyprland IPC error: {0}")]
pub struct HyprlandWmError(String);

impl Default for HyprlandWm {
    fn default() -> Self {
        Self
    }
}

impl HyprlandWm {
    /// Create a new handle.
    ///
    /// No connection is opened eagerly; each method call opens a short-lived
    /// IPC request.
    pub fn new() -> Self {
        Self
    }
}

//  Direct Hyprland IPC helpers

/// Resolve the Hyprland command socket path.
fn socket_path() -> Result<PathBuf, HyprlandWmError> {
    let runtime_dir = std::env::var("XDG_RUNTIME_DIR")
        .map_err(|_| HyprlandWmError("XDG_RUNTIME_DIR not set".into()))?;
    let his = std::env::var("HYPRLAND_INSTANCE_SIGNATURE")
        .map_err(|_| HyprlandWmError("HYPRLAND_INSTANCE_SIGNATURE not set".into()))?;
    Ok(PathBuf::from(format!(
        "{}/hypr/{}/.socket.sock",
        runtime_dir, his
    )))
}

/// Send a raw command to the Hyprland command socket and return the
/// response as a string.
fn ipc_request(command: &str) -> Result<String, HyprlandWmError> {
    let path = socket_path()?;
    let mut stream = UnixStream::connect(&path)
        .map_err(|e| HyprlandWmError(format!("connect to {}: {}", path.display(), e)))?;

    stream
        .write_all(command.as_bytes())
        .map_err(|e| HyprlandWmError(format!("write: {}", e)))?;

    let mut response = Vec::new();
    stream
        .read_to_end(&mut response)
        .map_err(|e| HyprlandWmError(format!("read: {}", e)))?;

    String::from_utf8(response).map_err(|e| HyprlandWmError(format!("utf-8: {}", e)))
}

/// Send a JSON data query (`j/<command>`) and return the raw JSON string.
fn ipc_json(data_command: &str) -> Result<String, HyprlandWmError> {
    ipc_request(&format!("j/{}", data_command))
}

/// Send a dispatch command and check for `"ok"`.
fn ipc_dispatch(args: &str) -> Result<(), HyprlandWmError> {
    let response = ipc_request(&format!("/dispatch {}", args))?;
    if response.trim() == "ok" {
        Ok(())
    } else {
        Err(HyprlandWmError(format!("dispatch error: {}", response)))
    }
}

//  Minimal serde structs for the JSON we care about

/// Subset of a client object returned by `j/clients`.
#[derive(Deserialize)]
struct ClientJson {
    address: String,
    at: (i32, i32),
}

/// Subset of the JSON object returned by `j/activewindow`.
#[derive(Deserialize)]
struct ActiveWindowJson {
    address: String,
}

/// Parse `j/activewindow`.  Hyprland returns `{}` when nothing is focused.
fn parse_active_window(json: &str) -> Result<Option<WindowHandle>, HyprlandWmError> {
    if json.trim() == "{}" {
        return Ok(None);
    }
    let w: ActiveWindowJson =
        serde_json::from_str(json).map_err(|e| HyprlandWmError(format!("parse: {}", e)))?;
    Ok(Some(WindowHandle::new(w.address)))
}

/// Find the position of `address` in a `j/clients` response.
fn client_position(json: &str, address: &str) -> Result<(i32, i32), HyprlandWmError> {
    let clients: Vec<ClientJson> =
        serde_json::from_str(json).map_err(|e| HyprlandWmError(format!("parse: {}", e)))?;
    clients
        .iter()
        .find(|c| c.address == address)
        .map(|c| c.at)
        .ok_or_else(|| HyprlandWmError(format!("no window with address {}", address)))
}

fn move_dispatch(window: &WindowHandle, x: i32, y: i32) -> String {
    format!("movewindowpixel exact {} {},address:{}", x, y, window)
}

//  WindowManager implementation

impl WindowManager for HyprlandWm {
    type Error = HyprlandWmError;

    fn active_window(&self) -> Result<Option<WindowHandle>, Self::Error> {
        parse_active_window(&ipc_json("activewindow")?)
    }

    fn window_position(&self, window: &WindowHandle) -> Result<(i32, i32), Self::Error> {
        client_position(&ipc_json("clients")?, window.as_str())
    }

    fn move_window_to(&self, window: &WindowHandle, x: i32, y: i32) -> Result<(), Self::Error> {
        ipc_dispatch(&move_dispatch(window, x, y))
    }

    fn supports_placement(&self, strategy: &str) -> bool {
        strategy == CENTERED
    }

    fn apply_placement(&self, strategy: &str, window: &WindowHandle) -> Result<(), Self::Error> {
        if strategy != CENTERED {
            return Err(HyprlandWmError(format!("unsupported placement: {}", strategy)));
        }
        // `centerwindow` only acts on the focused window.
        ipc_dispatch(&format!("focuswindow address:{}", window))?;
        ipc_dispatch("centerwindow")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLIENTS: &str = r#"[
        {"address": "0x1111", "at": [10, 20], "size": [800, 600], "floating": true, "title": "a"},
        {"address": "0x2222", "at": [-5, 300], "size": [640, 480], "floating": false, "title": "b"}
    ]"#;

    #[test]
    fn client_position_finds_window() {
        assert_eq!(client_position(CLIENTS, "0x2222").unwrap(), (-5, 300));
        assert_eq!(client_position(CLIENTS, "0x1111").unwrap(), (10, 20));
    }

    #[test]
    fn client_position_missing_window_is_error() {
        let err = client_position(CLIENTS, "0xdead").unwrap_err();
        assert!(err.to_string().contains("0xdead"));
    }

    #[test]
    fn empty_active_window_is_none() {
        assert_eq!(parse_active_window("{}").unwrap(), None);
        assert_eq!(parse_active_window("  {}\n").unwrap(), None);
    }

    #[test]
    fn active_window_address_is_handle() {
        let json = r#"{"address": "0xabc", "at": [0, 0], "title": "term", "monitor": 0}"#;
        assert_eq!(
            parse_active_window(json).unwrap(),
            Some(WindowHandle::new("0xabc"))
        );
    }

    #[test]
    fn move_dispatch_targets_address() {
        let w = WindowHandle::new("0xabc");
        assert_eq!(
            move_dispatch(&w, 111, -99),
            "movewindowpixel exact 111 -99,address:0xabc"
        );
    }

    #[test]
    fn only_centered_placement_supported() {
        let wm = HyprlandWm::new();
        assert!(wm.supports_placement("centered"));
        assert!(!wm.supports_placement("random"));
    }
}
