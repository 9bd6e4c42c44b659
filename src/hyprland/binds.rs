//! Render keymap entries as `hyprland.conf` bind lines.
//!
//! Hyprland owns the keyboard, so the chords in the window keymap have to
//! be registered there too.  Each line forwards the chord to the daemon's
//! socket as a [`Command::Key`](crate::command::Command::Key) message:
//!
//! ```text
//! bind = CTRL ALT, KP_9, exec, echo '{"Key":"C-A-KP_9"}' | socat - UNIX-CONNECT:/run/user/1000/hyprnudge.sock
//! ```

use crate::command::Command;
use crate::keys::KeyTable;

/// Error from translating a chord.
#[derive(Debug, thiserror::Error)]
pub enum BindError {
    #[error("unknown modifier {0:?} in {1:?}")]
    UnknownModifier(String, String),
    #[error("chord {0:?} has no key")]
    MissingKey(String),
}

/// Translate one modifier token of a chord prefix.
fn modifier(token: &str) -> Option<&'static str> {
    match token {
        "C" => Some("CTRL"),
        "A" | "M" => Some("ALT"),
        "S" => Some("SHIFT"),
        "W" | "H" => Some("SUPER"),
        _ => None,
    }
}

/// Split a chord like `"C-A-KP_9"` into Hyprland modifiers and key:
/// `("CTRL ALT", "KP_9")`.
pub fn split_chord(chord: &str) -> Result<(String, String), BindError> {
    let mut parts: Vec<&str> = chord.split('-').collect();
    let key = match parts.pop() {
        Some(k) if !k.is_empty() => k,
        _ => return Err(BindError::MissingKey(chord.to_string())),
    };
    let mods = parts
        .iter()
        .map(|t| modifier(t).ok_or_else(|| BindError::UnknownModifier(t.to_string(), chord.to_string())))
        .collect::<Result<Vec<_>, _>>()?;
    Ok((mods.join(" "), key.to_string()))
}

/// Build the `bind = …` line for `chord`, forwarding to `socket`.
pub fn bind_line(chord: &str, socket: &str) -> Result<String, BindError> {
    let (mods, key) = split_chord(chord)?;
    let message = serde_json::to_string(&Command::Key(chord.to_string()))
        .unwrap_or_else(|_| format!(r#"{{"Key":"{}"}}"#, chord));
    Ok(format!(
        "bind = {}, {}, exec, echo '{}' | socat - UNIX-CONNECT:{}",
        mods, key, message, socket
    ))
}

/// Bind lines for every chord in `keymap`, sorted by chord.
pub fn bind_lines(keymap: &KeyTable, socket: &str) -> Result<Vec<String>, BindError> {
    keymap.iter().map(|(chord, _)| bind_line(chord, socket)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::keys::install_keypad_bindings;

    #[test]
    fn split_default_prefixes() {
        assert_eq!(split_chord("A-KP_6").unwrap(), ("ALT".into(), "KP_6".into()));
        assert_eq!(
            split_chord("C-A-KP_9").unwrap(),
            ("CTRL ALT".into(), "KP_9".into())
        );
        assert_eq!(
            split_chord("W-S-KP_1").unwrap(),
            ("SUPER SHIFT".into(), "KP_1".into())
        );
    }

    #[test]
    fn unknown_modifier_is_rejected() {
        assert!(matches!(
            split_chord("Q-KP_1"),
            Err(BindError::UnknownModifier(ref m, _)) if m == "Q"
        ));
        assert!(matches!(split_chord("A-"), Err(BindError::MissingKey(_))));
    }

    #[test]
    fn bind_line_forwards_chord_as_key_command() {
        let line = bind_line("C-A-KP_9", "/run/user/1000/hyprnudge.sock").unwrap();
        assert_eq!(
            line,
            r#"bind = CTRL ALT, KP_9, exec, echo '{"Key":"C-A-KP_9"}' | socat - UNIX-CONNECT:/run/user/1000/hyprnudge.sock"#
        );
    }

    #[test]
    fn one_line_per_default_binding() {
        let mut keys = KeyTable::new();
        install_keypad_bindings(&mut keys, &Catalog::generate(), None, None);
        let lines = bind_lines(&keys, "/tmp/hyprnudge.sock").unwrap();
        assert_eq!(lines.len(), 17);
        assert!(lines.iter().any(|l| l.starts_with("bind = ALT, KP_5, exec")));
        assert!(!lines.iter().any(|l| l.starts_with("bind = CTRL ALT, KP_5,")));
    }
}
