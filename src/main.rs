//! Entry point for the **hyprnudge** daemon.
//!
//! Spawns the Unix-socket [`CommandSource`](hyprnudge::traits::CommandSource)
//! on a background thread and runs every incoming command on the main
//! thread, one at a time.
//!
//! `hyprnudge --print-binds` prints the `hyprland.conf` lines that forward
//! the keypad chords to the daemon, then exits.

use hyprnudge::command::Command;
use hyprnudge::config::Config;
use hyprnudge::hooks::{CenterArgs, MoveArgs};
use hyprnudge::hyprland::binds::bind_lines;
use hyprnudge::hyprland::wm::HyprlandWm;
use hyprnudge::ipc::listener::UnixSocketListener;
use hyprnudge::mover::{Mover, MoverError};
use hyprnudge::traits::{CommandSource, WindowManager};
use log::{debug, error, info};
use std::sync::mpsc;

/// Default socket path for the command listener.
fn default_socket_path() -> String {
    let runtime = std::env::var("XDG_RUNTIME_DIR").unwrap_or_else(|_| "/tmp".into());
    format!("{}/hyprnudge.sock", runtime)
}

/// Resolve the config directory (`$XDG_CONFIG_HOME/hyprnudge`).
fn config_dir() -> std::path::PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME").unwrap_or_else(|_| {
        let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
        format!("{}/.config", home)
    });
    std::path::PathBuf::from(base).join("hyprnudge")
}

/// Load the config from `$XDG_CONFIG_HOME/hyprnudge/config.json`.
///
/// A missing file means compiled-in defaults.  A file that exists but cannot
/// be used is fatal rather than silently replaced.
fn load_config() -> Config {
    let path = config_dir().join("config.json");
    match Config::load_or_default(&path) {
        Ok(cfg) => {
            info!("using config from {}", path.display());
            cfg
        }
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Build a mover with the configured steps, bindings and logging hooks.
fn build_mover<W: WindowManager>(wm: W, config: &Config) -> Result<Mover<W>, MoverError> {
    let mut mover = Mover::new(wm, config.steps)?;
    if config.bindings.install {
        mover.install_keypad_bindings(
            Some(config.bindings.normal_prefix.as_str()),
            Some(config.bindings.slow_prefix.as_str()),
        );
    }

    let hooks = mover.hooks_mut();
    hooks.after_move.register(|a: &MoveArgs| {
        debug!("moved {} by ({}, {})", a.window, a.h, a.v);
        Ok(())
    });
    hooks.after_center.register(|a: &CenterArgs| {
        debug!("centered {}", a.window);
        Ok(())
    });
    Ok(mover)
}

//  Main

fn main() {
    env_logger::init();

    let config = load_config();
    let mover = match build_mover(HyprlandWm::new(), &config) {
        Ok(m) => m,
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    };

    if std::env::args().any(|a| a == "--print-binds") {
        print_binds(&mover);
        return;
    }

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_command_sources(cmd_tx);

    info!("hyprnudge running");
    for cmd in cmd_rx {
        if let Err(e) = mover.handle(cmd) {
            error!("command error: {}", e);
        }
    }
    info!("all command sources closed, exiting");
}

fn print_binds<W: WindowManager>(mover: &Mover<W>) {
    match bind_lines(mover.keymap(), &default_socket_path()) {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
        }
        Err(e) => {
            error!("cannot render binds: {}", e);
            std::process::exit(1);
        }
    }
}

fn spawn_command_sources(tx: mpsc::Sender<Command>) {
    let path = default_socket_path();
    std::thread::spawn(move || {
        let mut source = UnixSocketListener::new(&path);
        if let Err(e) = source.run(tx) {
            error!("socket listener error: {}", e);
        }
    });
}
