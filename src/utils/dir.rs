use std::{env, io, path::PathBuf};

use anyhow::{anyhow, Result};

const APPLICATION_DIR: &str = "time-hedge";

cfg_if::cfg_if! {
    if #[cfg(windows)] {
        /// Home directory of the current user. The state file lives directly inside it.
        pub fn home_dir() -> Result<PathBuf> {
            env::var("USERPROFILE")
                .or_else(|_| env::var("HOME"))
                .map(PathBuf::from)
                .map_err(|_| anyhow!("Couldn't find neither USERPROFILE nor HOME"))
        }

        fn state_home() -> Result<PathBuf> {
            env::var("APPDATA")
                .map(PathBuf::from)
                .map_err(|_| anyhow!("APPDATA should be present on Windows"))
        }
    } else {
        /// Home directory of the current user. The state file lives directly inside it.
        pub fn home_dir() -> Result<PathBuf> {
            env::var("HOME")
                .map(PathBuf::from)
                .map_err(|_| anyhow!("Couldn't find HOME"))
        }

        fn state_home() -> Result<PathBuf> {
            match env::var("XDG_STATE_HOME") {
                Ok(state_home) => Ok(PathBuf::from(state_home)),
                Err(_) => Ok(home_dir()?.join(".local/state")),
            }
        }
    }
}

/// Directory for application data that isn't the state record itself, like logs. By default
/// it's $XDG_STATE_HOME/time-hedge or $HOME/.local/state/time-hedge.
pub fn create_application_default_path() -> Result<PathBuf> {
    let path = state_home()?.join(APPLICATION_DIR);

    match std::fs::create_dir_all(&path) {
        Ok(_) => Ok(path),
        Err(v) if v.kind() == io::ErrorKind::AlreadyExists => Ok(path),
        Err(v) => Err(v.into()),
    }
}
