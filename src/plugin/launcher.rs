use std::{env, path::PathBuf};

use anyhow::Result;

use crate::tracker::action::Action;

/// Describes how the menu bar host should invoke time-hedge to apply an action. For the compiled
/// binary this is just the executable, a script would pass the interpreter as `program` and the
/// script path as a leading argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    program: PathBuf,
    leading_args: Vec<String>,
}

impl Launcher {
    pub fn new(program: PathBuf, leading_args: Vec<String>) -> Self {
        Self {
            program,
            leading_args,
        }
    }

    /// Launcher pointing at the executable of the current process.
    pub fn current() -> Result<Self> {
        Ok(Self::new(env::current_exe()?, vec![]))
    }

    /// Command part of a menu entry: `bash='<program>' param1='<arg>' ...`, ending with the
    /// action.
    pub fn command_for(&self, action: &Action) -> String {
        let mut command = format!("bash='{}'", self.program.to_string_lossy());
        let params = self
            .leading_args
            .iter()
            .map(String::as_str)
            .chain([action.as_str()]);
        for (index, param) in params.enumerate() {
            command.push_str(&format!(" param{}='{param}'", index + 1));
        }
        command
    }
}
