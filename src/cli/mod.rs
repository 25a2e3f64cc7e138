use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::Result;
use clap::Parser;
use tracing::{debug, level_filters::LevelFilter};

use crate::{
    plugin::{launcher::Launcher, render_menu},
    storage::{file_store::FileStateStore, StateStore},
    tracker::{action::Action, BalanceTracker},
    utils::{
        clock::{Clock, DefaultClock},
        dir::create_application_default_path,
        logging::enable_logging,
    },
};

#[derive(Parser, Debug)]
#[command(name = "time-hedge", version)]
#[command(
    about = "Menu bar plugin balancing research time against work time",
    long_about = "Without arguments prints the menu in xbar/SwiftBar format. With an action \
                  settles the running interval, switches mode and exits."
)]
struct Args {
    #[arg(
        allow_hyphen_values = true,
        allow_negative_numbers = true,
        help = "One of research, work, stop, reset. Anything else only settles the balance"
    )]
    action: Option<String>,
    #[arg(
        long = "launcher",
        help = "Program the menu entries invoke, for example an interpreter. Defaults to this executable"
    )]
    launcher: Option<PathBuf>,
    #[arg(
        long = "launcher-arg",
        requires = "launcher",
        help = "Argument passed to the launcher before the action, for example a script path. Can be repeated"
    )]
    launcher_args: Vec<String>,
    #[arg(
        long = "log-filter",
        help = "Log level. Falls back to RUST_LOG and then to info"
    )]
    log: Option<LevelFilter>,
    /// This option is for debugging purposes only.
    #[arg(long = "log-console", help = "Mirror logs to stderr")]
    log_console: bool,
}

pub fn run_cli() -> Result<()> {
    let args = Args::parse();

    // The widget should keep rendering even if logs can't be written.
    if let Err(e) = create_application_default_path()
        .and_then(|dir| enable_logging(&dir, args.log, args.log_console))
    {
        eprintln!("Logging disabled: {e:?}");
    }

    let Args {
        action,
        launcher,
        launcher_args,
        ..
    } = args;
    let tracker = BalanceTracker::new(FileStateStore::at_default_location()?, DefaultClock);
    execute(
        action,
        &tracker,
        || resolve_launcher(launcher, launcher_args),
        &mut io::stdout().lock(),
    )
}

/// A wrapper script passes its interpreter and own path so that menu clicks go through it.
fn resolve_launcher(program: Option<PathBuf>, leading_args: Vec<String>) -> Result<Launcher> {
    match program {
        Some(program) => Ok(Launcher::new(program, leading_args)),
        None => Launcher::current(),
    }
}

/// Applies `action` if there is one, otherwise prints the menu into `out`. The launcher is only
/// resolved when rendering.
fn execute(
    action: Option<String>,
    tracker: &BalanceTracker<impl StateStore, impl Clock>,
    launcher: impl FnOnce() -> Result<Launcher>,
    out: &mut impl Write,
) -> Result<()> {
    match action {
        Some(action) => {
            tracker.handle_action(&Action::from(action.as_str()))?;
        }
        None => {
            let snapshot = tracker.snapshot()?;
            debug!("Rendering {snapshot:?}");
            for line in render_menu(&snapshot, &launcher()?) {
                writeln!(out, "{line}")?;
            }
        }
    }
    Ok(())
}
