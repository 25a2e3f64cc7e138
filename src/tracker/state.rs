use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::utils::time::hours_between;

use super::action::Action;

/// Balance gained for every hour of work.
pub const WORK_RATE: f64 = 1.;
/// Balance lost for every hour of research. Research accrues debt four times faster than work
/// pays it off.
pub const RESEARCH_RATE: f64 = -4.;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    #[default]
    Idle,
    Work,
    Research,
}

impl Mode {
    /// Balance units accrued per hour spent in this mode.
    pub fn rate(self) -> f64 {
        match self {
            Mode::Idle => 0.,
            Mode::Work => WORK_RATE,
            Mode::Research => RESEARCH_RATE,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Idle => write!(f, "IDLE"),
            Mode::Work => write!(f, "WORK"),
            Mode::Research => write!(f, "RESEARCH"),
        }
    }
}

/// The record stored on disk. `balance` only ever holds settled intervals, the interval that
/// started at `start_time` is added on the fly by [TrackerState::balance_at].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TrackerState {
    pub balance: f64,
    pub mode: Mode,
    /// Seconds since the Unix epoch. Meaningless while idle.
    pub start_time: f64,
}

impl TrackerState {
    /// Balance including the open interval, as it would be if it were settled at `now`.
    pub fn balance_at(&self, now: f64) -> f64 {
        self.balance + hours_between(self.start_time, now) * self.mode.rate()
    }

    /// Moves the open interval into `balance`. The interval is restarted at `now`, so settling
    /// twice never counts the same time twice.
    pub fn settle(&mut self, now: f64) {
        self.balance = self.balance_at(now);
        self.start_time = now;
    }

    /// Switches mode according to `action`. Expects the state to be settled at `now`.
    pub fn apply(&mut self, action: &Action, now: f64) {
        match action {
            Action::Research => {
                self.mode = Mode::Research;
                self.start_time = now;
            }
            Action::Work => {
                self.mode = Mode::Work;
                self.start_time = now;
            }
            Action::Stop => self.mode = Mode::Idle,
            Action::Reset => {
                self.balance = 0.;
                self.mode = Mode::Idle;
            }
            Action::Unrecognized(_) => {}
        }
    }
}
