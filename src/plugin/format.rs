use std::fmt::Display;

use crate::{tracker::state::Mode, utils::time::SECONDS_PER_HOUR};

/// Formats hours as `[sign]HH:MM:SS`. The sign is `-` for debt, `+` for credit and a space for an
/// exact zero. Hours are not wrapped at 24 and grow past two digits when needed.
pub fn format_balance(hours: f64) -> String {
    let sign = if hours < 0. {
        '-'
    } else if hours > 0. {
        '+'
    } else {
        ' '
    };
    let total_seconds = (hours.abs() * SECONDS_PER_HOUR).floor() as u64;
    format!(
        "{sign}{:02}:{:02}:{:02}",
        total_seconds / 3600,
        total_seconds / 60 % 60,
        total_seconds % 60
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
}

impl Color {
    /// Only the sign matters, zero counts as green.
    pub fn for_balance(balance: f64) -> Self {
        if balance < 0. {
            Color::Red
        } else {
            Color::Green
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Red => write!(f, "red"),
            Color::Green => write!(f, "green"),
        }
    }
}

/// Icon, label and color of the menu bar title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Appearance {
    pub icon: &'static str,
    pub label: &'static str,
    pub color: Color,
}

impl Appearance {
    pub fn new(mode: Mode, balance: f64) -> Self {
        let (icon, label) = match mode {
            Mode::Idle => ("⚪️", "Idle"),
            Mode::Research => ("🧪", "Researching (4x debt)"),
            Mode::Work => ("🔨", "Working (payoff)"),
        };
        Self {
            icon,
            label,
            color: Color::for_balance(balance),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tracker::state::Mode;

    use super::{format_balance, Appearance, Color};

    #[test]
    fn format_sign() {
        assert_eq!(format_balance(0.), " 00:00:00");
        assert_eq!(format_balance(2.), "+02:00:00");
        assert_eq!(format_balance(-2.), "-02:00:00");
    }

    #[test]
    fn format_minutes_and_seconds() {
        assert_eq!(format_balance(1.5), "+01:30:00");
        assert_eq!(format_balance(-0.75), "-00:45:00");
        assert_eq!(format_balance(3.375), "+03:22:30");
    }

    #[test]
    fn format_truncates_partial_seconds() {
        assert_eq!(format_balance(0.5 / 3600.), "+00:00:00");
        assert_eq!(format_balance(-90.9 / 3600.), "-00:01:30");
    }

    #[test]
    fn format_does_not_wrap_hours() {
        assert_eq!(format_balance(36.5), "+36:30:00");
        assert_eq!(format_balance(-125.), "-125:00:00");
    }

    #[test]
    fn color_depends_on_sign_only() {
        assert_eq!(Color::for_balance(-0.001), Color::Red);
        assert_eq!(Color::for_balance(0.), Color::Green);
        assert_eq!(Color::for_balance(3.), Color::Green);
        assert_eq!(Color::Red.to_string(), "red");
    }

    #[test]
    fn appearance_by_mode() {
        let idle_debt = Appearance::new(Mode::Idle, -2.);
        assert_eq!(idle_debt.icon, "⚪️");
        assert_eq!(idle_debt.label, "Idle");
        assert_eq!(idle_debt.color, Color::Red);

        assert_eq!(Appearance::new(Mode::Idle, 2.).icon, "⚪️");

        let research = Appearance::new(Mode::Research, 1.);
        assert_eq!(research.icon, "🧪");
        assert!(research.label.contains("4x"));
        assert_eq!(research.color, Color::Green);

        let work = Appearance::new(Mode::Work, -1.);
        assert_eq!(work.icon, "🔨");
        assert_eq!(work.color, Color::Red);
        assert_ne!(work.label, research.label);
    }
}
