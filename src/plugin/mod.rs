//! Output in the text format read by xbar and SwiftBar. The first line is the menu bar title,
//! everything after the first `---` goes into the dropdown. Every line may carry parameters after
//! a `|`.

pub mod format;
pub mod launcher;

use format::{format_balance, Appearance};
use launcher::Launcher;

use crate::tracker::{action::Action, BalanceSnapshot};

pub const SEPARATOR: &str = "---";

const MODE_ACTIONS: [(&str, &str, Action); 3] = [
    ("🧪", "Start research", Action::Research),
    ("🔨", "Start work", Action::Work),
    ("⏸", "Stop", Action::Stop),
];

/// Renders the whole plugin output, one entry per line.
pub fn render_menu(snapshot: &BalanceSnapshot, launcher: &Launcher) -> Vec<String> {
    let appearance = Appearance::new(snapshot.mode, snapshot.balance);
    let formatted = format_balance(snapshot.balance);

    let mut lines = vec![
        format!("{} {formatted} | color={}", appearance.icon, appearance.color),
        SEPARATOR.to_string(),
        format!("Mode: {}", appearance.label),
        format!(
            "Balance: {formatted} ({:.4}h) | font=Menlo",
            snapshot.balance
        ),
        SEPARATOR.to_string(),
    ];
    for (icon, label, action) in &MODE_ACTIONS {
        lines.push(menu_entry(icon, label, action, launcher));
    }
    lines.push(SEPARATOR.to_string());
    lines.push(menu_entry("♻️", "Reset balance", &Action::Reset, launcher));
    lines
}

fn menu_entry(icon: &str, label: &str, action: &Action, launcher: &Launcher) -> String {
    format!(
        "{icon} {label} | {} terminal=false refresh=true",
        launcher.command_for(action)
    )
}
