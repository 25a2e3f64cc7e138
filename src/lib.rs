//! Menu bar widget that keeps a balance of hours: work pays it off, research runs it into debt
//! four times as fast. Clicks on the menu re-invoke the binary with an action, periodic refreshes
//! invoke it without arguments to print the current balance.

pub mod cli;
pub mod plugin;
pub mod storage;
pub mod tracker;
pub mod utils;
