use colored::*;
use menagerie_common::narrator::Narrator;
use tracing::info;

use crate::terminal::colors;

#[macro_export]
macro_rules! mprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn initialize(no_color: bool) {
    if no_color {
        colored::control::set_override(false);
    }
}

pub fn print(msg: &str) {
    info!(target: "menagerie::print", raw_msg = msg);
}

pub fn header(title: &str) {
    let line: ColoredString = format!("=== {title} ===").color(colors::HEADER).bold();
    print(&format!("{line}"));
}

/// Narrator that writes straight to the terminal.
pub struct TerminalNarrator;

impl Narrator for TerminalNarrator {
    fn say(&mut self, line: &str) {
        print(line);
    }

    fn header(&mut self, title: &str) {
        header(title);
    }

    fn blank(&mut self) {
        mprint!();
    }
}
