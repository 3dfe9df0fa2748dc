//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

use passcraft::pass::StrengthLevel;

use super::quiet;
use crate::terminal::{RESET, strength_color};

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Strength line on stderr so stdout stays pipeable.
pub fn strength(level: StrengthLevel) {
    if !quiet::enabled() {
        eprintln!("Strength: {}{}{RESET}", strength_color(level), level.label());
    }
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        if count == 1 {
            println!("*** -COPIED TO CLIPBOARD- ***");
        } else {
            println!("*** -{count} PASSWORDS COPIED TO CLIPBOARD- ***");
        }
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print instead when the clipboard is unavailable.
/// Non-interactive or quiet runs fall back without asking.
pub fn clipboard_fallback_prompt() -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn settings_saved() {
    if !quiet::enabled() {
        eprintln!("Saved as defaults.");
    }
}
