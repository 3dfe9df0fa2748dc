//! Terminal output utilities.
//!
//! Box drawing, ANSI helpers. Box helpers return lines so the same code
//! renders in cooked mode and in raw mode.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

use passcraft::pass::StrengthLevel;

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const ORANGE: &str = "\x1b[38;5;208m";
pub const YELLOW: &str = "\x1b[38;5;11m";
pub const GREEN: &str = "\x1b[38;5;10m";

/// Meter colour for a strength level.
pub fn strength_color(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::TooWeak => RED,
        StrengthLevel::Weak => ORANGE,
        StrengthLevel::Medium => YELLOW,
        StrengthLevel::Strong => GREEN,
    }
}

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m\x1b[?25h");
    flush();
}

/// Write lines with explicit `\r\n` endings; raw mode does not translate `\n`.
pub fn print_lines(lines: &[String]) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in lines {
        let _ = out.write_all(line.as_bytes());
        let _ = out.write_all(b"\r\n");
    }
    let _ = out.flush();
}

// ============================================================================
// Styled Output Helpers
// ============================================================================

/// Print error message in red.
pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 60;

/// ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// │ content                                        │
pub fn box_line(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │ left                                     right │
pub fn box_line_split(left: &str, right: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let used = console_width(left) + console_width(right);
    let gap = inner_width.saturating_sub(used).max(1);
    format!("│ {}{}{} │", left, " ".repeat(gap), right)
}

/// │          content          │
pub fn box_line_center(content: &str) -> String {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// ├───────────────────────────────────────┤
pub fn box_rule() -> String {
    format!("├{}┤", "─".repeat(BOX_WIDTH - 2))
}

/// └───────────────────────────────────────┘
pub fn box_bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// A help option with flag and description, wrapping the description.
pub fn box_opt(flag: &str, desc: &str) -> Vec<String> {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 24;
    let desc_col = inner_width - flag_col;

    let flag_padded = if flag.len() < flag_col {
        format!("{}{}", flag, " ".repeat(flag_col - flag.len()))
    } else {
        flag[..flag_col].to_string()
    };

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(current_line);
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let indent = " ".repeat(flag_col);
    let mut out = Vec::with_capacity(lines.len().max(1));
    match lines.first() {
        Some(first) => out.push(box_line(&format!("{flag_padded}{first}"))),
        None => out.push(box_line(&flag_padded)),
    }
    for line in lines.iter().skip(1) {
        out.push(box_line(&format!("{indent}{line}")));
    }
    out
}

/// Display width, skipping ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_width_ignores_escapes() {
        assert_eq!(console_width("abc"), 3);
        assert_eq!(console_width(&format!("{RED}abc{RESET}")), 3);
        assert_eq!(console_width("█░"), 2);
    }

    #[test]
    fn box_lines_share_a_width() {
        let width = console_width;
        assert_eq!(width(&box_top("Password Generator")), BOX_WIDTH);
        assert_eq!(width(&box_top("")), BOX_WIDTH);
        assert_eq!(width(&box_line(&format!("{GREEN}ok{RESET}"))), BOX_WIDTH);
        assert_eq!(width(&box_line_center("mid")), BOX_WIDTH);
        assert_eq!(width(&box_line_split("left", "right")), BOX_WIDTH);
        assert_eq!(width(&box_rule()), BOX_WIDTH);
        assert_eq!(width(&box_bottom()), BOX_WIDTH);
    }

    #[test]
    fn box_opt_wraps_long_descriptions() {
        let lines = box_opt(
            "  -l, --length <N>",
            "Characters per password, between one and twenty, checked against the selected classes",
        );
        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| console_width(l) == BOX_WIDTH));
    }
}
