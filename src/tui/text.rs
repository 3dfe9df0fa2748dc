use passcraft::pass::{CHAR_LENGTH_MAX, CHAR_LENGTH_MIN, CharClass, StrengthLevel};

use super::form::{Field, Form};
use crate::terminal::{
    BOLD, DIM, GREEN, ORANGE, RESET, REVERSE, box_bottom, box_line, box_line_center,
    box_line_split, box_opt, box_rule, box_top, strength_color,
};

const PLACEHOLDER: &str = "P4$5W0rD!";

fn class_label(class: CharClass) -> &'static str {
    match class {
        CharClass::Uppercase => "Include Uppercase Letters",
        CharClass::Lowercase => "Include Lowercase Letters",
        CharClass::Number => "Include Numbers",
        CharClass::Symbol => "Include Symbols",
    }
}

fn cursor(form: &Form, field: Field) -> &'static str {
    if form.focus == field { "›" } else { " " }
}

/// `██████░░░░░░░░` proportional to the length between its bounds.
fn slider(len: usize, width: usize) -> String {
    let span = CHAR_LENGTH_MAX - CHAR_LENGTH_MIN;
    let filled = (len.saturating_sub(CHAR_LENGTH_MIN) * width).div_ceil(span.max(1));
    let filled = filled.min(width);
    format!(
        "{GREEN}{}{RESET}{}",
        "█".repeat(filled),
        "░".repeat(width - filled)
    )
}

/// Label plus one bar per level; nothing filled before the first password.
pub fn strength_meter(strength: Option<StrengthLevel>) -> String {
    let Some(level) = strength else {
        return "▯ ▯ ▯ ▯".to_string();
    };
    let color = strength_color(level);
    let bars: Vec<&str> = StrengthLevel::ALL
        .iter()
        .map(|l| if *l <= level { "▮" } else { "▯" })
        .collect();
    format!(
        "{BOLD}{}{RESET}  {color}{}{RESET}",
        level.label().to_uppercase(),
        bars.join(" ")
    )
}

/// Lines of the whole form.
pub fn render(form: &Form) -> Vec<String> {
    let mut lines = vec![box_top("Password Generator")];

    let password = match &form.password {
        Some(p) => format!("{BOLD}{}{RESET}", p.as_str()),
        None => format!("{DIM}{PLACEHOLDER}{RESET}"),
    };
    let copy_hint = if form.copied {
        format!("{GREEN}COPIED{RESET}")
    } else {
        format!("{DIM}[c] copy{RESET}")
    };
    lines.push(box_line_split(&password, &copy_hint));
    lines.push(box_rule());

    lines.push(box_line_split(
        &format!("{} Character Length", cursor(form, Field::Length)),
        &format!("{GREEN}{}{RESET}", form.options.char_length),
    ));
    lines.push(box_line(&format!("  {}", slider(form.options.char_length, 40))));
    lines.push(box_line(""));

    for class in CharClass::ALL {
        let field = Field::Class(class);
        let mark = if form.options.includes(class) {
            format!("{GREEN}[x]{RESET}")
        } else {
            "[ ]".to_string()
        };
        lines.push(box_line(&format!(
            "{} {} {}",
            cursor(form, field),
            mark,
            class_label(class)
        )));
    }
    lines.push(box_line(""));

    lines.push(box_line_split("  STRENGTH", &strength_meter(form.strength)));
    match &form.error {
        Some(e) => lines.push(box_line(&format!("  {ORANGE}{e}{RESET}"))),
        None => lines.push(box_line("")),
    }

    let button = if form.focus == Field::Generate {
        format!("{REVERSE} GENERATE → {RESET}")
    } else {
        "[ GENERATE → ]".to_string()
    };
    lines.push(box_line_center(&button));
    lines.push(box_rule());
    lines.push(box_line_center(&format!(
        "{DIM}↑↓ move  ←→ length  space toggle  g generate  q quit{RESET}"
    )));
    lines.push(box_bottom());
    lines
}

pub fn help_lines() -> Vec<String> {
    let mut lines = vec![
        box_top("Passcraft"),
        box_line_center("Password generator form"),
        box_line(""),
        box_line("MODES:"),
        box_line("  1) Form: run without arguments. Pick a length and"),
        box_line("     character classes, generate, copy."),
        box_line("  2) Client: pass flags (e.g. -l 16 --all) to print"),
        box_line("     passwords without the form."),
        box_line(""),
        box_line("USAGE:"),
        box_line("  passcraft [OPTIONS]"),
        box_line(""),
        box_line("OPTIONS:"),
        box_line(" Password:"),
    ];
    let opts: [(&str, &str); 13] = [
        ("  -l, --length <N>", "Characters per password (1-20, default: 10)"),
        ("      --upper", "Include uppercase letters"),
        ("      --lower", "Include lowercase letters"),
        ("      --numbers", "Include numbers"),
        ("      --symbols", "Include symbols ! # $ & * + > < ? @ ^ ~"),
        ("  -a, --all", "Include all four classes"),
        ("  -n, --number <N>", "How many passwords to generate"),
        ("  -b, --board", "Copy to clipboard instead of printing"),
        ("  -q, --quiet", "Print passwords only"),
        ("  -s, --saved", "Start from the saved defaults"),
        ("      --save", "Save the resulting options as defaults"),
        ("  -u, --urandom", "Draw from the OS entropy source"),
        ("  -h, --help / -v", "Help / version"),
    ];
    for (flag, desc) in opts {
        lines.extend(box_opt(flag, desc));
    }
    lines.extend([
        box_line(""),
        box_line("EXAMPLES:"),
        box_line("  passcraft                   Open the form"),
        box_line("  passcraft -l 16 --all       16 chars, every class"),
        box_line("  passcraft -l 8 --lower --numbers -n 3"),
        box_line("  passcraft -s -b            Saved defaults to clipboard"),
        box_line(""),
        box_bottom(),
    ]);
    lines
}

pub fn print_help() {
    for line in help_lines() {
        println!("{line}");
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    use passcraft::pass::Options;

    use crate::terminal::{BOX_WIDTH, console_width};

    #[test]
    fn slider_ends() {
        assert_eq!(console_width(&slider(CHAR_LENGTH_MIN, 40)), 40);
        assert!(!slider(CHAR_LENGTH_MIN, 40).contains('█'));
        assert!(!slider(CHAR_LENGTH_MAX, 40).contains('░'));
    }

    #[test]
    fn meter_empty_until_rated() {
        assert!(!strength_meter(None).contains('▮'));
        let medium = strength_meter(Some(StrengthLevel::Medium));
        assert!(medium.contains("MEDIUM"));
        assert_eq!(medium.matches('▮').count(), 3);
        assert_eq!(medium.matches('▯').count(), 1);
    }

    #[test]
    fn form_lines_fit_the_box() {
        let mut form = Form::new(Options::default());
        form.error = Some("No character types selected".into());
        for line in render(&form) {
            assert_eq!(console_width(&line), BOX_WIDTH, "{line:?}");
        }
        assert!(render(&form).iter().any(|l| l.contains(PLACEHOLDER)));
    }

    #[test]
    fn help_fits_the_box() {
        for line in help_lines() {
            assert_eq!(console_width(&line), BOX_WIDTH, "{line:?}");
        }
    }
}
