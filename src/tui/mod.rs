//! Interactive password generator form.

mod form;
mod text;

use copypasta::{ClipboardContext, ClipboardProvider};
use crossterm::event::{Event, KeyEventKind, read};

use passcraft::entropy;
use passcraft::pass::DiversityScorer;

use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, print_error, print_lines, reset_terminal};

use form::{Action, Form};
use text::render;

pub use text::print_help;

/// Run the form until the user leaves.
pub fn run() {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        log::warn!("failed to load settings: {e}");
        Settings::default()
    });

    let mut form = Form::new(settings.options);
    let mut clipboard: Option<ClipboardContext> = None;

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(e) => {
            reset_terminal();
            print_error(&format!("Cannot open the form on this terminal: {e}"));
            print_error("Use flags instead, see --help.");
            return;
        }
    };

    draw(&form);

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(Event::Resize(..)) => {
                draw(&form);
                continue;
            }
            Ok(_) => continue,
            Err(e) => {
                log::error!("reading terminal events: {e}");
                break;
            }
        };

        match form.handle_key(key) {
            Action::Quit => break,
            Action::Ignore => continue,
            Action::Redraw => {}
            Action::Generate => form.generate(&mut entropy::rng(), &DiversityScorer),
            Action::Copy => copy(&mut form, &mut clipboard),
        }
        draw(&form);
    }

    guard.restore();

    if form.options != settings.options {
        let updated = Settings {
            options: form.options,
            ..settings
        };
        if let Err(e) = updated.save_to_file() {
            log::warn!("failed to save settings: {e}");
        }
    }
}

fn draw(form: &Form) {
    clear();
    print_lines(&render(form));
}

fn copy(form: &mut Form, clipboard: &mut Option<ClipboardContext>) {
    let Some(password) = &form.password else {
        return;
    };

    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => {
                log::debug!("clipboard unavailable: {e}");
                form.error = Some("Clipboard unavailable".to_string());
                return;
            }
        }
    }

    if let Some(ctx) = clipboard.as_mut() {
        match ctx.set_contents(password.as_str().to_owned()) {
            Ok(()) => {
                form.copied = true;
                form.error = None;
            }
            Err(e) => form.error = Some(format!("Clipboard error: {e}")),
        }
    }
}
