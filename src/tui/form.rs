//! Form state and key handling.
//!
//! Everything here is terminal-free so it can be driven from tests; the
//! event loop in `tui::run` feeds it keys and renders it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

use passcraft::pass::{
    self, CHAR_LENGTH_MAX, CHAR_LENGTH_MIN, CharClass, Error, Options, Password, StrengthLevel,
    StrengthScorer,
};

/// Focusable rows, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Length,
    Class(CharClass),
    Generate,
}

impl Field {
    pub const ORDER: [Field; 6] = [
        Field::Length,
        Field::Class(CharClass::Uppercase),
        Field::Class(CharClass::Lowercase),
        Field::Class(CharClass::Number),
        Field::Class(CharClass::Symbol),
        Field::Generate,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Field {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Field {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Redraw,
    Generate,
    Copy,
    Quit,
    Ignore,
}

#[derive(Debug)]
pub struct Form {
    pub options: Options,
    pub focus: Field,
    pub password: Option<Password>,
    pub strength: Option<StrengthLevel>,
    pub error: Option<String>,
    pub copied: bool,
}

impl Form {
    pub fn new(options: Options) -> Self {
        let mut options = options;
        options.char_length = options.char_length.clamp(CHAR_LENGTH_MIN, CHAR_LENGTH_MAX);
        Self {
            options,
            focus: Field::Length,
            password: None,
            strength: None,
            error: None,
            copied: false,
        }
    }

    /// Apply a key press to the form state.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Action::Quit,
            KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
            KeyCode::Down | KeyCode::Tab => {
                self.focus = self.focus.next();
                Action::Redraw
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.focus = self.focus.prev();
                Action::Redraw
            }
            KeyCode::Left if self.focus == Field::Length => self.adjust_length(-1),
            KeyCode::Right if self.focus == Field::Length => self.adjust_length(1),
            KeyCode::Home if self.focus == Field::Length => self.set_length(CHAR_LENGTH_MIN),
            KeyCode::End if self.focus == Field::Length => self.set_length(CHAR_LENGTH_MAX),
            KeyCode::Char(' ') | KeyCode::Enter => match self.focus {
                Field::Class(class) => {
                    self.options.set(class, !self.options.includes(class));
                    Action::Redraw
                }
                Field::Generate => Action::Generate,
                Field::Length if key.code == KeyCode::Enter => Action::Generate,
                Field::Length => Action::Ignore,
            },
            KeyCode::Char('g') => Action::Generate,
            KeyCode::Char('c') => Action::Copy,
            _ => Action::Ignore,
        }
    }

    fn adjust_length(&mut self, delta: isize) -> Action {
        let len = self.options.char_length.saturating_add_signed(delta);
        self.set_length(len)
    }

    fn set_length(&mut self, len: usize) -> Action {
        let len = len.clamp(CHAR_LENGTH_MIN, CHAR_LENGTH_MAX);
        if len == self.options.char_length {
            return Action::Ignore;
        }
        self.options.char_length = len;
        Action::Redraw
    }

    /// Run the generator on the current options. Validation errors land on
    /// the error line and leave the previous password in place.
    pub fn generate<R, S>(&mut self, rng: &mut R, scorer: &S)
    where
        R: Rng + ?Sized,
        S: StrengthScorer + ?Sized,
    {
        match pass::generate_password_with(&self.options, rng, scorer) {
            Ok(generated) => {
                self.password = Some(generated.password);
                self.strength = Some(generated.strength);
                self.error = None;
                self.copied = false;
            }
            Err(e @ Error::Validation(_)) => self.error = Some(e.to_string()),
            Err(e @ Error::Internal(_)) => {
                self.password = None;
                self.strength = None;
                self.error = Some(e.to_string());
            }
        }
    }
}
