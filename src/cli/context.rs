//! CLI context - bundles settings, flags, and clipboard state.

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use passcraft::entropy;
use passcraft::pass::{self, Error, Options, ValidationError};

use super::{CliFlags, ParseError, prompts, quiet};
use crate::settings::Settings;
use crate::tui::print_help;

/// Why the CLI stopped before finishing normally.
#[derive(Debug, PartialEq, Eq)]
pub enum Stop {
    /// Early exit, not an error.
    Done,
    /// Exit with this status.
    Failed(i32),
}

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub saved_settings: Settings,
    pub clipboard: Option<ClipboardContext>,
    pub flags: CliFlags,
}

impl Context {
    pub fn new(args: &[String]) -> Result<Self, ParseError> {
        let flags = super::parse(args)?;

        let saved_settings = if flags.saved || flags.save {
            Settings::load_from_file().unwrap_or_else(|e| {
                prompts::warn(&format!("Failed to load settings: {}", e));
                Settings::default()
            })
        } else {
            Settings::default()
        };

        let settings = if flags.saved {
            saved_settings
        } else {
            Settings::default()
        };

        Ok(Self {
            settings,
            saved_settings,
            clipboard: None,
            flags,
        })
    }

    /// Run CLI. `Err(Stop::Done)` for early exits.
    pub fn run(&mut self) -> Result<(), Stop> {
        self.handle_info_flags()?;
        quiet::set(self.flags.quiet);
        self.apply_flags();
        self.handle_urandom();
        pass::validate(&self.settings.options).map_err(|e| report(&Error::from(e)))?;
        self.handle_save();
        self.open_clipboard()?;
        self.generate_output()
    }

    fn handle_info_flags(&self) -> Result<(), Stop> {
        if self.flags.help {
            print_help();
            return Err(Stop::Done);
        }
        if self.flags.version {
            println!("passcraft {}", env!("CARGO_PKG_VERSION"));
            return Err(Stop::Done);
        }
        Ok(())
    }

    fn handle_urandom(&self) {
        if self.flags.urandom {
            entropy::enable_os();
            log::debug!("entropy source: {}", entropy::source_name());
        }
    }

    /// Apply CLI flags to settings. Class flags replace the starting classes.
    fn apply_flags(&mut self) {
        let options = &mut self.settings.options;

        if let Some(len) = self.flags.length {
            options.char_length = len;
        }

        if self.flags.has_classes() {
            *options = Options {
                char_length: options.char_length,
                include_uppercase: self.flags.upper,
                include_lowercase: self.flags.lower,
                include_numbers: self.flags.numbers,
                include_symbols: self.flags.symbols,
            };
        }

        if self.flags.clipboard {
            self.settings.to_clipboard = true;
        }
    }

    fn handle_save(&mut self) {
        if !self.flags.save {
            return;
        }
        self.saved_settings = self.settings;
        match self.saved_settings.save_to_file() {
            Ok(()) => prompts::settings_saved(),
            Err(e) => prompts::warn(&format!("Failed to save settings: {}", e)),
        }
    }

    fn open_clipboard(&mut self) -> Result<(), Stop> {
        if !self.settings.to_clipboard {
            return Ok(());
        }
        match ClipboardContext::new() {
            Ok(c) => self.clipboard = Some(c),
            Err(e) => {
                log::debug!("clipboard unavailable: {e}");
                if prompts::clipboard_fallback_prompt() {
                    self.settings.to_clipboard = false;
                } else {
                    return Err(Stop::Done);
                }
            }
        }
        Ok(())
    }

    /// Generate passwords and handle output.
    pub fn generate_output(&mut self) -> Result<(), Stop> {
        let count = self.flags.number.unwrap_or(1);
        let mut copied = String::new();

        for _ in 0..count {
            let generated = match pass::generate_password(&self.settings.options) {
                Ok(g) => g,
                Err(e) => {
                    copied.zeroize();
                    return Err(report(&e));
                }
            };

            if self.clipboard.is_some() {
                copied.push_str(generated.password.as_str());
                copied.push('\n');
            } else {
                println!("{}", generated.password.as_str());
            }
            prompts::strength(generated.strength);
        }

        if let Some(ctx) = self.clipboard.as_mut() {
            if count == 1 {
                copied.truncate(copied.trim_end().len());
            }
            match ctx.set_contents(copied.clone()) {
                Ok(()) => prompts::clipboard_copied(count),
                Err(e) => prompts::clipboard_error(&e.to_string()),
            }
            copied.zeroize();
        }

        Ok(())
    }
}

fn report(err: &Error) -> Stop {
    prompts::error(&err.to_string());
    match err {
        Error::Validation(v) => {
            let hint = match v {
                ValidationError::NoClassesSelected => {
                    "Pick classes with --upper, --lower, --numbers, --symbols or --all."
                }
                _ => "Set the length with -l between 1 and 20.",
            };
            prompts::warn(hint);
            Stop::Failed(1)
        }
        Error::Internal(_) => Stop::Failed(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passcraft")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn save_waits_for_valid_options() {
        let path = std::env::temp_dir().join(format!("passcraft-save-{}", std::process::id()));
        fs::write(&path, "12,true,true,false,false,false\n").unwrap();
        // Only test in this binary that touches the settings path.
        unsafe { std::env::set_var("PASSCRAFT_SETTINGS", &path) };

        let mut ctx = Context::new(&args(&["--save", "-q", "-l", "30", "--upper"])).unwrap();
        assert_eq!(ctx.run(), Err(Stop::Failed(1)));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "12,true,true,false,false,false\n"
        );

        let mut ctx = Context::new(&args(&["--save", "-q", "-l", "3", "--lower", "--numbers"])).unwrap();
        assert_eq!(ctx.run(), Ok(()));
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "3,false,true,true,false,false\n"
        );

        unsafe { std::env::remove_var("PASSCRAFT_SETTINGS") };
        let _ = fs::remove_file(&path);
    }
}
