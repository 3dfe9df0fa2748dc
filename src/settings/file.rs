//! Settings file persistence.
//!
//! One line: `char_length,upper,lower,numbers,symbols,to_clipboard`.

use std::env;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use super::Settings;

const FIELDS: usize = 6;

pub fn save(settings: &Settings) -> std::io::Result<()> {
    let path = get_path();
    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&path)?;

    file.write_all(format_line(settings).as_bytes())?;
    log::debug!("saved settings to {}", path.display());
    Ok(())
}

pub fn load(settings: &mut Settings) -> std::io::Result<()> {
    let path = get_path();
    if !path.exists() {
        log::debug!("no settings at {}, writing defaults", path.display());
        return save(settings);
    }

    let file = OpenOptions::new().read(true).open(&path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if !parse_line(line.trim(), settings) {
        log::warn!("malformed settings file {}, rewriting defaults", path.display());
        *settings = Settings::default();
        save(settings)?;
    }

    Ok(())
}

fn format_line(settings: &Settings) -> String {
    let o = &settings.options;
    format!(
        "{},{},{},{},{},{}\n",
        o.char_length,
        o.include_uppercase,
        o.include_lowercase,
        o.include_numbers,
        o.include_symbols,
        settings.to_clipboard
    )
}

/// Fill `settings` from `line`. Unparseable fields keep their current value;
/// returns false when the field count is wrong.
fn parse_line(line: &str, settings: &mut Settings) -> bool {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return false;
    }

    let o = &mut settings.options;
    o.char_length = parts[0].parse().unwrap_or(o.char_length);
    o.include_uppercase = parts[1].parse().unwrap_or(o.include_uppercase);
    o.include_lowercase = parts[2].parse().unwrap_or(o.include_lowercase);
    o.include_numbers = parts[3].parse().unwrap_or(o.include_numbers);
    o.include_symbols = parts[4].parse().unwrap_or(o.include_symbols);
    settings.to_clipboard = parts[5].parse().unwrap_or(settings.to_clipboard);
    true
}

#[inline]
fn get_path() -> PathBuf {
    if let Ok(path) = env::var("PASSCRAFT_SETTINGS")
        && !path.is_empty()
    {
        return PathBuf::from(path);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config/passcraft/settings")
}

#[cfg(test)]
mod tests {
    use super::*;

    use passcraft::pass::Options;

    #[test]
    fn line_round_trip() {
        let settings = Settings {
            options: Options {
                char_length: 17,
                include_uppercase: true,
                include_lowercase: false,
                include_numbers: true,
                include_symbols: true,
            },
            to_clipboard: true,
        };
        let line = format_line(&settings);
        assert_eq!(line, "17,true,false,true,true,true\n");

        let mut parsed = Settings::default();
        assert!(parse_line(line.trim(), &mut parsed));
        assert_eq!(parsed, settings);
    }

    #[test]
    fn bad_fields_fall_back_one_by_one() {
        let mut parsed = Settings::default();
        assert!(parse_line("abc,true,maybe,false,true,no", &mut parsed));
        assert_eq!(parsed.options.char_length, 10);
        assert!(parsed.options.include_uppercase);
        assert!(!parsed.options.include_lowercase);
        assert!(parsed.options.include_symbols);
        assert!(!parsed.to_clipboard);
    }

    #[test]
    fn wrong_field_count_is_rejected() {
        let mut parsed = Settings::default();
        assert!(!parse_line("12,true,true", &mut parsed));
        assert!(!parse_line("", &mut parsed));
        assert_eq!(parsed, Settings::default());
    }
}
