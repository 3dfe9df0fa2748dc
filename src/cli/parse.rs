use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-u" | "--urandom" => flags.urandom = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--upper" => flags.upper = true,
            "--lower" => flags.lower = true,
            "--numbers" => flags.numbers = true,
            "--symbols" => flags.symbols = true,
            "-a" | "--all" => flags.all(),
            flag @ ("-l" | "--length") => {
                flags.length = Some(number_arg(args, &mut i, flag)?);
            }
            flag @ ("-n" | "--number") => {
                let count = number_arg(args, &mut i, flag)?;
                if count == 0 {
                    return Err(ParseError::InvalidNumber(args[i].clone()));
                }
                flags.number = Some(count);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn number_arg(args: &[String], i: &mut usize, flag: &str) -> Result<usize, ParseError> {
    *i += 1;
    let value = args
        .get(*i)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))?;
    value
        .parse()
        .map_err(|_| ParseError::InvalidNumber(value.clone()))
}
