mod context;
mod flags;
mod parse;
pub mod prompts;
pub mod quiet;

pub use context::{Context, Stop};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Run flag-driven mode.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(e) => {
            prompts::error(&e.to_string());
            prompts::error("Run with --help for usage.");
            std::process::exit(1);
        }
    };

    if let Err(Stop::Failed(code)) = ctx.run() {
        std::process::exit(code);
    }
}
