use std::env;

mod cli;
mod exits;
mod settings;
mod terminal;
mod tui;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    exits::reset_terminal();
    exits::install_handlers();

    let args: Vec<String> = env::args().collect();

    match args.len() {
        1 => tui::run(),
        _ => cli::run(args),
    }
}
