mod cli;
mod error;

use clap::Parser;
use cli::Cli;
use log::LevelFilter;
use std::env;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match cli.command.run() {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logger(verbosity: u8) {
    let mut builder = pretty_env_logger::formatted_builder();
    match env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            builder.filter_level(level_filter(verbosity));
        }
    }
    builder.init();
}

fn level_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}
