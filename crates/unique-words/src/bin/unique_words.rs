//! `unique-words`: count the unique words of a text with a linked list and
//! an AVL tree.
//!
//! Usage:
//!   unique-words [--file PATH | --random COUNT [--seed N]] [options]
//!
//! Run with `--help` for the full list of options.

use unique_words::cli::{init_logging, parse_args, render, run, USAGE};

fn main() {
    let config = match parse_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            std::process::exit(1);
        }
    };
    if config.help {
        println!("{USAGE}");
        return;
    }
    if let Err(e) = init_logging(&config) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    match run(&config).and_then(|reports| render(&reports, config.json)) {
        Ok(out) => println!("{out}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
