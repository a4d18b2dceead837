//! Argument parsing, logger setup and the run loop behind the `unique-words`
//! binary.

use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use balanced_set::AvlConfig;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, CombinedLogger, SharedLogger, TermLogger, TerminalMode, WriteLogger};

use crate::error::{Error, Result};
use crate::report::{count_with_avl, count_with_list, Report};
use crate::source::{BookReader, KeySource, RandomWords};

pub const DEFAULT_FILE: &str = "WarAndPeace.txt";

pub const USAGE: &str = "\
Usage: unique-words [--file PATH | --random COUNT [--seed N]] [options]

Counts the unique words of a text with a linked list and an AVL tree.

Options:
  --file PATH        text to read (default: WarAndPeace.txt)
  --random COUNT     use COUNT generated words instead of a file
  --seed N           seed for --random
  --unbalanced       disable rebalancing (plain binary search tree)
  --skip-list        skip the linked-list baseline
  --json             print the reports as JSON
  --log-level LEVEL  off, error, warn, info, debug or trace (default: warn)
  --log-file PATH    also write debug logs to PATH
  --help             print this message";

// ── Config ────────────────────────────────────────────────────────────────

/// Where the words come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceSpec {
    File(PathBuf),
    Random { count: usize, seed: Option<u64> },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub source: SourceSpec,
    pub balance: bool,
    pub skip_list: bool,
    pub json: bool,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub help: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceSpec::File(PathBuf::from(DEFAULT_FILE)),
            balance: true,
            skip_list: false,
            json: false,
            log_level: LevelFilter::Warn,
            log_file: None,
            help: false,
        }
    }
}

/// Parses the arguments that follow the program name.
pub fn parse_args<I>(args: I) -> Result<Config>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();
    let mut file: Option<PathBuf> = None;
    let mut count: Option<usize> = None;
    let mut seed: Option<u64> = None;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--file" => file = Some(PathBuf::from(value_of(&arg, &mut args)?)),
            "--random" => count = Some(parse_value(&arg, &mut args)?),
            "--seed" => seed = Some(parse_value(&arg, &mut args)?),
            "--log-level" => config.log_level = parse_value(&arg, &mut args)?,
            "--log-file" => config.log_file = Some(PathBuf::from(value_of(&arg, &mut args)?)),
            "--unbalanced" => config.balance = false,
            "--skip-list" => config.skip_list = true,
            "--json" => config.json = true,
            "--help" | "-h" => config.help = true,
            _ => return Err(Error::UnknownFlag(arg)),
        }
    }

    config.source = match (file, count) {
        (Some(_), Some(_)) => return Err(Error::Conflict("--file".into(), "--random".into())),
        (None, Some(count)) => SourceSpec::Random { count, seed },
        (file, None) => {
            if seed.is_some() {
                return Err(Error::Requires {
                    flag: "--seed".into(),
                    needs: "--random".into(),
                });
            }
            SourceSpec::File(file.unwrap_or_else(|| PathBuf::from(DEFAULT_FILE)))
        }
    };
    Ok(config)
}

fn value_of(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<String> {
    args.next().ok_or_else(|| Error::MissingValue(flag.to_string()))
}

fn parse_value<T: FromStr>(flag: &str, args: &mut impl Iterator<Item = String>) -> Result<T> {
    let value = value_of(flag, args)?;
    value.parse().map_err(|_| Error::InvalidValue {
        flag: flag.to_string(),
        value,
    })
}

// ── Logging ───────────────────────────────────────────────────────────────

/// Installs the global logger: stderr at the configured level, plus a log
/// file at `debug` or finer when one is given.
pub fn init_logging(config: &Config) -> Result<()> {
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    loggers.push(TermLogger::new(
        config.log_level,
        simplelog::Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    ));
    if let Some(path) = &config.log_file {
        let file = File::create(path).map_err(|source| Error::Io {
            path: path.clone(),
            source,
        })?;
        loggers.push(WriteLogger::new(
            config.log_level.max(LevelFilter::Debug),
            simplelog::Config::default(),
            file,
        ));
    }
    CombinedLogger::init(loggers)?;
    Ok(())
}

// ── Run ───────────────────────────────────────────────────────────────────

pub fn open_source(spec: &SourceSpec) -> Result<Box<dyn KeySource>> {
    Ok(match spec {
        SourceSpec::File(path) => Box::new(BookReader::open(path)?),
        SourceSpec::Random { count, seed } => Box::new(RandomWords::new(*count, *seed)),
    })
}

/// Counts the configured source: the list baseline first unless skipped,
/// then the tree.
pub fn run(config: &Config) -> Result<Vec<Report>> {
    let source = open_source(&config.source)?;
    let mut reports = Vec::with_capacity(2);
    if !config.skip_list {
        reports.push(count_with_list(source.as_ref()));
    }
    reports.push(count_with_avl(
        source.as_ref(),
        AvlConfig {
            balance: config.balance,
        },
    ));
    info!("finished {} run(s) over {}", reports.len(), source.name());
    Ok(reports)
}

/// Text reports separated by blank lines, or a pretty JSON array.
pub fn render(reports: &[Report], json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(reports)?);
    }
    Ok(reports
        .iter()
        .map(Report::to_string)
        .collect::<Vec<_>>()
        .join("\n\n"))
}
