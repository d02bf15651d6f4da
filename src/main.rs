mod calendar;
mod canvas;
mod generate;
mod logging;
mod prompt;
mod theme;
mod variant;
use crate::generate::{generate_all, OutputConfig, DEFAULT_OUTPUT_DIR};
use crate::prompt::Prompter;
use anyhow::Context;
use lexopt::{Arg, Parser};
use std::path::PathBuf;
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { output_dir: PathBuf, verbosity: u8 },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut output_dir = PathBuf::from(DEFAULT_OUTPUT_DIR);
        let mut verbosity = 0u8;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('o') | Arg::Long("output-dir") => {
                    output_dir = PathBuf::from(parser.value()?);
                }
                Arg::Short('v') | Arg::Long("verbose") => verbosity = verbosity.saturating_add(1),
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            output_dir,
            verbosity,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                output_dir,
                verbosity,
            } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                logging::init(verbosity);
                run_interactive(today, &OutputConfig::new(output_dir))
            }
            Command::Help => {
                println!("Usage: tencal [options]");
                println!();
                println!("Generate printable 10-week tracking calendars as PDFs");
                println!();
                println!("Options:");
                println!("  -o, --output-dir <DIR>");
                println!("                    Write calendars to DIR [default: {DEFAULT_OUTPUT_DIR}]");
                println!("  -v, --verbose     Log more details to stderr (repeatable)");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn run_interactive(today: Date, config: &OutputConfig) -> anyhow::Result<()> {
    println!("=== 10-Week Tracking Calendars ===");
    let prompter = Prompter::default();
    let start = prompter.start_date(today)?;
    let kinds = prompter.calendars()?;
    let variants = prompter.variants(&kinds)?;
    println!();
    println!("Generating calendars...");
    let mut failures = 0usize;
    for (kind, r) in generate_all(&variants, start, config) {
        match r {
            Ok(path) => println!("  Created: {}", path.display()),
            Err(e) => {
                failures += 1;
                eprintln!("  Failed: {kind}: {:#}", anyhow::Error::new(e));
            }
        }
    }
    if failures > 0 {
        anyhow::bail!("{failures} of {} calendar(s) could not be generated", variants.len());
    }
    println!();
    println!("Done!");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Command, lexopt::Error> {
        Command::from_parser(Parser::from_args(args))
    }

    #[test]
    fn test_no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            Command::Run {
                output_dir: PathBuf::from("output"),
                verbosity: 0,
            }
        );
    }

    #[test]
    fn test_output_dir_and_verbosity() {
        assert_eq!(
            parse(&["-vv", "--output-dir", "cals", "--verbose"]).unwrap(),
            Command::Run {
                output_dir: PathBuf::from("cals"),
                verbosity: 3,
            }
        );
        assert_eq!(
            parse(&["-o", "x/y"]).unwrap(),
            Command::Run {
                output_dir: PathBuf::from("x/y"),
                verbosity: 0,
            }
        );
    }

    #[test]
    fn test_help_and_version() {
        assert_eq!(parse(&["--help"]).unwrap(), Command::Help);
        assert_eq!(parse(&["-o", "x", "-V"]).unwrap(), Command::Version);
    }

    #[test]
    fn test_bad_args() {
        assert!(parse(&["--bogus"]).is_err());
        assert!(parse(&["stray"]).is_err());
        assert!(parse(&["--output-dir"]).is_err());
    }
}
