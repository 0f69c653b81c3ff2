//! Command-line interface for markup-to-element
//!
//! Reads a document, converts the selected markup (whole document or a line
//! range) into `createElement` calls and substitutes the result back.
//!
//! Usage:
//!   markup-to-element [FILE]                         - convert FILE (or stdin) to stdout
//!   markup-to-element FILE --lines 3:7 --in-place    - rewrite lines 3..=7 of FILE
//!   markup-to-element --pragma h --indent 4 < a.html - Preact-style output

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use markup_to_element::{
    DEFAULT_PRAGMA, EmitConfig, HtmlParser, LineRange, Selection, convert_markup_with,
};

#[derive(Debug, Parser)]
#[command(
    name = "markup-to-element",
    version,
    about = "Convert HTML/SVG markup into nested createElement calls"
)]
struct Cli {
    /// Input file; omit or use "-" to read stdin
    input: Option<PathBuf>,

    /// Write the result to this file instead of stdout
    #[arg(short, long, conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Rewrite the input file in place
    #[arg(short = 'i', long)]
    in_place: bool,

    /// Convert only these lines (1-based, inclusive), e.g. 3:7
    #[arg(short, long, value_name = "START:END")]
    lines: Option<LineRange>,

    /// Callee used for every element call
    #[arg(long, default_value = DEFAULT_PRAGMA)]
    pragma: String,

    /// Spaces per nesting level (0-16)
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(0..=16))]
    indent: u8,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("conversion failed: {err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "off",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = input_path(cli);
    if cli.in_place && path.is_none() {
        bail!("--in-place needs an input file");
    }

    let document = read_input(path)?;
    let selection = match cli.lines {
        Some(range) => Selection::lines(&document, range)?,
        None => Selection::whole(&document),
    };
    tracing::info!(bytes = selection.text(&document).len(), "convert command triggered");

    let config = EmitConfig::default()
        .with_pragma(cli.pragma.clone())
        .with_indent(usize::from(cli.indent));
    let converted = convert_markup_with(&HtmlParser, selection.text(&document), &config)?;
    let result = selection.replace(&document, &converted);

    write_output(cli, path, &result)?;
    tracing::info!("conversion successful");
    Ok(())
}

fn input_path(cli: &Cli) -> Option<&Path> {
    cli.input.as_deref().filter(|p| *p != Path::new("-"))
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display())),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(cli: &Cli, input: Option<&Path>, result: &str) -> anyhow::Result<()> {
    let target = if cli.in_place { input } else { cli.output.as_deref() };
    match target {
        Some(path) => fs::write(path, result).with_context(|| format!("writing {}", path.display())),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(result.as_bytes())?;
            if !result.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
            stdout.flush()?;
            Ok(())
        }
    }
}
