mod cli;
mod counts;
mod error;
mod model;
mod output;
mod reader;

use clap::{CommandFactory, Parser};
use std::ffi::OsString;
use std::io::BufWriter;
use std::path::PathBuf;

/// Calculate per-site genotype class percentages for case and control samples.
#[derive(Parser, Debug)]
#[command(version, about, disable_help_flag = true, disable_version_flag = true)]
pub struct Args {
    /// Whitespace-delimited genotype matrix with a header line.
    #[arg(
        value_name = "data_file",
        allow_hyphen_values = true,
        value_hint = clap::ValueHint::FilePath
    )]
    data_file: PathBuf,

    /// Sample list with one `<name> <+|-|0>` pair per line.
    #[arg(
        value_name = "samples_file",
        allow_hyphen_values = true,
        value_hint = clap::ValueHint::FilePath
    )]
    samples_file: PathBuf,
}

fn usage_exit() -> ! {
    eprintln!("{}", Args::command().render_usage());
    std::process::exit(1);
}

/// Exactly two arguments, taken literally: `-x` and `--` are file names too.
fn parse_args() -> Args {
    let mut argv: Vec<OsString> = std::env::args_os().collect();
    if argv.len() != 3 {
        usage_exit();
    }
    argv.insert(1, OsString::from("--"));
    Args::try_parse_from(argv).unwrap_or_else(|_| usage_exit())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("error")).init();

    let args = parse_args();
    let stdout = std::io::stdout();
    let out = BufWriter::new(stdout.lock());
    cli::run(&args.data_file, &args.samples_file, out);
}
