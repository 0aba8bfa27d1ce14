//! CLI entry point for headcomment

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use headcomment::paths;
use headcomment::{
    ColorMode, Mode, RunConfig, StyleRegistry, run, write_languages, write_languages_json,
};
use termcolor::StandardStream;

#[derive(Parser, Debug)]
#[command(name = "headcomment")]
#[command(about = "Print the leading comment block of source files")]
#[command(version)]
#[command(args_override_self = true)]
struct Args {
    /// Files to read, processed in the order given
    files: Vec<PathBuf>,

    /// Print the first N lines of each file instead of its comment
    #[arg(short = 'n', long = "lines", value_name = "N", default_value_t = 0)]
    lines: usize,

    /// Print each file in full
    #[arg(short = 'c', long = "cat")]
    cat: bool,

    /// Do not print the header before each file
    #[arg(short = 'q', long = "quite", visible_alias = "quiet")]
    quiet: bool,

    /// Prefix printed lines with their line number
    #[arg(short = 'e', long = "enum")]
    numbered: bool,

    /// List the known comment styles and languages, then exit
    #[arg(long = "lang")]
    lang: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,
}

impl Args {
    fn run_config(&self) -> RunConfig {
        RunConfig {
            mode: Mode::from_flags(self.cat, self.lines),
            banner: !self.quiet,
            numbering: self.numbered,
            color: self.color,
            json: self.json,
        }
    }
}

/// Parse arguments, printing usage to stdout and exiting 1 on bad input.
fn parse_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            println!("{}", e.render());
            println!("{}", Args::command().render_help());
            process::exit(1);
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args();

    if args.lang {
        let names = StyleRegistry::builtin().language_names();
        let mut stdout = io::stdout().lock();
        let result = if args.json {
            write_languages_json(&mut stdout, &names)
        } else {
            write_languages(&mut stdout, &names)
        };
        if let Err(e) = result.and_then(|_| stdout.flush()) {
            eprintln!("headcomment: error writing output: {}", e);
            process::exit(1);
        }
        return;
    }

    let cwd = std::env::current_dir().unwrap_or_else(|e| {
        eprintln!("headcomment: cannot determine current directory: {}", e);
        process::exit(1);
    });
    let home = paths::home_dir();
    let files: Vec<PathBuf> = args
        .files
        .iter()
        .map(|p| paths::resolve(p, &cwd, home.as_deref()))
        .collect();

    let config = args.run_config();
    log::debug!("{:?} over {} file(s)", config.mode, files.len());

    let stdout = StandardStream::stdout(config.color.color_choice());
    let mut out = stdout.lock();
    if let Err(e) = run(&config, &files, &mut out) {
        let _ = out.flush();
        eprintln!("headcomment: {}", e);
        process::exit(1);
    }
}
