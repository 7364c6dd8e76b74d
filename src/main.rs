#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use upfolder::{
    Config, DefaultClock, DefaultFsOps, DefaultGitRunner, Options, collect_report, default_root,
    load_config,
    output::{TabStyle, format_tab, format_text, to_json},
};

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Tab,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Report staged, modified and untracked files in every git repo under a folder."
)]
struct Args {
    /// Root directories to scan (default: parent of the directory holding this binary)
    roots: Vec<PathBuf>,

    /// TOML file with default roots, exclude and jobs
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory name to skip while scanning (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Number of repositories checked in parallel (default: number of CPUs)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    jobs: Option<u64>,

    /// Output format: text (default), tab or json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,

    /// Table style to use with --output tab
    #[arg(long, value_enum, default_value_t = TabStyle::Rounded)]
    tab_style: TabStyle,

    /// Do not draw a progress bar
    #[arg(long)]
    no_progress: bool,

    /// Print debug info while scanning
    #[arg(long)]
    debug: bool,
}

fn build_options(args: &Args, config: Config) -> Options {
    let roots = if !args.roots.is_empty() {
        args.roots.clone()
    } else if !config.roots.is_empty() {
        config.roots
    } else {
        vec![default_root()]
    };
    let mut exclude = config.exclude;
    exclude.extend(args.exclude.iter().cloned());
    let jobs = args
        .jobs
        .and_then(|n| usize::try_from(n).ok())
        .or(config.jobs);
    Options {
        roots,
        exclude,
        jobs,
        progress: !args.no_progress && !args.debug,
        debug: args.debug,
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => match load_config(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::from(2);
            }
        },
        None => Config::default(),
    };
    let opts = build_options(&args, config);
    if opts.debug {
        eprintln!("[debug] options: {opts:?}");
    }

    let report = collect_report(&opts, &DefaultFsOps, &DefaultGitRunner, &DefaultClock);
    let out = match args.output {
        OutputFormat::Text => format_text(&report),
        OutputFormat::Tab => format_tab(&report, args.tab_style),
        OutputFormat::Json => match to_json(&report) {
            Ok(out) => out,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
    };
    println!("{out}");
    ExitCode::SUCCESS
}
