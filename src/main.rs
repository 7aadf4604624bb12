use anyhow::Result;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use statline::commands;

fn display_args() -> [Arg; 4] {
    [
        Arg::new("interval")
            .short('i')
            .long("interval")
            .value_name("MS")
            .help("Refresh interval in milliseconds (default: general.refresh_ms)")
            .value_parser(value_parser!(u64).range(1..)),
        Arg::new("byte")
            .short('b')
            .long("byte")
            .help("Show network rates in bytes instead of bits")
            .action(ArgAction::SetTrue),
        Arg::new("sum")
            .long("sum")
            .help("Show network Rx+Tx in a single column")
            .action(ArgAction::SetTrue),
        Arg::new("cumulative")
            .long("cumulative")
            .help("Show cumulative counters instead of rates")
            .action(ArgAction::SetTrue),
    ]
}

fn build_cli() -> Command {
    Command::new("statline")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Terminal dashboard for network, disk I/O and NVMe health")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file (default: <config dir>/statline/statline.toml)")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .help("Append log records to FILE instead of stderr")
                .value_parser(value_parser!(PathBuf))
                .global(true),
        )
        .subcommand(
            Command::new("monitor")
                .about("Live dashboard in the terminal")
                .args(display_args()),
        )
        .subcommand(
            Command::new("snapshot")
                .about("Print the dashboard for a few ticks and exit")
                .args(display_args())
                .arg(
                    Arg::new("count")
                        .short('n')
                        .long("count")
                        .value_name("N")
                        .help("Number of ticks to print")
                        .default_value("1")
                        .value_parser(value_parser!(u64).range(1..)),
                )
                .arg(
                    Arg::new("width")
                        .short('w')
                        .long("width")
                        .value_name("COLUMNS")
                        .help("Width of the rendered rows")
                        .default_value("80")
                        .value_parser(value_parser!(usize)),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the stats as one JSON object per tick")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("config")
                .about("Show the configuration file location")
                .arg(
                    Arg::new("default")
                        .long("default")
                        .help("Print the default configuration as TOML")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("fields")
                        .long("fields")
                        .help("List the fields reported by each plugin")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("default"),
                ),
        )
        .subcommand(Command::new("version").about("Shows version information"))
}

/// The TUI owns the terminal, so its logs go to a file by default
fn log_file(matches: &ArgMatches) -> Option<PathBuf> {
    let (name, sub_matches) = matches.subcommand()?;
    sub_matches
        .get_one::<PathBuf>("log-file")
        .cloned()
        .or_else(|| (name == "monitor").then(statline::default_log_path))
}

fn main() -> Result<()> {
    let matches = build_cli().get_matches();

    statline::init_logging(log_file(&matches).as_deref())?;

    match matches.subcommand() {
        Some(("monitor", sub_matches)) => commands::monitor::execute(sub_matches)?,
        Some(("snapshot", sub_matches)) => commands::snapshot::execute(sub_matches)?,
        Some(("config", sub_matches)) => commands::config::execute(sub_matches)?,
        Some(("version", _)) => commands::version::execute()?,
        _ => {
            println!("Use 'statline --help' for more information.");
        }
    }

    Ok(())
}
