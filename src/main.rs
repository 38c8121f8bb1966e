mod cli;
mod error;
mod god;
mod parser;
mod report_helpers;
mod trend;

use std::error::Error;

use clap::Parser;

use cli::{Cli, Commands};
use god::GodOptions;
use god::analyzer::Thresholds;
use trend::{OutputFormat, TrendOptions};

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn dispatch(command: Commands) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Trend {
            common,
            table,
            min_snapshots,
        } => {
            let format = if common.json {
                OutputFormat::Json
            } else if table {
                OutputFormat::Table
            } else {
                OutputFormat::Plain
            };
            let opts = TrendOptions {
                format,
                min_snapshots,
            };
            trend::run(&common.report_path(), &opts)
        }
        Commands::God {
            common,
            all,
            wmc,
            atfd,
            tcc,
        } => {
            let opts = GodOptions {
                json: common.json,
                all,
                thresholds: Thresholds { wmc, atfd, tcc },
            };
            god::run(&common.report_path(), &opts)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(err) = dispatch(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
