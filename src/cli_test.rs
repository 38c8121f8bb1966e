use super::*;
use clap::CommandFactory;

#[test]
fn cli_is_well_formed() {
    Cli::command().debug_assert();
}

#[test]
fn trend_defaults() {
    let cli = Cli::try_parse_from(["godtrend", "trend"]).unwrap();
    assert_eq!(cli.verbose, 0);
    match cli.command {
        Commands::Trend {
            common,
            table,
            min_snapshots,
        } => {
            assert_eq!(common.report_path(), PathBuf::from("out.txt"));
            assert!(!common.json);
            assert!(!table);
            assert_eq!(min_snapshots, 2);
        }
        _ => panic!("expected trend"),
    }
}

#[test]
fn trend_table_and_json_conflict() {
    assert!(Cli::try_parse_from(["godtrend", "trend", "--table", "--json"]).is_err());
}

#[test]
fn verbose_is_global() {
    let cli = Cli::try_parse_from(["godtrend", "trend", "-vv", "report.txt"]).unwrap();
    assert_eq!(cli.verbose, 2);
    match cli.command {
        Commands::Trend { common, .. } => {
            assert_eq!(common.report_path(), PathBuf::from("report.txt"));
        }
        _ => panic!("expected trend"),
    }
}

#[test]
fn god_thresholds() {
    let cli = Cli::try_parse_from([
        "godtrend", "god", "--wmc", "30", "--atfd", "3", "--tcc", "0.5", "--all",
    ])
    .unwrap();
    match cli.command {
        Commands::God {
            all,
            wmc,
            atfd,
            tcc,
            ..
        } => {
            assert!(all);
            assert_eq!(wmc, 30);
            assert_eq!(atfd, 3);
            assert!((tcc - 0.5).abs() < f64::EPSILON);
        }
        _ => panic!("expected god"),
    }
}
