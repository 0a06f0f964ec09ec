use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Interactive in-memory banking ledger
#[derive(Parser, Debug)]
#[command(name = "banking-ledger")]
#[command(about = "Interactive in-memory banking ledger", long_about = None)]
pub struct CliArgs {
    /// Write the admin dashboard to this CSV file when the session ends
    #[arg(
        long = "export",
        value_name = "PATH",
        help = "Write all account states to this CSV file on exit"
    )]
    pub export: Option<PathBuf>,

    /// Log verbosity
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
        help = "Increase log verbosity (-v: debug, -vv: trace)"
    )]
    pub verbose: u8,
}

impl CliArgs {
    /// Default tracing filter for the chosen verbosity
    ///
    /// `RUST_LOG` takes precedence when set; this is the fallback level.
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::path::PathBuf;

    #[rstest]
    #[case::no_options(&["program"], None, 0)]
    #[case::export(&["program", "--export", "accounts.csv"], Some("accounts.csv"), 0)]
    #[case::verbose(&["program", "-v"], None, 1)]
    #[case::very_verbose(&["program", "-vv"], None, 2)]
    #[case::all_options(&["program", "--export", "out.csv", "-v"], Some("out.csv"), 1)]
    fn test_argument_parsing(
        #[case] args: &[&str],
        #[case] export: Option<&str>,
        #[case] verbose: u8,
    ) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.export, export.map(PathBuf::from));
        assert_eq!(parsed.verbose, verbose);
    }

    #[rstest]
    #[case::quiet(0, "info")]
    #[case::debug(1, "debug")]
    #[case::trace(2, "trace")]
    #[case::saturates(5, "trace")]
    fn test_log_filter(#[case] verbose: u8, #[case] expected: &str) {
        let args = CliArgs {
            export: None,
            verbose,
        };
        assert_eq!(args.log_filter(), expected);
    }

    #[rstest]
    #[case::unknown_flag(&["program", "--unknown"])]
    #[case::export_missing_value(&["program", "--export"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
