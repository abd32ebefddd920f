use std::path::PathBuf;

use clap::Parser;

/// Command line configuration of a single file check, built once by the
/// argument parser and never mutated afterwards.
///
/// The built-in help action is disabled: help requests have to exit with the
/// UNKNOWN service state, so `-h`/`-?`/`--help` is an ordinary flag handled
/// by the binary.
#[derive(Debug, Parser)]
#[command(
    name = "checkfilechange",
    about = "checkfilechange is a simple program to check if a file has been modified in a specified timerange.",
    disable_help_flag = true
)]
pub struct CheckConfig {
    /// file to check
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// time in minutes
    #[arg(short = 'm', long = "minutes", value_name = "MINUTES", default_value_t = 5)]
    pub minutes: u32,

    /// include modified time in output
    #[arg(short = 'i', long = "include")]
    pub include: bool,

    /// return warning instead of critical
    #[arg(short = 'w', long = "warning")]
    pub warning: bool,

    /// show debug messages
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// show this message and exit
    #[arg(short = 'h', long = "help", visible_short_alias = '?')]
    pub help: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_command() {
        CheckConfig::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config =
            CheckConfig::try_parse_from(["checkfilechange", "-f", "/var/log/foo.log"]).unwrap();

        assert_eq!(config.file, Some(PathBuf::from("/var/log/foo.log")));
        assert_eq!(config.minutes, 5);
        assert!(!config.include);
        assert!(!config.warning);
        assert!(!config.verbose);
        assert!(!config.help);
    }

    #[test]
    fn test_long_flags() {
        let config = CheckConfig::try_parse_from([
            "checkfilechange",
            "--file=/var/spool/heartbeat",
            "--minutes=90",
            "--include",
            "--warning",
            "--verbose",
        ])
        .unwrap();

        assert_eq!(config.file, Some(PathBuf::from("/var/spool/heartbeat")));
        assert_eq!(config.minutes, 90);
        assert!(config.include);
        assert!(config.warning);
        assert!(config.verbose);
    }

    #[test]
    fn test_short_flags() {
        let config = CheckConfig::try_parse_from([
            "checkfilechange",
            "-f=/var/spool/heartbeat",
            "-m=90",
            "-i",
            "-w",
            "-v",
        ])
        .unwrap();

        assert_eq!(config.file, Some(PathBuf::from("/var/spool/heartbeat")));
        assert_eq!(config.minutes, 90);
        assert!(config.include);
        assert!(config.warning);
        assert!(config.verbose);
    }

    #[test]
    fn test_help_aliases() {
        for flag in ["-h", "-?", "--help"] {
            let config = CheckConfig::try_parse_from(["checkfilechange", flag]).unwrap();
            assert!(config.help, "{flag} should request help");
        }
    }

    #[test]
    fn test_file_is_optional_for_the_parser() {
        // a missing -f is not a parse error, the binary routes it to the help path
        let config = CheckConfig::try_parse_from(["checkfilechange"]).unwrap();
        assert_eq!(config.file, None);
    }

    #[test]
    fn test_malformed_minutes() {
        let result =
            CheckConfig::try_parse_from(["checkfilechange", "-f", "/tmp/x", "-m", "soon"]);
        assert!(result.is_err());

        let result = CheckConfig::try_parse_from(["checkfilechange", "-f", "/tmp/x", "-m=-1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_flag() {
        let result = CheckConfig::try_parse_from(["checkfilechange", "--frequency", "5"]);
        assert!(result.is_err());
    }
}
