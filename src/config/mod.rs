use clap::Parser;
use std::ffi::OsString;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "even-odd-demo")]
#[command(about = "Prints number parity, a spaced-out greeting and a method call")]
#[command(ignore_errors = true, disable_help_flag = true, disable_version_flag = true)]
pub struct CliConfig {
    #[arg(short, long, help = "Enable debug logging on stderr")]
    pub verbose: bool,

    /// Everything else on the command line; accepted and ignored.
    #[arg(hide = true, allow_hyphen_values = true)]
    pub ignored: Vec<OsString>,
}

impl CliConfig {
    /// Arguments never change stdout. Unknown ones are collected into
    /// `ignored`, and if clap still rejects the line the defaults are used.
    pub fn parse_lenient<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_args() {
        let config = CliConfig::parse_lenient(["even-odd-demo"]);
        assert!(!config.verbose);
        assert!(config.ignored.is_empty());
    }

    #[test]
    fn test_verbose_flag() {
        assert!(CliConfig::parse_lenient(["even-odd-demo", "--verbose"]).verbose);
        assert!(CliConfig::parse_lenient(["even-odd-demo", "-v"]).verbose);
    }

    #[test]
    fn test_unknown_args_are_ignored() {
        let config = CliConfig::parse_lenient(["even-odd-demo", "foo", "--bar", "--help"]);
        assert!(!config.verbose);
    }

    #[test]
    fn test_verbose_survives_stray_args() {
        let config = CliConfig::parse_lenient(["even-odd-demo", "-v", "foo"]);
        assert!(config.verbose);
        assert_eq!(config.ignored, vec![OsString::from("foo")]);

        assert!(CliConfig::parse_lenient(["even-odd-demo", "--verbose", "foo", "bar"]).verbose);
    }
}
