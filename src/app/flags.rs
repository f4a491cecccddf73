// SPDX-License-Identifier: MPL-2.0
//! Command-line flags.

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Language code to switch to at startup (e.g. `fr`, `pt-BR`).
    pub lang: Option<String>,
    /// Section to print instead of the whole document.
    pub section: Option<String>,
    /// Directory with `languages.json` and the `data*.json` documents.
    pub content_dir: Option<String>,
    /// Optional data directory override (for the state file).
    /// Takes precedence over `FOLIO_STORE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `FOLIO_STORE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    pub log_level: Option<String>,
    /// Print the language catalog and exit.
    pub list_languages: bool,
    pub help: bool,
}

pub const USAGE: &str = "\
folio_store - print localized portfolio content

USAGE:
  folio_store [OPTIONS]

OPTIONS:
  --lang CODE          Switch to CODE after restoring the saved preference
  --section NAME       Print only the NAME section (e.g. skills, personal)
  --content-dir DIR    Read documents from DIR instead of the built-in set
  --data-dir DIR       Directory of the state file
  --config-dir DIR     Directory of settings.toml
  --log-level LEVEL    trace|debug|info|warn|error|off
  --list-languages     Print the language catalog
  -h, --help           Print this help
";

impl Flags {
    /// Parses flags, rejecting anything left over.
    ///
    /// # Errors
    ///
    /// Returns the `pico_args` error for malformed values or unknown
    /// arguments.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, pico_args::Error> {
        let flags = Self {
            help: args.contains(["-h", "--help"]),
            list_languages: args.contains("--list-languages"),
            lang: args.opt_value_from_str("--lang")?,
            section: args.opt_value_from_str("--section")?,
            content_dir: args.opt_value_from_str("--content-dir")?,
            data_dir: args.opt_value_from_str("--data-dir")?,
            config_dir: args.opt_value_from_str("--config-dir")?,
            log_level: args.opt_value_from_str("--log-level")?,
        };

        let remaining = args.finish();
        if !remaining.is_empty() {
            let remaining: Vec<String> = remaining
                .into_iter()
                .map(|arg| arg.to_string_lossy().into_owned())
                .collect();
            return Err(pico_args::Error::ArgumentParsingFailed {
                cause: format!("unexpected arguments: {remaining:?}"),
            });
        }
        Ok(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Flags, pico_args::Error> {
        Flags::from_args(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn parses_all_value_flags() {
        let flags = parse(&[
            "--lang",
            "fr",
            "--section",
            "skills",
            "--content-dir",
            "/srv/content",
            "--log-level",
            "debug",
        ])
        .expect("valid args");

        assert_eq!(flags.lang.as_deref(), Some("fr"));
        assert_eq!(flags.section.as_deref(), Some("skills"));
        assert_eq!(flags.content_dir.as_deref(), Some("/srv/content"));
        assert_eq!(flags.log_level.as_deref(), Some("debug"));
        assert!(!flags.list_languages);
    }

    #[test]
    fn no_args_is_default() {
        assert_eq!(parse(&[]).expect("valid args"), Flags::default());
    }

    #[test]
    fn unknown_arguments_are_rejected() {
        assert!(matches!(
            parse(&["--frobnicate"]),
            Err(pico_args::Error::ArgumentParsingFailed { .. })
        ));
    }

    #[test]
    fn leftover_arguments_are_named_in_the_error() {
        let err = parse(&["--lang", "fr", "stray"]).expect_err("stray positional");
        match err {
            pico_args::Error::ArgumentParsingFailed { cause } => assert!(cause.contains("stray")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
