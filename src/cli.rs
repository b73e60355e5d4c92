use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub file: PathBuf,
    pub buffer: Option<BufferSource>,
    pub sort: bool,
    pub atomic: bool,
    pub json: bool,
    pub verbosity: u8,
}

/// Where the editor's unsaved contents of the target come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferSource {
    Stdin,
    File(PathBuf),
}

impl std::str::FromStr for BufferSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err("Buffer path must not be empty".to_string()),
            "-" => Ok(BufferSource::Stdin),
            path => Ok(BufferSource::File(PathBuf::from(path))),
        }
    }
}

impl Config {
    /// Log filter used when `RUST_LOG` is not set.
    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbosity {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }
}

pub fn build_cli() -> Command {
    Command::new("pullfile")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Overwrite a file with the contents of another file from the same directory")
        .arg(
            Arg::new("file")
                .value_name("FILE")
                .help("File to overwrite (the active document)")
                .value_parser(clap::value_parser!(PathBuf))
                .required(true),
        )
        .arg(
            Arg::new("buffer")
                .short('b')
                .long("buffer")
                .value_name("PATH")
                .help("Unsaved editor contents of FILE, saved before the pull (\"-\" reads stdin)")
                .value_parser(clap::value_parser!(BufferSource)),
        )
        .arg(
            Arg::new("sort")
                .long("sort")
                .help("Sort the file list instead of keeping directory order")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("atomic")
                .long("atomic")
                .env("PULLFILE_ATOMIC")
                .help("Replace FILE through a temporary file and rename")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the outcome as JSON on stdout")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
}

pub fn parse_args() -> crate::Result<Config> {
    config_from_matches(build_cli().get_matches())
}

pub fn try_parse_from<I, T>(args: I) -> crate::Result<Config>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let matches = build_cli()
        .try_get_matches_from(args)
        .map_err(|e| crate::Error::Parse(e.to_string()))?;
    config_from_matches(matches)
}

fn config_from_matches(matches: clap::ArgMatches) -> crate::Result<Config> {
    let file = matches
        .get_one::<PathBuf>("file")
        .cloned()
        .ok_or_else(|| crate::Error::Parse("Missing file argument".to_string()))?;

    Ok(Config {
        file,
        buffer: matches.get_one::<BufferSource>("buffer").cloned(),
        sort: matches.get_flag("sort"),
        atomic: matches.get_flag("atomic"),
        json: matches.get_flag("json"),
        verbosity: matches.get_count("verbose"),
    })
}
