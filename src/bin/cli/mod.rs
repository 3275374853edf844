use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

macro_rules! env_prefix {
    () => {
        "NOIP_"
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the JSON-formatted config file
    #[arg(
        short,
        long,
        value_name = "PATH",
        default_value = "/etc/noip/noip.json",
        env = concat!(env_prefix!(), "CONFIG")
    )]
    pub config: PathBuf,

    /// Set the loglevel of the application
    #[arg(
        value_enum,
        short = 'l',
        long,
        default_value_t = Loglevel::Warn,
        value_name = "LEVEL",
        env = concat!(env_prefix!(), "LOGLEVEL")
    )]
    pub loglevel: Loglevel,
}

/// Used to set the applications loglevel.
/// Defaults to `warn` so that a successful run produces no output at all.
// This is essentially a re-creation of log::Level. However, that enum doesn't derive ValueEnum, so we have to do it manually here
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, ValueEnum)]
pub enum Loglevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}
impl From<Loglevel> for LevelFilter {
    fn from(ll: Loglevel) -> Self {
        match ll {
            Loglevel::Error => LevelFilter::Error,
            Loglevel::Warn => LevelFilter::Warn,
            Loglevel::Info => LevelFilter::Info,
            Loglevel::Debug => LevelFilter::Debug,
            Loglevel::Trace => LevelFilter::Trace,
        }
    }
}
