//! Command-line interface

use clap::{Parser, Subcommand, ValueEnum};

use crate::probe::Host;

/// Code-lifting detection probe
#[derive(Parser, Debug)]
#[command(name = "liftprobe")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the compiled probe once
    Check {
        /// First script-layer input
        #[arg(allow_negative_numbers = true)]
        a: i32,

        /// Second script-layer input
        #[arg(allow_negative_numbers = true)]
        c: i32,

        /// Render the result the way this host's adapter does
        #[arg(long, value_enum, default_value_t = HostArg::NativeScript)]
        host: HostArg,
    },

    /// Generate secrets and identifiers for a new application build
    Provision {
        /// Application identifier (bundle id / package name)
        #[arg(long)]
        app_id: String,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
        format: OutputFormat,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostArg {
    Cordova,
    ReactNative,
    NativeScript,
}

impl From<HostArg> for Host {
    fn from(arg: HostArg) -> Self {
        match arg {
            HostArg::Cordova => Host::Cordova,
            HostArg::ReactNative => Host::ReactNative,
            HostArg::NativeScript => Host::NativeScript,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Env,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
