//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Map CLI syntax choices onto `envconf` types.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use envconf::{CommentDelimiter, DEFAULT_SECTION};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "envconf")]
#[command(about = "Inspect and edit sectioned config files overlaid with the environment", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  envconf --file app.conf --section server conf address\n  envconf fetch port --env-key APP_PORT --default 8080\n  envconf get APP_PORT port\n  envconf --section db set host localhost\n  envconf --output json dump\n"
)]
pub struct Cli {
    /// Path to the config file (defaults to $ENV, then .env)
    #[arg(short, long, global = true, env = "ENVCONF_FILE", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Section used for lookups and edits
    #[arg(short, long, global = true, default_value = DEFAULT_SECTION)]
    pub section: String,

    /// Comment delimiter used by the file
    #[arg(long, global = true, value_enum, default_value_t = CommentArg::Hash)]
    pub comment: CommentArg,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look a key up in the config file only
    Conf {
        key: String,

        /// Value returned when the key is absent
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Look a variable up in the environment only
    Env {
        name: String,

        /// Value returned when the variable is unset or empty
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Look a key up in the config file, then the environment
    Fetch {
        conf_key: String,

        /// Environment variable consulted when the key is absent (defaults to the key)
        #[arg(short, long)]
        env_key: Option<String>,

        /// Value returned when both sources miss
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Look a variable up in the environment, then the config file
    Get {
        env_key: String,

        conf_key: String,

        /// Value returned when both sources miss
        #[arg(short, long)]
        default: Option<String>,
    },

    /// Set a key in the section and save the file (the previous file is backed up)
    Set { key: String, value: String },

    /// List keys of the section
    List,

    /// List section names
    Sections,

    /// Print every section
    Dump,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CommentArg {
    /// `#`
    Hash,
    /// `//`
    Slashes,
}

impl From<CommentArg> for CommentDelimiter {
    fn from(arg: CommentArg) -> Self {
        match arg {
            CommentArg::Hash => CommentDelimiter::Hash,
            CommentArg::Slashes => CommentDelimiter::DoubleSlash,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
