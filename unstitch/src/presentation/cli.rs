use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use unstitch_core::JoinPolicy;
use unstitch_core::format::{DEFAULT_CHUNK_TAG, DEFAULT_MARKER};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Rebuild files from a marker-delimited text archive",
    long_about = None
)]
pub struct Cli {
    /// Archive to unpack
    pub archive: PathBuf,

    /// Directory to write into (defaults to the working directory)
    #[arg(short = 'C', long, default_value = ".")]
    pub dest: PathBuf,

    /// Literal that starts every marker line
    #[arg(long, default_value = DEFAULT_MARKER, allow_hyphen_values = true)]
    pub marker: String,

    /// Suffix between a file path and its chunk number
    #[arg(long = "chunk-tag", default_value = DEFAULT_CHUNK_TAG, allow_hyphen_values = true)]
    pub chunk_tag: String,

    /// How to glue chunks of one file back together
    #[arg(long, value_enum, default_value_t = JoinArg::Trim)]
    pub join: JoinArg,

    /// Parallel writers (0 = one per CPU)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Show what would be written without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum JoinArg {
    /// Repair tokens and string literals split across chunks
    Trim,
    /// Concatenate chunks exactly as stored
    Verbatim,
}

impl From<JoinArg> for JoinPolicy {
    fn from(arg: JoinArg) -> Self {
        match arg {
            JoinArg::Trim => JoinPolicy::Trim,
            JoinArg::Verbatim => JoinPolicy::Verbatim,
        }
    }
}
