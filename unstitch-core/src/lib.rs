#![forbid(unsafe_code)]

//! Rebuild the files packed into a marker-delimited text archive.
//!
//! An archive is a byte stream where each file starts with a marker line
//! (file contents themselves need not be UTF-8):
//!
//! ```text
//! >>>> src/main.rs
//! fn main() {}
//! >>>> README.md:part0
//! # Title
//! >>>> README.md:part1
//! More text.
//! ```
//!
//! [`read::parse`] splits the archive into raw entries, [`rebuild::rebuild`]
//! groups `:partN` chunks back into whole files and [`extract()`] writes them
//! below a destination directory.

pub mod error;
pub mod format;

pub mod read {
    pub mod parse;
}

pub mod rebuild;

pub mod write {
    pub mod render;
}

pub mod extract;

#[cfg(test)]
mod proptests;

// Re-exports: stable API surface
pub use extract::{ExtractOptions, ExtractReport, FileOutcome, extract, extract_file};
pub use format::Format;
pub use read::parse::{Parser, RawEntry, parse};
pub use rebuild::join::JoinPolicy;
pub use rebuild::{RebuiltFile, rebuild};
pub use write::render::render;
