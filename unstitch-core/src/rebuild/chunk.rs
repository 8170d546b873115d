use std::cmp::Ordering;
use std::fmt;

use crate::format::Format;

/// A chunk number of any size, kept as its decimal digits.
///
/// Leading zeros are dropped, so `007` and `7` are the same chunk. Ordering
/// is numeric: shorter digit runs first, then lexical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkIndex<'a>(&'a str);

impl<'a> ChunkIndex<'a> {
    pub const ZERO: ChunkIndex<'static> = ChunkIndex("0");

    /// `None` unless `digits` is a non-empty run of ASCII digits.
    pub fn parse(digits: &'a str) -> Option<Self> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        match digits.trim_start_matches('0') {
            "" => Some(ChunkIndex("0")),
            significant => Some(ChunkIndex(significant)),
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

impl Ord for ChunkIndex<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(other.0))
    }
}

impl PartialOrd for ChunkIndex<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ChunkIndex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A path split into its logical file and chunk number.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChunkPath<'a> {
    pub base: &'a str,
    pub index: ChunkIndex<'a>,
}

/// Split `path` at its last chunk tag.
///
/// `<base><tag><digits>` yields the base and the chunk number; anything else
/// (no tag, empty base, non-digit suffix) is chunk 0 of the literal path.
pub fn split_chunk_path<'a>(path: &'a str, format: &Format) -> ChunkPath<'a> {
    let whole = ChunkPath {
        base: path,
        index: ChunkIndex::ZERO,
    };
    let tag = format.chunk_tag.as_str();
    let Some(pos) = path.rfind(tag) else {
        return whole;
    };
    let (base, digits) = (&path[..pos], &path[pos + tag.len()..]);
    match ChunkIndex::parse(digits) {
        Some(index) if !base.is_empty() => ChunkPath { base, index },
        _ => whole,
    }
}
