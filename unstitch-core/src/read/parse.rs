use crate::error::{Result, UnstitchError};
use crate::format::Format;

use regex::bytes::Regex;
use tracing::{debug, trace, warn};

/// One marker and the bytes that follow it, both borrowed from the archive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Path exactly as written after the marker, trimmed.
    pub path: &'a str,
    /// Raw content; need not be UTF-8.
    pub content: &'a [u8],
}

/// Compiled marker matcher for one [`Format`].
#[derive(Clone, Debug)]
pub struct Parser {
    marker_re: Regex,
}

/// Byte offsets of one marker line inside the archive.
struct MarkerHit<'a> {
    line_start: usize,
    body_start: usize,
    path: &'a str,
}

impl Parser {
    pub fn new(format: &Format) -> Result<Self> {
        format.validate()?;
        // Horizontal whitespace only: a bare marker must not capture the next line.
        // The path capture takes any bytes; UTF-8 is checked per marker.
        let pattern = format!(r"(?m)^{}[ \t]+((?-u:.)*)$", regex::escape(&format.marker));
        let marker_re = Regex::new(&pattern)
            .map_err(|e| UnstitchError::Config(format!("marker pattern: {e}")))?;
        Ok(Self { marker_re })
    }

    /// Split `archive` at marker lines.
    ///
    /// Never fails: text before the first marker is dropped, and markers with
    /// an empty or non-UTF-8 path produce no entry (they still end the
    /// previous entry). Content bytes are passed through untouched.
    pub fn parse<'a>(&self, archive: &'a [u8]) -> Vec<RawEntry<'a>> {
        let hits: Vec<MarkerHit<'a>> = self
            .marker_re
            .captures_iter(archive)
            .filter_map(|caps| {
                let line = caps.get(0)?;
                let raw_path = caps.get(1).map_or(&b""[..], |m| m.as_bytes());
                let path = match std::str::from_utf8(raw_path) {
                    Ok(path) => path.trim(),
                    Err(_) => {
                        warn!(offset = line.start(), "skipping marker with a non-UTF-8 path");
                        ""
                    }
                };
                let body_start = if archive[line.end()..].starts_with(b"\n") {
                    line.end() + 1
                } else {
                    line.end()
                };
                Some(MarkerHit {
                    line_start: line.start(),
                    body_start,
                    path,
                })
            })
            .collect();

        let mut entries = Vec::with_capacity(hits.len());
        for (i, hit) in hits.iter().enumerate() {
            if hit.path.is_empty() {
                debug!(offset = hit.line_start, "skipping marker without a path");
                continue;
            }
            let body_end = hits.get(i + 1).map_or(archive.len(), |next| next.line_start);
            trace!(path = hit.path, bytes = body_end - hit.body_start, "entry");
            entries.push(RawEntry {
                path: hit.path,
                content: &archive[hit.body_start..body_end],
            });
        }
        debug!(markers = hits.len(), entries = entries.len(), "parsed archive");
        entries
    }
}

/// Parse `archive` with a one-off [`Parser`].
///
/// Only an invalid `format` is an error; any archive bytes parse.
pub fn parse<'a>(archive: &'a [u8], format: &Format) -> Result<Vec<RawEntry<'a>>> {
    Ok(Parser::new(format)?.parse(archive))
}
