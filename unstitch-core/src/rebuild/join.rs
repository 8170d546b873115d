/// Bytes inspected on each side of a chunk boundary.
pub const BOUNDARY_WINDOW: usize = 10;

/// How adjacent chunks of one file are glued together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum JoinPolicy {
    /// Drop boundary whitespace when the boundary looks like a split token
    /// or string literal; otherwise concatenate as-is.
    #[default]
    Trim,
    /// Always concatenate as-is.
    Verbatim,
}

/// Concatenate `chunks` (already in chunk order) under `policy`.
pub fn combine<'a, I>(chunks: I, policy: JoinPolicy) -> Vec<u8>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    let mut out = Vec::new();
    let mut prev: Option<&[u8]> = None;
    for chunk in chunks {
        let tighten =
            policy == JoinPolicy::Trim && prev.is_some_and(|p| should_tighten(p, chunk));
        if tighten {
            // `prev` has non-whitespace bytes, so this only strips its own tail.
            out.truncate(out.trim_ascii_end().len());
            out.extend_from_slice(chunk.trim_ascii_start());
        } else {
            out.extend_from_slice(chunk);
        }
        prev = Some(chunk);
    }
    out
}

/// Decide whether the whitespace between `prev` and `next` should go.
///
/// One line break ending `prev` is the separator the archive puts before
/// the next marker and does not count. Any other line break in the gap
/// keeps the boundary as-is. Otherwise the boundary is tightened when it
/// joins two word characters, two quotes, or sits inside a quoted string.
pub fn should_tighten(prev: &[u8], next: &[u8]) -> bool {
    let body = strip_separator(prev);
    let prev_core = body.trim_ascii_end();
    let next_core = next.trim_ascii_start();
    let gap_before = &body[prev_core.len()..];
    let gap_after = &next[..next.len() - next_core.len()];
    if has_line_break(gap_before) || has_line_break(gap_after) {
        return false;
    }

    let tail = &prev_core[prev_core.len().saturating_sub(BOUNDARY_WINDOW)..];
    let head = &next_core[..next_core.len().min(BOUNDARY_WINDOW)];
    let (Some(&last), Some(&first)) = (tail.last(), head.first()) else {
        return false;
    };

    let split_token = is_word(last) && is_word(first);
    let adjacent_quotes = is_quote(last) && is_quote(first);
    // The last quote in `tail` is followed by non-quotes only, and the first
    // quote in `head` is preceded by non-quotes only.
    let inside_literal = tail.iter().any(|&b| is_quote(b)) && head.iter().any(|&b| is_quote(b));

    split_token || adjacent_quotes || inside_literal
}

fn strip_separator(chunk: &[u8]) -> &[u8] {
    chunk
        .strip_suffix(b"\r\n")
        .or_else(|| chunk.strip_suffix(b"\n"))
        .unwrap_or(chunk)
}

fn has_line_break(gap: &[u8]) -> bool {
    gap.iter().any(|&b| b == b'\n' || b == b'\r')
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

fn is_quote(b: u8) -> bool {
    b == b'"' || b == b'\''
}
