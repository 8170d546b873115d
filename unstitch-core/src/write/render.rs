use crate::format::Format;

/// Serialize `files` into archive bytes.
///
/// With `chunk_bytes` set, a file whose content is longer than that many
/// bytes is emitted as numbered chunks. Chunks are cut after a line break so
/// that every marker still starts a line; a single line longer than the limit
/// becomes a chunk of its own. Parsing and rebuilding such output with
/// [`JoinPolicy::Verbatim`](crate::rebuild::join::JoinPolicy::Verbatim)
/// gives back the original content.
///
/// A line break is appended to content that does not already end with one
/// whenever another marker follows it.
pub fn render<'a, I>(files: I, format: &Format, chunk_bytes: Option<usize>) -> Vec<u8>
where
    I: IntoIterator<Item = (&'a str, &'a [u8])>,
{
    let mut out = Vec::new();
    for (path, content) in files {
        let pieces = match chunk_bytes {
            Some(limit) if limit > 0 && content.len() > limit => split_lines(content, limit),
            _ => vec![content],
        };
        if pieces.len() == 1 {
            push_entry(&mut out, format, path, content);
        } else {
            for (i, piece) in pieces.into_iter().enumerate() {
                let chunk_path = format!("{path}{}{i}", format.chunk_tag);
                push_entry(&mut out, format, &chunk_path, piece);
            }
        }
    }
    out
}

fn push_entry(out: &mut Vec<u8>, format: &Format, path: &str, content: &[u8]) {
    if !out.is_empty() && !out.ends_with(b"\n") {
        out.push(b'\n');
    }
    out.extend_from_slice(format.marker.as_bytes());
    out.push(b' ');
    out.extend_from_slice(path.as_bytes());
    out.push(b'\n');
    out.extend_from_slice(content);
}

/// Cut `content` into runs of whole lines of at most `limit` bytes.
fn split_lines(content: &[u8], limit: usize) -> Vec<&[u8]> {
    let mut pieces = Vec::new();
    let (mut start, mut end) = (0, 0);
    for line in content.split_inclusive(|&b| b == b'\n') {
        if end > start && end - start + line.len() > limit {
            pieces.push(&content[start..end]);
            start = end;
        }
        end += line.len();
    }
    if start < content.len() {
        pieces.push(&content[start..]);
    }
    pieces
}
