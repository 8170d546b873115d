pub mod chunk;
pub mod group;
pub mod join;

use tracing::debug;

use crate::format::Format;
use crate::read::parse::RawEntry;
use group::group;
use join::{JoinPolicy, combine};

/// One logical file ready to be written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RebuiltFile {
    pub path: String,
    pub content: Vec<u8>,
    /// Number of distinct chunks the content was assembled from.
    pub chunks: usize,
}

/// Group `entries` by base path and join each group's chunks in order.
///
/// Output order is the first-seen order of each base path.
pub fn rebuild<'a, I>(entries: I, format: &Format, policy: JoinPolicy) -> Vec<RebuiltFile>
where
    I: IntoIterator<Item = RawEntry<'a>>,
{
    group(entries, format)
        .iter()
        .map(|g| {
            let content = combine(g.contents(), policy);
            debug!(path = g.base(), chunks = g.chunk_count(), bytes = content.len(), "rebuilt");
            RebuiltFile {
                path: g.base().to_string(),
                content,
                chunks: g.chunk_count(),
            }
        })
        .collect()
}
