use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use crate::format::Format;
use crate::read::parse::RawEntry;
use crate::rebuild::chunk::{ChunkIndex, split_chunk_path};

/// All chunks seen for one base path, ascending by chunk number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileGroup<'a> {
    base: &'a str,
    chunks: BTreeMap<ChunkIndex<'a>, &'a [u8]>,
    replaced: usize,
}

impl<'a> FileGroup<'a> {
    fn new(base: &'a str) -> Self {
        Self {
            base,
            chunks: BTreeMap::new(),
            replaced: 0,
        }
    }

    /// Last one wins when a chunk number repeats.
    fn insert(&mut self, index: ChunkIndex<'a>, content: &'a [u8]) {
        if self.chunks.insert(index, content).is_some() {
            self.replaced += 1;
            warn!(
                path = self.base,
                chunk = %index,
                "duplicate chunk number; keeping the later one"
            );
        }
    }

    pub fn base(&self) -> &'a str {
        self.base
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Number of chunks dropped because a later one reused their number.
    pub fn replaced(&self) -> usize {
        self.replaced
    }

    pub fn indices(&self) -> impl Iterator<Item = ChunkIndex<'a>> + '_ {
        self.chunks.keys().copied()
    }

    pub fn contents(&self) -> impl Iterator<Item = &'a [u8]> + '_ {
        self.chunks.values().copied()
    }
}

/// Groups keyed by base path, iterated in first-seen order.
#[derive(Clone, Debug, Default)]
pub struct FileGroups<'a> {
    order: Vec<FileGroup<'a>>,
    by_base: HashMap<&'a str, usize>,
}

impl<'a> FileGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, entry: RawEntry<'a>, format: &Format) {
        let chunk = split_chunk_path(entry.path, format);
        let slot = match self.by_base.get(chunk.base) {
            Some(&i) => i,
            None => {
                self.order.push(FileGroup::new(chunk.base));
                self.by_base.insert(chunk.base, self.order.len() - 1);
                self.order.len() - 1
            }
        };
        self.order[slot].insert(chunk.index, entry.content);
    }

    pub fn get(&self, base: &str) -> Option<&FileGroup<'a>> {
        self.by_base.get(base).map(|&i| &self.order[i])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileGroup<'a>> {
        self.order.iter()
    }
}

impl<'a> IntoIterator for FileGroups<'a> {
    type Item = FileGroup<'a>;
    type IntoIter = std::vec::IntoIter<FileGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.order.into_iter()
    }
}

impl<'g, 'a> IntoIterator for &'g FileGroups<'a> {
    type Item = &'g FileGroup<'a>;
    type IntoIter = std::slice::Iter<'g, FileGroup<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub fn group<'a, I>(entries: I, format: &Format) -> FileGroups<'a>
where
    I: IntoIterator<Item = RawEntry<'a>>,
{
    let mut groups = FileGroups::new();
    for entry in entries {
        groups.insert(entry, format);
    }
    debug!(groups = groups.len(), "grouped entries");
    groups
}
