//! Property-based tests for parsing and reconstruction.
//!
//! - Rendering files without chunking and parsing them back is lossless
//! - Chunks whose boundaries carry no word or quote characters reassemble
//!   to their in-order concatenation, whatever order they arrive in
//! - Chunked rendering rebuilds exactly under the verbatim join

use proptest::prelude::*;
use std::collections::BTreeMap;

use crate::format::Format;
use crate::read::parse::{RawEntry, parse};
use crate::rebuild::join::JoinPolicy;
use crate::rebuild::rebuild;
use crate::write::render::render;

fn path_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9_]{0,7}(/[a-z][a-z0-9_]{0,7}){0,2}\\.(txt|rs|md)"
}

/// Newline-terminated lines that never start with the marker character.
fn text_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9 _.,;:(){}\"'=+-]{0,24}", 0..8)
        .prop_map(|lines| lines.into_iter().map(|l| l + "\n").collect())
}

proptest! {
    /// Unchunked render followed by parse returns the original mapping.
    #[test]
    fn render_then_parse_roundtrip(
        files in prop::collection::btree_map(path_strategy(), text_strategy(), 0..8)
    ) {
        let format = Format::default();
        let text = render(files.iter().map(|(p, c)| (p.as_str(), c.as_bytes())), &format, None);
        let parsed: BTreeMap<String, String> = parse(&text, &format)
            .unwrap()
            .into_iter()
            .map(|e| (e.path.to_string(), String::from_utf8_lossy(e.content).into_owned()))
            .collect();
        prop_assert_eq!(parsed, files);
    }

    /// Parsing keeps marker order even when paths arrive unsorted.
    #[test]
    fn parse_preserves_appearance_order(
        files in prop::collection::btree_map(path_strategy(), text_strategy(), 1..8)
            .prop_flat_map(|m| Just(m.into_iter().collect::<Vec<_>>()).prop_shuffle())
    ) {
        let format = Format::default();
        let text = render(files.iter().map(|(p, c)| (p.as_str(), c.as_bytes())), &format, None);
        let paths: Vec<String> = parse(&text, &format)
            .unwrap()
            .into_iter()
            .map(|e| e.path.to_string())
            .collect();
        let expected: Vec<String> = files.into_iter().map(|(p, _)| p).collect();
        prop_assert_eq!(paths, expected);
    }

    /// Punctuation-bounded chunks join verbatim in numeric order.
    #[test]
    fn chunk_reassembly_is_plain_concatenation(
        order in prop::collection::vec("[a-z ]{0,12}", 1..10)
            .prop_map(|bodies| bodies.into_iter().map(|b| format!("-{b};")).collect::<Vec<_>>())
            .prop_flat_map(|chunks| {
                let n = chunks.len();
                (Just(chunks), Just((0..n).collect::<Vec<_>>()).prop_shuffle())
            })
    ) {
        let (chunks, arrival) = order;
        let paths: Vec<String> = (0..chunks.len()).map(|i| format!("big.txt:part{i}")).collect();
        let entries: Vec<RawEntry<'_>> = arrival
            .iter()
            .map(|&i| RawEntry { path: &paths[i], content: chunks[i].as_bytes() })
            .collect();

        let files = rebuild(entries, &Format::default(), JoinPolicy::Trim);
        prop_assert_eq!(files.len(), 1);
        prop_assert_eq!(&files[0].path, "big.txt");
        prop_assert_eq!(files[0].chunks, chunks.len());
        let expected = chunks.concat();
        prop_assert_eq!(&files[0].content, expected.as_bytes());
    }

    /// Line-aligned chunks concatenate back to the original bytes.
    #[test]
    fn chunked_render_rebuilds_exactly(
        content in text_strategy(),
        limit in 1usize..40,
    ) {
        let format = Format::default();
        let text = render([("doc.txt", content.as_bytes())], &format, Some(limit));
        let files = rebuild(parse(&text, &format).unwrap(), &format, JoinPolicy::Verbatim);
        prop_assert_eq!(files.len(), 1);
        prop_assert_eq!(&files[0].content, content.as_bytes());
    }

    /// A path without a chunk suffix is always a chunk-0 singleton.
    #[test]
    fn unsuffixed_paths_are_singletons(path in path_strategy(), body in text_strategy()) {
        let format = Format::default();
        let files = rebuild([RawEntry { path: &path, content: body.as_bytes() }], &format, JoinPolicy::Trim);
        prop_assert_eq!(files.len(), 1);
        prop_assert_eq!(&files[0].path, &path);
        prop_assert_eq!(&files[0].content, body.as_bytes());
        prop_assert_eq!(files[0].chunks, 1);
    }
}
