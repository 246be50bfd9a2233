#![no_main]

use hs2_routing::{parent_section_of, resolve_href, StructurePath};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let raw = String::from_utf8_lossy(data);
    let (tag, id) = raw.split_once('\n').unwrap_or((raw.as_ref(), "fuzz-id"));
    if id.is_empty() {
        return;
    }

    let href = resolve_href(tag, id);
    assert!(href.starts_with('/'));
    assert!(href.ends_with(id));
    assert!(!parent_section_of(tag).is_empty());

    let segments = href.trim_start_matches('/').split('/').collect::<Vec<_>>();
    if segments.len() > 2 {
        let _ = StructurePath::parse(segments[1], &segments[2..]);
    }
});
