//! Phase annotations embedded in source text.
//!
//! Lines carrying `@phase:`, `@task:` or `@weight:` are collected into a
//! [`TagSet`]; each tag value can then be compressed into a `"<kind>_<digit>"`
//! key for lookup by weight.

pub mod compressed_map;
pub mod extractor;
pub mod types;

pub use compressed_map::{build_compressed_map, CompressedTag, CompressedTagMap};
pub use extractor::{extract_tags, TAG_MARKERS};
pub use types::{TagKind, TagSet};
