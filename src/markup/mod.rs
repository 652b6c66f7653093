//! BBCode lexical layer: entity escapes, the tag vocabulary, and the tag scanner.

mod escape;
pub mod scanner;
pub mod tags;

pub use escape::{escape, unescape};
pub use scanner::{scan, TagKind, TagMatch};
pub use tags::{ContentPolicy, Scope, Tag, Target};
