//! Document model types for rich-text content representation.
//!
//! This module defines the Delta-style document that bridges BBCode
//! decoding and encoding: an ordered list of lines, each carrying
//! line-level attributes and an ordered list of formatted runs.

mod attributes;
mod document;
mod run;

pub use attributes::{Alignment, AttrValue, Attributes, InlineAttr, LineAttr, LineAttributes};
pub use document::{Document, Line, RunGroup};
pub use run::{Embed, Insert, Run};
