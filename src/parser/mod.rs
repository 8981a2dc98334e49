//! XML reader
//!
//! Turns the textual OpenMath document into a tree of [`Element`]s, built from
//! the events of a `quick_xml` reader. Declarations, comments, processing
//! instructions and the DOCTYPE are skipped.

pub mod items;
pub mod reader;

pub use reader::parse;
pub use items::{Document, Element};
