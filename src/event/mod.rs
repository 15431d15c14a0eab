//! Inbound notification events
//!
//! Events arrive as arbitrary JSON. Nothing about their shape is trusted:
//! every field access goes through [`path::lookup`], which answers `None`
//! instead of failing.

pub mod alert;
pub mod path;

pub use alert::{AlertEvent, DEFAULT_SUBJECT, SUBJECT_PATH};
pub use path::{lookup, JsonPath, PathSegment};
