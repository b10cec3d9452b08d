//! Core business logic - framework-agnostic section operations.

/// Section service and partial-update merging
pub mod section;

pub use section::{SectionPatch, SectionService};
