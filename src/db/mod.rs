//! Storage layer - repositories that translate calls into SQL statements.

/// Section repository over the `sections` table
pub mod sections;

pub use sections::SectionRepository;
