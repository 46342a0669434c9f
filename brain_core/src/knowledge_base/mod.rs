//! Knowledge Base module - the brain's key→fact memory.
//!
//! The knowledge base consists of:
//! - **Store**: facts keyed by a lower-cased subject, last write wins
//! - **Extractor**: pattern-based fact mining for bulk text ingestion

mod extractor;
mod store;

pub use extractor::*;
pub use store::*;
