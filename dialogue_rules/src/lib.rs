//! # Dialogue Rules
//!
//! The "rule book" crate - contains the closed intent and emotion kinds, the
//! fixed vocabulary the classifier matches against, and the response template
//! sets. This crate holds no conversation state and does not contain any
//! pipeline logic.

pub mod config;
pub mod kinds;
pub mod templates;
pub mod vocabulary;

pub use config::*;
pub use kinds::*;
pub use templates::*;
pub use vocabulary::*;
