//! # Brain Core
//!
//! The "brain" of the Tinimsiz conversational agent. This crate reads the rule
//! book from `dialogue_rules`, understands incoming messages, keeps a small
//! key→fact knowledge store and a short working memory, and produces replies.
//!
//! ## Core Components
//!
//! - **understanding**: Intent, keyword, and emotion classification
//! - **knowledge_base**: Key→fact store and bulk fact extraction from text
//! - **working_memory**: Bounded log of recent exchanges
//! - **response_generator**: Intent-driven, template-based replies
//! - **brain**: The agent that runs the pipeline end to end
//! - **events**: Pipeline events for outside observers
//!
//! ## Design Philosophy
//!
//! - **Total**: No input makes the pipeline fail; weak input yields weak but valid output
//! - **Owned State**: Every brain owns its own store and memory; brains never share
//! - **Observable**: Stages report events to a sink instead of printing

pub mod brain;
pub mod events;
pub mod knowledge_base;
pub mod response_generator;
pub mod understanding;
pub mod working_memory;

pub use brain::*;
pub use events::*;
pub use knowledge_base::*;
pub use response_generator::*;
pub use understanding::*;
pub use working_memory::*;
