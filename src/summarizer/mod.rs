//! Summarization components
//!
//! Sentence ranking over similarity graphs, frequency topics, sentence
//! cleanup, and the structured layout built from them.

pub mod cleaner;
pub mod ranker;
pub mod structurer;
pub mod topics;
