//! Natural Language Processing components
//!
//! This module provides the shared linguistic resource cache, stopword
//! filtering, and sentence/word tokenization.

pub mod resources;
pub mod stopwords;
pub mod tokenizer;
