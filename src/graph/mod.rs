//! Graph construction and representation
//!
//! This module builds the weighted sentence-similarity graph that the
//! centrality algorithms run over.

pub mod builder;
pub mod csr;
pub mod similarity;
