//! Summarization pipeline
//!
//! [`runner::Summarizer`] drives a document through segmentation, topic
//! extraction, graph construction, ranking, cleaning, and structuring.
//! [`observer`] exposes hooks at stage boundaries and [`validation`] checks
//! configurations before they are used.

pub mod observer;
pub mod runner;
pub mod validation;
