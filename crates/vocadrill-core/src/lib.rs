//! vocadrill-core — Core drill engine, word model, and scoring.
//!
//! This crate defines the fundamental data model, the blank-generation and
//! answer-validation engine, and the traits that word sources and feedback
//! providers implement.

pub mod blanks;
pub mod drill;
pub mod error;
pub mod model;
pub mod parser;
pub mod report;
pub mod session;
pub mod statistics;
pub mod traits;
