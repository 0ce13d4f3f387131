//! Result aggregation
//!
//! Bundles the matrices produced by the pipeline with their statistics and
//! metadata.

pub mod result;
