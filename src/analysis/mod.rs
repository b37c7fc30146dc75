//! Statistical analysis of generated walks

/// Monte-Carlo estimators for trapping, end-to-end distance and sampling cost
pub mod statistics;
