//! # dbperf
//!
//! Grouped bar charts comparing the latency of MySQL, MongoDB, and
//! Elasticsearch for a set of benchmarked user operations.

pub mod cli;
pub mod env;
pub mod tasks;
