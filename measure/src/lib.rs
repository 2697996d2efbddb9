mod common;
pub mod annotation;
pub mod annotator;
pub mod batch;
pub mod config;
pub mod measurement;
pub mod report;
pub mod unit;

pub use batch::{start, BatchSummary};
