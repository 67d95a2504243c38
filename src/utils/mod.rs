pub mod processing;

pub use processing::{FileReport, ProcessingManager, ProcessingMode, StemSummary, StemmedToken};
