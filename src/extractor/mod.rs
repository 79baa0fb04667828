//! Factor Extractor (C4, §4.4): turns normalized text plus the
//! turn's allowed-domain set into gated [`crate::model::Factor`]
//! values and, at most, one [`crate::model::MissingInfo`] request.

mod duration;
mod extract;
mod safety;

pub use duration::{detect_durations, DurationDetection};
pub use extract::{extract, ExtractionResult};
pub use safety::{detect_safety, SafetyDetection};
