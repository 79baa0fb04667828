//! Domain Classifier (C3, §4.3): maps free text to a primary domain
//! plus up to two secondary tags.

mod classify;
mod domain_result;

pub use classify::classify;
pub use domain_result::{DomainResult, DomainTag};
