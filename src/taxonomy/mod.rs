//! Closed taxonomy data (C1): label tables, keyword/phrase tables, and
//! per-code detector definitions. Everything in this module is static
//! data — algorithms that consume it live in [`crate::classifier`] and
//! [`crate::extractor`].

mod copy;
mod detectors;
mod domain_tables;
mod normalize;

pub use copy::{
    bullet_copy, chip_group, chip_label, domain_label, what_matters_domain_rank, ChipGroup,
    NO_FACTORS_BULLET,
};
pub use detectors::{detector_for, DetectorSpec, KEYWORD_CONFIDENCE};
pub use domain_tables::{
    keywords, phrases, AMBIGUITY_MARKERS, CARE_KEYWORDS, SAFETY_RISK_KEYWORDS,
    SAFETY_RISK_PHRASES, SELF_HARM_KEYWORDS, SELF_HARM_PHRASES,
};
pub use normalize::{contains_phrase, contains_whole_word, count_whole_word, normalize};
