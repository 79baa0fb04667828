//! Response & Explainability Models (C9, §4.9): assembles the
//! user-facing `ResponseModel` and its `what_im_using` explainability
//! chips from a built snapshot and routed next step.

mod chips;
mod model;
mod templates;

pub use chips::{format_used_factors_for_ui, Chip};
pub use model::{build_response_model, mode_for, NextStep, ResponseModel, WhatImUsing};
pub use templates::{next_step_template, title_for, NextStepTemplate, NEXT_STEP_HEADING};
