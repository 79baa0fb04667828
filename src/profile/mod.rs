//! Profile Builder (C5, §4.5): confidence gating, TTL decay, per-code
//! merge, coverage counting, and top-constraint selection over the
//! candidate factor set.

mod builder;
mod ttl;

pub use builder::{build_profile, ProfileBuildOptions};
pub use ttl::factor_ttl;
