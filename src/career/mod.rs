//! Career domain: profile model, classifier, stage graphs and route state.
//!
//! Everything here is pure (no rendering / IO).

pub mod classifier;
pub mod preview;
pub mod profile;
pub mod route_map;
pub mod stages;
