//! Core domain: shared math helpers used by locomotion and camera follow.

mod smoothing;

#[cfg(test)]
mod tests;

pub use smoothing::{smooth_damp, smooth_damp_vec3};
