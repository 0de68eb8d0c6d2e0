//! Analysis - classifying domain scores into weak and strong points.

mod highlights;

pub use highlights::{extract_strong_points, extract_weak_points};
