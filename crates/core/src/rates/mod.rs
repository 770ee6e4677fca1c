//! Rate configuration module - ROI ranges and engine-wide rate settings.

mod rate_model;

pub use rate_model::{AdminSplitConfig, RateConfig, RoiRange};
