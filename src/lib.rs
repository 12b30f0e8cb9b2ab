// Tue Jan 15 2026 - Alex

pub mod config;
pub mod layout;
pub mod utils;

pub use config::InferenceConfig;
pub use layout::{infer_type, AccessPattern, LayoutError, Member, RecoveredType, TypeInference};
