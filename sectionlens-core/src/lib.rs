// Sectionlens Core Library
//
// Detects human-perceivable sections of a rendered web page from geometric
// and stylistic signals alone: bounding boxes, computed-style summaries, and
// media presence. Consumes element records produced by an external page
// renderer; produces classified Section entities.

pub mod classifier;
pub mod config;
pub mod detector;
pub mod error;
pub mod pipeline;
pub mod types;

// Re-export main types and functions for easy use
pub use classifier::SectionClassifier;
pub use config::DetectionConfig;
pub use detector::SectionDetector;
pub use error::DetectError;
pub use types::*;
