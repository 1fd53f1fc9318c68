pub mod builder;
pub mod clusterer;
pub mod filter;
pub mod merger;

pub use builder::SectionBuilder;
pub use clusterer::{SectionClusterer, SplitTrigger};
pub use filter::filter_significant;
pub use merger::SectionMerger;
