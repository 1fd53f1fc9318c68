use crate::config::DetectionConfig;
use crate::error::DetectError;
use crate::pipeline::{filter_significant, SectionBuilder, SectionClusterer, SectionMerger};
use crate::types::{ElementRecord, Section};

/// Front door of the detection core. Each call is self-contained: all
/// intermediate state lives on the stack of one invocation, so a single
/// detector can serve concurrent callers without locking.
pub struct SectionDetector {
    config: DetectionConfig,
}

impl Default for SectionDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionDetector {
    pub fn new() -> Self {
        Self {
            config: DetectionConfig::default(),
        }
    }

    pub fn with_config(config: DetectionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectionConfig {
        &self.config
    }

    /// Run the full pipeline: validate → filter → cluster → merge →
    /// classify/build. Input order does not matter; the filter re-sorts by
    /// top position. Empty input yields an empty list.
    pub fn detect_sections(
        &self,
        elements: Vec<ElementRecord>,
    ) -> Result<Vec<Section>, DetectError> {
        self.validate(&elements)?;

        let significant = filter_significant(&self.config.significance, elements);
        println!(
            "🔍 Clustering {} significant elements into sections",
            significant.len()
        );

        let clusterer = SectionClusterer::new(&self.config);
        let provisional = clusterer.cluster(&significant);

        let merger = SectionMerger::new(&self.config.merge);
        let merged = merger.merge_close_sections(provisional);

        let builder = SectionBuilder::new(&self.config.builder, &self.config.classifier);
        let sections = builder.build_sections(merged);

        println!("   ✅ Detected {} sections", sections.len());
        Ok(sections)
    }

    /// Fail fast on geometry the heuristics cannot compare. Silent defaults
    /// here would corrupt every gap computation downstream.
    fn validate(&self, elements: &[ElementRecord]) -> Result<(), DetectError> {
        for (index, element) in elements.iter().enumerate() {
            if !element.rect.is_finite() {
                return Err(DetectError::InvalidGeometry {
                    index,
                    detail: format!(
                        "non-finite rect (top: {}, left: {}, width: {}, height: {})",
                        element.rect.top, element.rect.left, element.rect.width, element.rect.height
                    ),
                });
            }
        }
        Ok(())
    }
}
