use crate::classifier::SectionClassifier;
use crate::config::{BuilderConfig, ClassifierConfig};
use crate::types::{ProvisionalSection, Section, SectionMetadata};

/// Section Entity Builder: final thresholds, classification, content
/// truncation, and id re-sequencing.
pub struct SectionBuilder<'a> {
    config: &'a BuilderConfig,
    classifier: SectionClassifier<'a>,
}

impl<'a> SectionBuilder<'a> {
    pub fn new(config: &'a BuilderConfig, classifier_config: &'a ClassifierConfig) -> Self {
        Self {
            config,
            classifier: SectionClassifier::new(classifier_config),
        }
    }

    /// Convert surviving provisional sections into output entities. Sections
    /// below the size/content floor are dropped; ids close the gaps so the
    /// output is always a contiguous 1..N sequence.
    pub fn build_sections(&self, provisional: Vec<ProvisionalSection>) -> Vec<Section> {
        let mut sections = Vec::new();

        for section in provisional {
            if self.is_below_floor(&section) {
                continue;
            }

            // Classify on the full accumulated text, then truncate.
            let section_type = self.classifier.classify(
                &section.content,
                &section.bounds,
                section.has_images,
                section.has_videos,
            );
            let content: String = section
                .content
                .chars()
                .take(self.config.content_max_len)
                .collect();

            sections.push(Section {
                id: sections.len() + 1,
                section_type,
                content,
                metadata: SectionMetadata {
                    has_images: section.has_images,
                    has_videos: section.has_videos,
                    element_count: section.members.len(),
                },
                elements: section.members,
                bounds: section.bounds,
            });
        }

        sections
    }

    fn is_below_floor(&self, section: &ProvisionalSection) -> bool {
        section.bounds.height < self.config.min_height
            || section.bounds.width < self.config.min_width
            || (section.content.trim().chars().count() < self.config.min_content_len
                && !section.has_media())
    }
}
