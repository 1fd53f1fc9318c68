use crate::config::ClassifierConfig;
use crate::types::{Bounds, SectionType};

/// Assigns a semantic label to a clustered section from its content, final
/// bounds, and media flags. Pure: two sections with identical inputs always
/// classify identically.
pub struct SectionClassifier<'a> {
    config: &'a ClassifierConfig,
}

impl<'a> SectionClassifier<'a> {
    pub fn new(config: &'a ClassifierConfig) -> Self {
        Self { config }
    }

    /// First matching rule wins, evaluated in this exact order:
    /// header, footer, hero, content, sidebar, then the generic fallback.
    ///
    /// `content` is the full pre-truncation text of the section.
    pub fn classify(
        &self,
        content: &str,
        bounds: &Bounds,
        has_images: bool,
        has_videos: bool,
    ) -> SectionType {
        let text = content.to_lowercase();

        if bounds.top < self.config.header_max_top
            && self
                .config
                .header_keywords
                .iter()
                .any(|word| text.contains(word))
        {
            return SectionType::Header;
        }

        if self
            .config
            .footer_keywords
            .iter()
            .any(|word| text.contains(word))
        {
            return SectionType::Footer;
        }

        if bounds.height > self.config.hero_min_height && (has_images || has_videos) {
            return SectionType::Hero;
        }

        if content.chars().count() > self.config.content_min_len {
            return SectionType::Content;
        }

        if bounds.width < self.config.sidebar_max_width
            && bounds.height > self.config.sidebar_min_height
        {
            return SectionType::Sidebar;
        }

        SectionType::Section
    }
}
