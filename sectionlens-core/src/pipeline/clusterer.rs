use crate::config::DetectionConfig;
use crate::types::{ElementRecord, ProvisionalSection};

/// Why the scan decided to start a new section at a given element.
///
/// The variants are evaluated independently and in this priority order; the
/// first one that fires wins. Keeping them as an enum (instead of one nested
/// conditional) lets each trigger be tested in isolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitTrigger {
    /// No section is currently open.
    FirstElement,
    /// Vertical gap above the wide-gap threshold.
    WideGap,
    /// Moderate vertical gap combined with horizontal-center divergence.
    DivergentColumn,
    /// Media presence flips between the open section and the element.
    MediaShift,
    /// The element's own styling reads as a separator (spacing, background,
    /// borders).
    StyleBreak,
}

impl SplitTrigger {
    /// Evaluate the ordered trigger set for one element against the currently
    /// open section. Returns the first trigger that fires, or `None` when the
    /// element should fold into the open section.
    ///
    /// StyleBreak only matters when a section is already open; FirstElement
    /// wins outright otherwise.
    pub fn evaluate(
        config: &DetectionConfig,
        current: Option<&ProvisionalSection>,
        element: &ElementRecord,
    ) -> Option<SplitTrigger> {
        let current = match current {
            None => return Some(SplitTrigger::FirstElement),
            Some(section) => section,
        };

        let clustering = &config.clustering;
        let gap = element.rect.top - current.bounds.bottom();

        if gap > clustering.wide_gap {
            return Some(SplitTrigger::WideGap);
        }

        if gap > clustering.moderate_gap {
            let current_center = current.bounds.left + current.bounds.width / 2.0;
            let element_center = element.rect.left + element.rect.width / 2.0;
            let horizontal_distance = (current_center - element_center).abs();
            let reference_width = element.rect.width.max(current.bounds.width);

            if horizontal_distance > reference_width * clustering.center_divergence_ratio {
                return Some(SplitTrigger::DivergentColumn);
            }
        }

        let element_has_media = element.has_media();
        if current.has_media() != element_has_media
            && (!element.text.trim().is_empty() || element_has_media)
        {
            return Some(SplitTrigger::MediaShift);
        }

        if is_separator_styled(config, element) {
            return Some(SplitTrigger::StyleBreak);
        }

        None
    }
}

/// Styling that suggests a section boundary: generous vertical spacing, a
/// non-transparent background, or a visible horizontal border.
pub fn is_separator_styled(config: &DetectionConfig, element: &ElementRecord) -> bool {
    let clustering = &config.clustering;
    let style = &element.style;

    style.margin_top > clustering.separator_spacing
        || style.margin_bottom > clustering.separator_spacing
        || style.padding_top > clustering.separator_spacing
        || style.padding_bottom > clustering.separator_spacing
        || !clustering
            .neutral_backgrounds
            .iter()
            .any(|neutral| neutral == &style.background_color)
        || style.border_top != clustering.no_border
        || style.border_bottom != clustering.no_border
}

/// Section Clusterer: one top-to-bottom scan over the filtered elements with
/// a single open section as lookback state.
pub struct SectionClusterer<'a> {
    config: &'a DetectionConfig,
}

impl<'a> SectionClusterer<'a> {
    pub fn new(config: &'a DetectionConfig) -> Self {
        Self { config }
    }

    /// Partition sorted significant elements into provisional sections.
    pub fn cluster(&self, elements: &[ElementRecord]) -> Vec<ProvisionalSection> {
        let mut sections: Vec<ProvisionalSection> = Vec::new();
        let mut current: Option<ProvisionalSection> = None;

        for element in elements {
            let trigger = SplitTrigger::evaluate(self.config, current.as_ref(), element);

            if trigger.is_some() {
                if let Some(section) = current.take() {
                    if self.keeps_frozen_section(&section) {
                        sections.push(section);
                    }
                    // Otherwise the section is discarded outright, members
                    // included.
                }
                current = Some(ProvisionalSection::open_from(sections.len() + 1, element));
            } else if let Some(section) = current.as_mut() {
                if self.is_substantial(element) && !section.members.contains(&element.markup) {
                    section.fold(element);
                }
            }
        }

        if let Some(section) = current {
            if self.keeps_frozen_section(&section) {
                sections.push(section);
            }
        }

        sections
    }

    /// Frozen sections survive only with substantial text or any media.
    /// Text length is counted in characters, not bytes.
    fn keeps_frozen_section(&self, section: &ProvisionalSection) -> bool {
        section.content.trim().chars().count() > self.config.clustering.min_section_text_len
            || section.has_media()
    }

    /// Per-element substantiality re-check applied on fold. Strict bounds,
    /// unlike the filter's inclusive ones.
    fn is_substantial(&self, element: &ElementRecord) -> bool {
        element.rect.width > self.config.significance.min_width
            && element.rect.height > self.config.significance.min_height
            && element.has_content()
    }
}
