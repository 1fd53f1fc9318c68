use crate::config::SignificanceConfig;
use crate::types::ElementRecord;

/// Significance Filter: drop decorative and near-empty elements, then order
/// the survivors top-to-bottom for the clustering scan.
///
/// Keep rules (all must pass):
/// - width >= min_width and height >= min_height
/// - carries text or media
/// - when text is the only signal, trimmed length >= min_text_len
///
/// The sort is stable: elements sharing a top coordinate keep input order.
pub fn filter_significant(
    config: &SignificanceConfig,
    elements: Vec<ElementRecord>,
) -> Vec<ElementRecord> {
    let mut significant: Vec<ElementRecord> = elements
        .into_iter()
        .filter(|element| {
            if element.rect.width < config.min_width || element.rect.height < config.min_height {
                return false;
            }
            if !element.has_content() {
                return false;
            }
            // Label-only wrappers: short text and nothing else to show.
            if element.text.trim().chars().count() < config.min_text_len && !element.has_media() {
                return false;
            }
            true
        })
        .collect();

    significant.sort_by(|a, b| a.rect.top.total_cmp(&b.rect.top));
    significant
}
