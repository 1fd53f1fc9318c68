// Presentation helpers shared by the sectionlens CLI and HTTP API:
// HTML reconstruction from section members and report rendering.

use std::collections::HashMap;

use sectionlens_core::Section;
use serde_json::json;

/// Reconstruct a section's HTML: a labeled container wrapping the member
/// markup verbatim, newline-joined.
pub fn section_html(section: &Section) -> String {
    if section.elements.is_empty() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(section.elements.len() + 2);
    parts.push(format!(
        "<div class=\"section section-{}\" data-section-id=\"{}\">",
        section.section_type, section.id
    ));
    parts.extend(section.elements.iter().cloned());
    parts.push("</div>".to_string());
    parts.join("\n")
}

/// Reconstruct a section's HTML with two-space indentation, for saved files.
/// Indentation tracks opening tags per markup string, not per nested tag.
pub fn section_clean_html(section: &Section) -> String {
    if section.elements.is_empty() {
        return String::new();
    }

    let mut parts = Vec::with_capacity(section.elements.len() + 2);
    parts.push(format!(
        "<div class=\"section section-{}\" data-section-id=\"{}\">",
        section.section_type, section.id
    ));
    parts.extend(section.elements.iter().cloned());
    parts.push("</div>".to_string());

    let mut formatted = Vec::with_capacity(parts.len());
    let mut indent_level: i32 = 0;

    for part in &parts {
        let trimmed = part.trim();
        if trimmed.starts_with("</") {
            indent_level -= 1;
        }

        let indent = "  ".repeat(indent_level.max(0) as usize);
        formatted.push(format!("{indent}{trimmed}"));

        if trimmed.starts_with('<') && !trimmed.starts_with("</") && !trimmed.ends_with("/>") {
            indent_level += 1;
        }
    }

    formatted.join("\n")
}

/// Serialize sections the way both the CLI JSON mode and the API respond:
/// the section fields plus the reconstructed wrapper HTML.
pub fn sections_to_json(sections: &[Section]) -> serde_json::Value {
    let section_values: Vec<serde_json::Value> = sections
        .iter()
        .map(|section| {
            json!({
                "id": section.id,
                "type": section.section_type,
                "content": section.content,
                "bounds": section.bounds,
                "metadata": section.metadata,
                "html": section_html(section),
            })
        })
        .collect();

    json!({
        "sections": section_values,
        "total_sections": sections.len(),
    })
}

/// Render the human-readable report: one block per section plus a
/// type-count summary.
pub fn render_text_report(sections: &[Section]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Found {} sections:\n\n", sections.len()));

    for section in sections {
        let preview: String = section.content.chars().take(100).collect();
        out.push_str(&format!(
            "   Section {} ({}):\n",
            section.id, section.section_type
        ));
        out.push_str(&format!("   Content: {preview}...\n"));
        out.push_str(&format!(
            "   Layout: {:.0}x{:.0} at ({:.0}, {:.0})\n",
            section.bounds.width, section.bounds.height, section.bounds.left, section.bounds.top
        ));
        out.push_str(&format!(
            "   Elements: {}\n",
            section.metadata.element_count
        ));
        out.push_str(&format!(
            "   Images: {}\n",
            if section.metadata.has_images { "Yes" } else { "No" }
        ));
        out.push_str(&format!(
            "   Videos: {}\n\n",
            if section.metadata.has_videos { "Yes" } else { "No" }
        ));
    }

    let mut type_counts: HashMap<&'static str, usize> = HashMap::new();
    for section in sections {
        *type_counts.entry(section.section_type.label()).or_insert(0) += 1;
    }

    out.push_str("Summary:\n");
    let mut counts: Vec<_> = type_counts.into_iter().collect();
    counts.sort();
    for (section_type, count) in counts {
        out.push_str(&format!("   {section_type}: {count}\n"));
    }

    out
}
