use serde::{Deserialize, Serialize};

// ===== INPUT CONTRACT =====
// These types mirror what the page-introspection collaborator emits per
// visible element. Field names on the wire are camelCase. Required fields
// stay required: a missing field is a contract violation and must fail
// deserialization instead of being defaulted away (defaults would corrupt
// the geometric comparisons downstream).

/// One rendered element as measured in the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementRecord {
    /// Lowercase element name (e.g. "div", "nav").
    pub tag: String,
    /// Trimmed visible text content of the subtree.
    pub text: String,
    /// Serialized outer markup, reproduced verbatim in output.
    pub markup: String,
    pub rect: Rect,
    pub style: StyleSummary,
    /// True if the subtree contains an image.
    pub has_images: bool,
    /// True if the subtree contains a video or embedded frame.
    pub has_videos: bool,
}

impl ElementRecord {
    /// An element counts as carrying content when it has visible text or media.
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty() || self.has_images || self.has_videos
    }

    pub fn has_media(&self) -> bool {
        self.has_images || self.has_videos
    }
}

/// Viewport-relative geometry. Values may be fractional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub bottom: f64,
    pub right: f64,
}

impl Rect {
    /// All six coordinates must be finite for gap arithmetic to be meaningful.
    pub fn is_finite(&self) -> bool {
        [
            self.top,
            self.left,
            self.width,
            self.height,
            self.bottom,
            self.right,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Computed-style summary. Margin/padding arrive as integer pixel values;
/// the remaining fields are raw computed-style strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSummary {
    pub background_color: String,
    pub margin_top: i32,
    pub margin_bottom: i32,
    pub padding_top: i32,
    pub padding_bottom: i32,
    pub border_top: String,
    pub border_bottom: String,
    pub display: String,
    pub visibility: String,
    pub position: String,
}

// ===== INTERNAL CLUSTERING STATE =====

/// Running bounding box of a cluster. Top/left take the minimum observed;
/// width/height recompute to cover the maximum right/bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Expand to cover an element rect. Top/left are updated first; the
    /// width/height recomputation uses the updated top/left.
    pub fn expand_to(&mut self, rect: &Rect) {
        self.top = self.top.min(rect.top);
        self.left = self.left.min(rect.left);
        self.width = self.width.max(rect.left + rect.width - self.left);
        self.height = self.height.max(rect.top + rect.height - self.top);
    }
}

/// An in-progress cluster of significant elements. Mutable while the
/// clusterer scans, frozen when handed to the merge pass.
#[derive(Debug, Clone)]
pub struct ProvisionalSection {
    /// 1-based creation order among kept sections.
    pub ordinal: usize,
    pub bounds: Bounds,
    /// Ordered member markup, de-duplicated within one cluster.
    pub members: Vec<String>,
    /// Space-joined trimmed text of all members.
    pub content: String,
    pub has_images: bool,
    pub has_videos: bool,
}

impl ProvisionalSection {
    /// Open a fresh section from its triggering element.
    pub fn open_from(ordinal: usize, element: &ElementRecord) -> Self {
        Self {
            ordinal,
            bounds: Bounds {
                top: element.rect.top,
                left: element.rect.left,
                width: element.rect.width,
                height: element.rect.height,
            },
            members: vec![element.markup.clone()],
            content: element.text.trim().to_string(),
            has_images: element.has_images,
            has_videos: element.has_videos,
        }
    }

    /// Fold an element into this section: expand bounds, append text with a
    /// leading space, OR-accumulate media flags, record the markup.
    pub fn fold(&mut self, element: &ElementRecord) {
        self.members.push(element.markup.clone());
        self.bounds.expand_to(&element.rect);

        let text = element.text.trim();
        if !text.is_empty() {
            self.content.push(' ');
            self.content.push_str(text);
        }
        self.has_images = self.has_images || element.has_images;
        self.has_videos = self.has_videos || element.has_videos;
    }

    pub fn has_media(&self) -> bool {
        self.has_images || self.has_videos
    }

    pub fn element_count(&self) -> usize {
        self.members.len()
    }
}

// ===== OUTPUT ENTITIES =====

/// Fixed classification labels. Serializes to the lowercase label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionType {
    Header,
    Footer,
    Hero,
    Content,
    Sidebar,
    Section,
}

impl SectionType {
    pub fn label(&self) -> &'static str {
        match self {
            SectionType::Header => "header",
            SectionType::Footer => "footer",
            SectionType::Hero => "hero",
            SectionType::Content => "content",
            SectionType::Sidebar => "sidebar",
            SectionType::Section => "section",
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMetadata {
    pub has_images: bool,
    pub has_videos: bool,
    pub element_count: usize,
}

/// A finalized detected section. Owns its markup strings; nothing in the
/// output references the collaborator's live DOM.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    /// 1-based sequential id, re-assigned after all filtering.
    pub id: usize,
    #[serde(rename = "type")]
    pub section_type: SectionType,
    /// First 200 characters of accumulated text.
    pub content: String,
    pub elements: Vec<String>,
    pub bounds: Bounds,
    pub metadata: SectionMetadata,
}
