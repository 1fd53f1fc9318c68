use anyhow::Result;
use serde::{Deserialize, Serialize};

// The thresholds below form the detection policy table. The defaults are the
// calibrated values; a YAML override is a deliberate recalibration, not a
// tuning surface the pipeline reaches for on its own.

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DetectionConfig {
    #[serde(default)]
    pub significance: SignificanceConfig,
    #[serde(default)]
    pub clustering: ClusteringConfig,
    #[serde(default)]
    pub merge: MergeConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    #[serde(default)]
    pub builder: BuilderConfig,
}

/// Significance Filter thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignificanceConfig {
    /// Minimum element width in pixels.
    pub min_width: f64,
    /// Minimum element height in pixels.
    pub min_height: f64,
    /// Minimum trimmed text length (characters) when text is the element's
    /// only signal.
    pub min_text_len: usize,
}

impl Default for SignificanceConfig {
    fn default() -> Self {
        Self {
            min_width: 80.0,
            min_height: 40.0,
            min_text_len: 10,
        }
    }
}

/// Section Clusterer thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusteringConfig {
    /// Vertical gap above which a new section always starts.
    pub wide_gap: f64,
    /// Lower bound of the moderate-gap band that also checks horizontal divergence.
    pub moderate_gap: f64,
    /// Center distance ratio (of the wider box) that counts as divergence.
    pub center_divergence_ratio: f64,
    /// Margin/padding in pixels above which an element reads as a separator.
    pub separator_spacing: i32,
    /// Background values that do NOT indicate a separator. Exact computed-style
    /// strings as the browser reports them.
    pub neutral_backgrounds: Vec<String>,
    /// Computed border value meaning "no border".
    pub no_border: String,
    /// Minimum trimmed content length (characters) for a frozen section
    /// without media.
    pub min_section_text_len: usize,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            wide_gap: 100.0,
            moderate_gap: 50.0,
            center_divergence_ratio: 0.4,
            separator_spacing: 20,
            neutral_backgrounds: vec![
                "rgba(0, 0, 0, 0)".to_string(),
                "transparent".to_string(),
            ],
            no_border: "0px none".to_string(),
            min_section_text_len: 30,
        }
    }
}

/// Section Merger thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Sections closer than this (vertical gap in pixels) get fused.
    pub max_merge_gap: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            max_merge_gap: 30.0,
        }
    }
}

/// Section Classifier thresholds and keyword lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// A header must start above this viewport offset.
    pub header_max_top: f64,
    /// Keywords (lowercase) that mark navigation/header content.
    pub header_keywords: Vec<String>,
    /// Keywords (lowercase) that mark footer content.
    pub footer_keywords: Vec<String>,
    /// Minimum height for a hero section.
    pub hero_min_height: f64,
    /// Text length above which a section reads as main content.
    pub content_min_len: usize,
    /// Maximum width for a sidebar.
    pub sidebar_max_width: f64,
    /// Minimum height for a sidebar.
    pub sidebar_min_height: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            header_max_top: 200.0,
            header_keywords: vec![
                "menu".to_string(),
                "nav".to_string(),
                "header".to_string(),
                "navigation".to_string(),
            ],
            footer_keywords: vec![
                "footer".to_string(),
                "copyright".to_string(),
                "privacy".to_string(),
                "terms".to_string(),
            ],
            hero_min_height: 300.0,
            content_min_len: 100,
            sidebar_max_width: 300.0,
            sidebar_min_height: 500.0,
        }
    }
}

/// Section Entity Builder thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuilderConfig {
    /// Minimum final section height.
    pub min_height: f64,
    /// Minimum final section width.
    pub min_width: f64,
    /// Minimum trimmed content length (characters) for a section without
    /// media.
    pub min_content_len: usize,
    /// Output content is truncated to this many characters.
    pub content_max_len: usize,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            min_height: 30.0,
            min_width: 100.0,
            min_content_len: 10,
            content_max_len: 200,
        }
    }
}

impl DetectionConfig {
    /// Load config from a YAML file path.
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DetectionConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load config with fallback to the built-in policy table.
    pub fn load_with_fallback(path: Option<&str>) -> Self {
        match path {
            Some(p) => Self::load_from_file(p).unwrap_or_else(|_| {
                eprintln!("⚠️  Failed to load config from {}, using defaults", p);
                Self::default()
            }),
            None => Self::default(),
        }
    }
}
