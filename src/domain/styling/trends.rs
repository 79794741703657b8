//! Static trend snapshot served alongside recommendations.

use serde::{Deserialize, Serialize};

/// Current beauty and fashion trends, grouped by category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendsSnapshot {
    pub makeup: Vec<String>,
    pub skincare: Vec<String>,
    pub fashion: Vec<String>,
    pub accessories: Vec<String>,
}

impl TrendsSnapshot {
    /// The curated snapshot. Fixed until the list is next edited by hand.
    pub fn current() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            makeup: owned(&["Soft Matte Lips", "Glazed Highlighter", "Monochrome Blush"]),
            skincare: owned(&["Peptide Serums", "Ceramide Moisturizers", "SPF Tints"]),
            fashion: owned(&["Relaxed Tailoring", "Quiet Luxury Basics", "Utility Cargo"]),
            accessories: owned(&["Chunky Silver", "Micro Bags", "Sculptural Earrings"]),
        }
    }
}
