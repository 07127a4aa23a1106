use serde::{Deserialize, Serialize};

/// Preview viewport selector. Purely cosmetic: it sizes the editor preview
/// container and is never serialized into the exported page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Desktop,
    Tablet,
    Mobile,
}

impl ViewMode {
    /// Maximum preview container width; `None` means full width.
    pub fn max_width(&self) -> Option<&'static str> {
        match self {
            ViewMode::Desktop => None,
            ViewMode::Tablet => Some("768px"),
            ViewMode::Mobile => Some("375px"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_widths() {
        assert_eq!(ViewMode::Desktop.max_width(), None);
        assert_eq!(ViewMode::Tablet.max_width(), Some("768px"));
        assert_eq!(ViewMode::Mobile.max_width(), Some("375px"));
    }

    #[test]
    fn test_view_mode_parses_lowercase() {
        let mode: ViewMode = serde_json::from_str("\"mobile\"").unwrap();
        assert_eq!(mode, ViewMode::Mobile);
    }
}
