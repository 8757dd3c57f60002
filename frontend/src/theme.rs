/// Colors used by the components. Provided through context so nothing reads
/// styling from a global.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub primary: &'static str,
    pub success: &'static str,
    pub error: &'static str,
    pub text_muted: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#3f51b5",
            success: "#66bb6a",
            error: "#f44336",
            text_muted: "rgba(255,255,255,0.6)",
        }
    }
}

pub const DEFAULT_CATEGORY_COLOR: &str = "#757575";

const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("groceries", "#4CAF50"),
    ("food", "#4CAF50"),
    ("dining", "#2196F3"),
    ("transportation", "#FF9800"),
    ("shopping", "#F44336"),
    ("entertainment", "#9C27B0"),
    ("utilities", "#00BCD4"),
    ("healthcare", "#E91E63"),
    ("education", "#673AB7"),
    ("rent", "#009688"),
    ("fitness", "#8BC34A"),
];

impl Theme {
    /// Lower-cases only for the lookup; the category itself is never
    /// normalized.
    pub fn category_color(&self, category: &str) -> &'static str {
        let key = category.to_lowercase();
        CATEGORY_COLORS
            .iter()
            .find(|(name, _)| *name == key)
            .map(|(_, color)| *color)
            .unwrap_or(DEFAULT_CATEGORY_COLOR)
    }

    pub fn growth_color(&self, growth_percent: i64) -> &'static str {
        if growth_percent >= 0 {
            self.success
        } else {
            self.error
        }
    }
}
