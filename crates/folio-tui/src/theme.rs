use ratatui::style::Color;

/// Runtime palette with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Surfaces
    pub bg: Color,
    pub card: Color,
    pub border: Color,
    pub selection: Color,

    // Text
    pub text: Color,
    pub muted: Color,

    // Semantic colors
    pub accent: Color,
    pub disabled: Color,
    pub success: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::violet::dark()
    }
}
