use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub bar: Color,            // Idle sorting bars
    pub bar_highlight: Color,  // Bars under comparison or mutation
    pub visited: Color,        // Settled vertices
    pub frontier: Color,       // Path/tree vertices
    pub active: Color,         // Vertices being examined
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    bar: Color::Rgb(137, 180, 250),           // Blue bars at rest
    bar_highlight: Color::Rgb(249, 226, 175), // Yellow while touched
    visited: Color::Rgb(166, 227, 161),       // Green once settled
    frontier: Color::Rgb(137, 180, 250),      // Blue for the built path/tree
    active: Color::Rgb(249, 226, 175),        // Yellow under examination
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    status_bg: Color::Rgb(50, 50, 70),
};
