use ratatui::style::Color;

pub struct Theme {
    #[allow(dead_code)] // Background color field for future use
    pub bg: Color,
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar_default: Color,   // Unmarked bars
    pub bar_comparing: Color, // Bars under comparison
    pub bar_selected: Color,  // Bars just swapped/written
    pub bar_sorted: Color,    // Bars in final position
    pub bar_pivot: Color,     // Pivot/boundary anchor bars
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(50, 50, 70),   // Slightly lighter BG for status bar
    bar_default: Color::Rgb(137, 180, 250),    // Blue
    bar_comparing: Color::Rgb(249, 226, 175),  // Amber
    bar_selected: Color::Rgb(243, 139, 168),   // Rose
    bar_sorted: Color::Rgb(166, 227, 161),     // Green
    bar_pivot: Color::Rgb(203, 166, 247),      // Violet
};
