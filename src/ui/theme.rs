use ratatui::style::Color;

pub struct Theme {
    pub bg: Color,
    pub fg: Color,
    pub title: Color,
    pub comment: Color,   // Grey
    pub container: Color, // Grey outline of the open-top container
    pub message: Color,
    pub prompt_title: Color, // Yellow
    pub slot_border: Color,
    pub slot_label: Color,
    pub slot_palette: [Color; 5],
}

impl Theme {
    /// Color of a slot; follows the position, not the value stored in it
    pub fn slot_color(&self, slot: usize) -> Color {
        self.slot_palette[slot % self.slot_palette.len()]
    }
}

pub const DEFAULT_THEME: Theme = Theme {
    bg: Color::Rgb(30, 30, 46),
    fg: Color::Rgb(205, 214, 244),
    title: Color::Rgb(205, 214, 244),
    comment: Color::Rgb(108, 112, 134),
    container: Color::Rgb(147, 153, 178),
    message: Color::Rgb(205, 214, 244),
    prompt_title: Color::Rgb(249, 226, 175),
    slot_border: Color::Rgb(255, 255, 255),
    slot_label: Color::Rgb(30, 30, 46),
    slot_palette: [
        Color::Rgb(243, 139, 168), // Light red
        Color::Rgb(166, 227, 161), // Light green
        Color::Rgb(137, 180, 250), // Light blue
        Color::Rgb(249, 226, 175), // Yellow
        Color::Rgb(245, 194, 231), // Light magenta
    ],
};
