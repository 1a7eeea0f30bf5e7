use crossterm::style::Color;

/// Colors for terminal output
#[derive(Debug, Clone)]
pub struct Theme {
    /// Letters not on any word path
    pub letter: Color,
    /// Letter color on highlighted cells
    pub highlight_fg: Color,
    /// Background per placed word, cycled when there are more words
    pub palette: [Color; 8],
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            letter: Color::Rgb { r: 160, g: 165, b: 185 },
            highlight_fg: Color::White,
            palette: [
                Color::Rgb { r: 220, g: 40, b: 40 },   // red
                Color::Rgb { r: 40, g: 80, b: 220 },   // blue
                Color::Rgb { r: 30, g: 150, b: 50 },   // green
                Color::Rgb { r: 240, g: 140, b: 0 },   // orange
                Color::Rgb { r: 130, g: 50, b: 160 },  // purple
                Color::Rgb { r: 0, g: 170, b: 190 },   // cyan
                Color::Rgb { r: 210, g: 40, b: 180 },  // magenta
                Color::Rgb { r: 140, g: 80, b: 40 },   // brown
            ],
        }
    }

    /// Background for the word placed `idx`-th
    pub fn word_color(&self, idx: usize) -> Color {
        self.palette[idx % self.palette.len()]
    }
}
