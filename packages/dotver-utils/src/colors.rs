use colored::{Color, Colorize};

/// Kind of value being printed, which decides its terminal color.
pub enum DataType {
    Number,
    Boolean,
}

impl DataType {
    pub fn colorize(&self, value: &str) -> String {
        let color = match self {
            DataType::Number => Color::TrueColor { r: 255, g: 215, b: 0 },
            DataType::Boolean => Color::TrueColor { r: 250, g: 160, b: 35 },
        };

        value.color(color).to_string()
    }
}
