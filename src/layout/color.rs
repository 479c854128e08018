use std::fmt;

/// Motif colors, assigned by motif ordinal modulo the palette length
pub const PALETTE: [Color; 10] = [
    Color::Blue,
    Color::Purple,
    Color::Orange,
    Color::Pink,
    Color::Yellow,
    Color::Green,
    Color::Red,
    Color::Khaki,
    Color::PaleRed,
    Color::PaleBlue,
];

pub fn palette_color(color_index: usize) -> Color {
    PALETTE[color_index % PALETTE.len()].clone()
}

#[derive(Debug, PartialEq, Clone)]
pub enum Color {
    Purple,
    Blue,
    Orange,
    Black,
    Green,
    Pink,
    Yellow,
    Red,
    Khaki,
    PaleRed,
    PaleBlue,
}

impl fmt::Display for Color {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Color::Purple => write!(formatter, "#814ED1"),
            Color::Blue => write!(formatter, "#1383C6"),
            Color::Orange => write!(formatter, "#E16A2C"),
            Color::Black => write!(formatter, "#000000"),
            Color::Pink => write!(formatter, "#ED3981"),
            Color::Yellow => write!(formatter, "#EFCD17"),
            Color::Green => write!(formatter, "#009D4E"),
            Color::Red => write!(formatter, "#E3371E"),
            Color::Khaki => write!(formatter, "#F0E68C"),
            Color::PaleRed => write!(formatter, "#FF4858"),
            Color::PaleBlue => write!(formatter, "#46B2E8"),
        }
    }
}
