use crate::common::DEFAULT_FONT_FAMILY;

pub type Color = String;

#[derive(Debug, Clone, PartialEq)]
pub enum Glyph {
    Label {
        xpos: u32,
        ypos: u32, // Text baseline
        text: String,
        color: Color,
    },
    HLine {
        xpos: u32,
        ypos: u32,
        width: u32,
        color: Color,
        stroke: f64,
    },
    Rect {
        xpos: u32,
        ypos: u32,
        width: u32,
        height: u32,
        color: Color,
        opacity: f64,
    },
}

#[derive(Debug, Default, PartialEq)]
pub struct Track {
    pub glyphs: Vec<Glyph>,
}

/// Vertical list of color swatches, one row per label
#[derive(Debug, PartialEq)]
pub struct Legend {
    pub xpos: u32,
    pub ypos: u32,
    pub row_height: u32,
    pub labels: Vec<(String, Color)>,
}

impl Legend {
    pub fn height(&self) -> u32 {
        self.row_height * self.labels.len() as u32
    }
}

#[derive(Debug, PartialEq)]
pub struct TrackPlot {
    pub width: u32,
    pub height: u32,
    pub tracks: Vec<Track>,
    pub legend: Legend,
    pub font_family: String,
}

impl TrackPlot {
    pub fn new(width: u32, height: u32, tracks: Vec<Track>, legend: Legend) -> Self {
        Self {
            width,
            height,
            tracks,
            legend,
            font_family: DEFAULT_FONT_FAMILY.to_string(),
        }
    }

    pub fn set_font_family(&mut self, font_family: &str) {
        self.font_family = font_family.to_string();
    }
}
