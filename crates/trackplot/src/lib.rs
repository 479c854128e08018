/*!
This crate renders "track plots": one horizontal track per sequence, each made
of labels, lines, and (optionally translucent) rectangles placed in pixel
coordinates, followed by a legend of colored swatches. Glyphs are drawn in
the order they are listed, so callers control stacking by ordering them.
Track plots can be written as SVG, PNG, and PDF images.
*/

mod common;
mod image;
mod pdf;
mod png;
mod svg;
mod trackplot;

pub use common::DEFAULT_FONT_FAMILY;
pub use image::generate as generate_image;
pub use svg::generate_string as generate_svg;
pub use trackplot::{Color, Glyph, Legend, Track, TrackPlot};
