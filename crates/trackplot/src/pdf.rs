use crate::common::prepare_svg_tree;
use std::path::Path;
use svg2pdf::{ConversionOptions, PageOptions};

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    let tree = prepare_svg_tree(svg_content.as_bytes())?;
    let pdf = svg2pdf::to_pdf(&tree, ConversionOptions::default(), PageOptions::default())
        .map_err(|e| e.to_string())?;
    std::fs::write(path, pdf).map_err(|e| e.to_string())
}
