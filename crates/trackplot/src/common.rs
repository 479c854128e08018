use usvg::Tree;

pub const DEFAULT_FONT_FAMILY: &str = "monospace";

pub fn prepare_svg_tree(svg_data: &[u8]) -> Result<Tree, String> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();
    let tree = usvg::Tree::from_data(svg_data, &options).map_err(|e| e.to_string())?;
    Ok(tree)
}
