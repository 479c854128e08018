mod color;
mod tracks;

pub use color::{palette_color, Color, PALETTE};
pub use tracks::{
    layout_gene, layout_genes, LayoutParams, MAX_BASE_WIDTH, MAX_TRACK_HEIGHT,
    MIN_TRACK_HEIGHT,
};
