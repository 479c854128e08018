use super::annotate_genes;
use crate::cli::PlotArgs;
use crate::layout::{layout_genes, LayoutParams, PALETTE};
use crate::motif::load_motifs;
use crate::utils::{read_fasta_records, read_motif_lines, Result};
use std::path::{Path, PathBuf};
use trackplot::generate_image;

pub fn motifmark(args: PlotArgs) -> Result<()> {
    let sequences = read_fasta_records(&args.fasta_path)?;
    if sequences.is_empty() {
        return Err(format!("No sequences found in {}", args.fasta_path.display()));
    }
    let motifs = load_motifs(&read_motif_lines(&args.motifs_path)?, PALETTE.len())?;
    log::info!(
        "Loaded {} sequences and {} motifs",
        sequences.len(),
        motifs.len()
    );

    let records = annotate_genes(sequences, &motifs, args.num_threads)?;
    let params = LayoutParams {
        track_height: args.track_height,
        base_width: args.base_width,
    };
    let mut plot = layout_genes(&records, &motifs, &params)?;
    if let Some(font_family) = args.font_family {
        plot.set_font_family(&font_family);
    }

    let output_path = match args.output_path {
        Some(path) => PathBuf::from(path),
        None => default_image_path(&args.fasta_path),
    };
    generate_image(&plot, &output_path)?;
    log::info!("Image written to {}", output_path.display());
    Ok(())
}

fn default_image_path(fasta_path: &Path) -> PathBuf {
    fasta_path.with_extension("png")
}
