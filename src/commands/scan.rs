use super::annotate_genes;
use crate::cli::ScanArgs;
use crate::gene::{GeneRecord, SegmentKind};
use crate::layout::PALETTE;
use crate::motif::load_motifs;
use crate::utils::{create_writer, read_fasta_records, read_motif_lines, Result};
use std::io::Write;
use std::path::Path;

pub fn scan(args: ScanArgs) -> Result<()> {
    let sequences = read_fasta_records(&args.fasta_path)?;
    if sequences.is_empty() {
        return Err(format!("No sequences found in {}", args.fasta_path.display()));
    }
    let motifs = load_motifs(&read_motif_lines(&args.motifs_path)?, PALETTE.len())?;
    let records = annotate_genes(sequences, &motifs, args.num_threads)?;

    let mut writer = create_writer(args.output_path.as_deref().map(Path::new))?;
    write_matches(&mut writer, &records)?;
    writer.flush().map_err(|e| e.to_string())?;

    let total: usize = records.iter().map(|r| r.matches.len()).sum();
    log::info!("Reported {} matches across {} genes", total, records.len());
    Ok(())
}

/// Tab-separated motif hits with 0-based half-open coordinates
pub fn write_matches<W: Write>(writer: &mut W, records: &[GeneRecord]) -> Result<()> {
    writeln!(writer, "#gene\tmotif\tstart\tend\tregion").map_err(|e| e.to_string())?;
    for record in records {
        for motif_match in &record.matches {
            let region = match record.segment_at(motif_match.start).map(|s| s.kind) {
                Some(SegmentKind::Exon) => "exon",
                Some(SegmentKind::Intron) => "intron",
                None => ".",
            };
            writeln!(
                writer,
                "{}\t{}\t{}\t{}\t{}",
                record.header(),
                motif_match.motif,
                motif_match.start,
                motif_match.end(),
                region
            )
            .map_err(|e| e.to_string())?;
        }
    }
    Ok(())
}
