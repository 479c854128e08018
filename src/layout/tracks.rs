use super::color::{palette_color, Color};
use crate::gene::{GeneRecord, SegmentKind};
use crate::motif::Motif;
use crate::utils::Result;
use itertools::Itertools;
use trackplot::{Glyph, Legend, Track, TrackPlot};

pub const LEFT_MARGIN: u32 = 25;
pub const EXON_HEIGHT: u32 = 30;
pub const MOTIF_HEIGHT: u32 = 30;
pub const PADDING: u32 = 50;
pub const LEGEND_MARGIN: u32 = 250;
pub const MIN_WIDTH: u32 = 500;
pub const MIN_HEIGHT: u32 = 200;
pub const MIN_TRACK_HEIGHT: u32 = 40;
pub const MAX_TRACK_HEIGHT: u32 = 10_000;
pub const MAX_BASE_WIDTH: u32 = 100;

const LABEL_GAP: u32 = 8;
const INTRON_STROKE: f64 = 2.0;
const EXON_OPACITY: f64 = 1.0;
const MOTIF_OPACITY: f64 = 0.6;
const LEGEND_GAP: u32 = 25;
const LEGEND_TOP: u32 = 20;
const LEGEND_ROW_HEIGHT: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutParams {
    pub track_height: u32,
    pub base_width: u32,
}

impl Default for LayoutParams {
    fn default() -> Self {
        LayoutParams {
            track_height: 100,
            base_width: 1,
        }
    }
}

impl LayoutParams {
    fn to_x(&self, pos: usize) -> u32 {
        LEFT_MARGIN + pos as u32 * self.base_width
    }

    fn to_width(&self, len: usize) -> u32 {
        len as u32 * self.base_width
    }
}

/// Fails if the track's right or bottom edge does not fit in u32 pixel coordinates
fn check_extent(len: usize, ordinal: usize, params: &LayoutParams) -> Result<()> {
    let right = (len as u64)
        .saturating_mul(params.base_width as u64)
        .saturating_add((LEFT_MARGIN + LEGEND_GAP + LEGEND_MARGIN) as u64);
    let bottom = (ordinal as u64)
        .saturating_mul(params.track_height as u64)
        .saturating_add(PADDING as u64);
    if right > u32::MAX as u64 || bottom > u32::MAX as u64 {
        return Err(format!(
            "Track {} ({} bp) does not fit in an image at {} px per base and {} px per track",
            ordinal, len, params.base_width, params.track_height
        ));
    }
    Ok(())
}

/// Glyphs for one gene, ordered label, introns, exons, motif boxes
pub fn layout_gene(record: &GeneRecord, params: &LayoutParams) -> Result<Track> {
    check_extent(record.len(), record.ordinal, params)?;
    let center = record.ordinal as u32 * params.track_height;
    let mut glyphs = Vec::new();

    glyphs.push(Glyph::Label {
        xpos: LEFT_MARGIN,
        ypos: center.saturating_sub(EXON_HEIGHT / 2 + LABEL_GAP),
        text: record.header().to_string(),
        color: Color::Black.to_string(),
    });

    for intron in record
        .segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Intron)
    {
        glyphs.push(Glyph::HLine {
            xpos: params.to_x(intron.start),
            ypos: center,
            width: params.to_width(intron.end - intron.start),
            color: Color::Black.to_string(),
            stroke: INTRON_STROKE,
        });
    }

    // Exon bounds are stored shifted inward, so draw from the full run
    for exon in record
        .segments
        .iter()
        .filter(|s| s.kind == SegmentKind::Exon)
    {
        let run = exon.run();
        glyphs.push(Glyph::Rect {
            xpos: params.to_x(run.start),
            ypos: center.saturating_sub(EXON_HEIGHT / 2),
            width: params.to_width(run.len()),
            height: EXON_HEIGHT,
            color: Color::Black.to_string(),
            opacity: EXON_OPACITY,
        });
    }

    for motif_match in &record.matches {
        glyphs.push(Glyph::Rect {
            xpos: params.to_x(motif_match.start),
            ypos: center.saturating_sub(MOTIF_HEIGHT / 2),
            width: params.to_width(motif_match.len),
            height: MOTIF_HEIGHT,
            color: palette_color(motif_match.color_index).to_string(),
            opacity: MOTIF_OPACITY,
        });
    }

    Ok(Track { glyphs })
}

/// Lays out all genes (already in input order) plus a motif legend in the right margin
pub fn layout_genes(
    records: &[GeneRecord],
    motifs: &[Motif],
    params: &LayoutParams,
) -> Result<TrackPlot> {
    let longest = records.iter().map(|r| r.len()).max().unwrap_or(0);
    check_extent(longest, records.len(), params)?;

    let tracks = records
        .iter()
        .map(|record| layout_gene(record, params))
        .collect::<Result<Vec<_>>>()?;

    let labels = motifs
        .iter()
        .map(|m| (m.text.clone(), palette_color(m.color_index).to_string()))
        .collect_vec();
    let legend = Legend {
        xpos: params.to_x(longest) + LEGEND_GAP,
        ypos: LEGEND_TOP,
        row_height: LEGEND_ROW_HEIGHT,
        labels,
    };

    let (width, height) = canvas_size(records.len(), longest, &legend, params)?;
    Ok(TrackPlot::new(width, height, tracks, legend))
}

fn canvas_size(
    gene_count: usize,
    longest: usize,
    legend: &Legend,
    params: &LayoutParams,
) -> Result<(u32, u32)> {
    let width = MIN_WIDTH.max(params.to_x(longest) + LEGEND_MARGIN);
    let legend_bottom = (legend.ypos as u64)
        .saturating_add((legend.row_height as u64).saturating_mul(legend.labels.len() as u64))
        .saturating_add(PADDING as u64);
    let height = u32::try_from(legend_bottom)
        .map_err(|_| format!("Legend with {} motifs does not fit in an image", legend.labels.len()))?
        .max(MIN_HEIGHT)
        .max(gene_count as u32 * params.track_height + PADDING);
    Ok((width, height))
}
