use super::segment::{segment, Segment};
use crate::motif::{is_iupac_symbol, Motif};
use crate::utils::Result;

/// One FASTA record with its header line (without '>') and raw mixed-case bases
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence {
    pub header: String,
    pub bases: String,
}

impl Sequence {
    pub fn new(header: impl Into<String>, bases: impl Into<String>) -> Self {
        Sequence {
            header: header.into(),
            bases: bases.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MotifMatch {
    pub motif: String,
    pub start: usize,
    pub len: usize,
    pub color_index: usize,
}

impl MotifMatch {
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}

/// Fully annotated gene: segments and matches of every motif, in motif order
#[derive(Debug, Clone, PartialEq)]
pub struct GeneRecord {
    pub sequence: Sequence,
    pub ordinal: usize, // 1-based position among processed genes
    pub segments: Vec<Segment>,
    pub matches: Vec<MotifMatch>,
}

impl GeneRecord {
    pub fn build(sequence: Sequence, ordinal: usize, motifs: &[Motif]) -> Result<Self> {
        let segments = segment(&sequence.bases)
            .map_err(|e| format!("Gene {} (#{}): {}", sequence.header, ordinal, e))?;

        let unknown = sequence
            .bases
            .bytes()
            .filter(|base| !is_iupac_symbol(*base))
            .count();
        if unknown > 0 {
            log::warn!(
                "Gene {} has {} characters outside the IUPAC alphabet",
                sequence.header,
                unknown
            );
        }

        let mut matches = Vec::new();
        for motif in motifs {
            for start in motif.find_in(&sequence.bases) {
                matches.push(MotifMatch {
                    motif: motif.text.clone(),
                    start,
                    len: motif.len(),
                    color_index: motif.color_index,
                });
            }
        }

        log::debug!(
            "Gene {}: {} bp, {} segments, {} motif matches",
            sequence.header,
            sequence.bases.len(),
            segments.len(),
            matches.len()
        );

        Ok(GeneRecord {
            sequence,
            ordinal,
            segments,
            matches,
        })
    }

    pub fn header(&self) -> &str {
        &self.sequence.header
    }

    pub fn len(&self) -> usize {
        self.sequence.bases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.bases.is_empty()
    }

    /// Segment whose run covers `pos`, if any
    pub fn segment_at(&self, pos: usize) -> Option<&Segment> {
        self.segments.iter().find(|segment| segment.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::SegmentKind;
    use crate::motif::load_motifs;

    fn motifs(texts: &[&str]) -> Vec<Motif> {
        let lines = texts.iter().map(|t| t.to_string()).collect::<Vec<_>>();
        load_motifs(&lines, 10).unwrap()
    }

    fn starts(record: &GeneRecord, motif: &str) -> Vec<usize> {
        record
            .matches
            .iter()
            .filter(|m| m.motif == motif)
            .map(|m| m.start)
            .collect()
    }

    #[test]
    fn builds_segments_and_matches() {
        let sequence = Sequence::new("gene1", "ACGTacgtGGCC");
        let record = GeneRecord::build(sequence, 1, &motifs(&["ACGT", "GGCC"])).unwrap();

        assert_eq!(record.header(), "gene1");
        assert_eq!(record.ordinal, 1);
        assert_eq!(record.len(), 12);
        let kinds = record.segments.iter().map(|s| s.kind).collect::<Vec<_>>();
        assert_eq!(
            kinds,
            vec![SegmentKind::Exon, SegmentKind::Intron, SegmentKind::Exon]
        );
        assert_eq!(starts(&record, "ACGT"), vec![0, 4]);
        assert_eq!(starts(&record, "GGCC"), vec![8]);
    }

    #[test]
    fn matches_keep_motif_order_and_color() {
        let sequence = Sequence::new("gene2", "ttgcttgcauGCAUGcatag");
        let record = GeneRecord::build(sequence, 2, &motifs(&["YGCY", "GCAUG", "catag"])).unwrap();

        let summary = record
            .matches
            .iter()
            .map(|m| (m.motif.as_str(), m.start, m.end(), m.color_index))
            .collect::<Vec<_>>();
        assert_eq!(
            summary,
            vec![
                ("YGCY", 1, 5, 0),
                ("GCAUG", 6, 11, 1),
                ("GCAUG", 10, 15, 1),
                ("catag", 15, 20, 2),
            ]
        );
    }

    #[test]
    fn overlapping_motifs_are_not_merged() {
        let sequence = Sequence::new("gene3", "aaaa");
        let record = GeneRecord::build(sequence, 1, &motifs(&["AA", "AAA"])).unwrap();
        assert_eq!(starts(&record, "AA"), vec![0, 1, 2]);
        assert_eq!(starts(&record, "AAA"), vec![0, 1]);
    }

    #[test]
    fn empty_sequence_names_the_gene() {
        let sequence = Sequence::new("empty_gene", "");
        let err = GeneRecord::build(sequence, 3, &motifs(&["ACGT"])).unwrap_err();
        assert_eq!(err, "Gene empty_gene (#3): Sequence is empty");
    }

    #[test]
    fn segment_lookup_by_position() {
        let sequence = Sequence::new("gene4", "aaBBBcc");
        let record = GeneRecord::build(sequence, 1, &motifs(&["GGG"])).unwrap();
        assert_eq!(record.segment_at(2).map(|s| s.kind), Some(SegmentKind::Exon));
        assert_eq!(record.segment_at(4).map(|s| s.kind), Some(SegmentKind::Exon));
        assert_eq!(record.segment_at(5).map(|s| s.kind), Some(SegmentKind::Intron));
        assert_eq!(record.segment_at(7), None);
    }
}
