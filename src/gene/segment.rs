use crate::utils::Result;
use itertools::Itertools;
use std::ops::Range;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Exon,
    Intron,
}

/// Exon or intron extents in sequence coordinates.
///
/// Introns hold their run as a half-open `[start, end)` interval. Exons hold the
/// run's inner bounds, `start + 1` and `end - 1`; use [`Segment::run`] to get the
/// covered bases for either kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub start: usize,
    pub end: usize,
}

impl Segment {
    fn from_run(kind: SegmentKind, run: Range<usize>) -> Self {
        match kind {
            SegmentKind::Exon => Segment {
                kind,
                start: run.start + 1,
                end: run.end - 1,
            },
            SegmentKind::Intron => Segment {
                kind,
                start: run.start,
                end: run.end,
            },
        }
    }

    /// Half-open range of bases covered by the segment
    pub fn run(&self) -> Range<usize> {
        match self.kind {
            SegmentKind::Exon => self.start - 1..self.end + 1,
            SegmentKind::Intron => self.start..self.end,
        }
    }

    pub fn contains(&self, pos: usize) -> bool {
        self.run().contains(&pos)
    }
}

fn kind_of(base: u8) -> Option<SegmentKind> {
    if base.is_ascii_uppercase() {
        Some(SegmentKind::Exon)
    } else if base.is_ascii_lowercase() {
        Some(SegmentKind::Intron)
    } else {
        None
    }
}

/// Splits a sequence into maximal uppercase (exon) and lowercase (intron) runs.
/// Characters without case end the current run and belong to no segment.
pub fn segment(seq: &str) -> Result<Vec<Segment>> {
    if seq.is_empty() {
        return Err("Sequence is empty".to_string());
    }

    let mut segments = Vec::new();
    let mut run_start = 0;
    for (kind, run) in &seq.bytes().chunk_by(|base| kind_of(*base)) {
        let run_end = run_start + run.count();
        if let Some(kind) = kind {
            segments.push(Segment::from_run(kind, run_start..run_end));
        }
        run_start = run_end;
    }

    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exon(start: usize, end: usize) -> Segment {
        Segment {
            kind: SegmentKind::Exon,
            start,
            end,
        }
    }

    fn intron(start: usize, end: usize) -> Segment {
        Segment {
            kind: SegmentKind::Intron,
            start,
            end,
        }
    }

    #[test]
    fn exon_bounds_are_shifted_inward() {
        let segments = segment("aaBBBcc").unwrap();
        assert_eq!(segments, vec![intron(0, 2), exon(3, 4), intron(5, 7)]);
        assert_eq!(segments[1].run(), 2..5);
    }

    #[test]
    fn exon_intron_exon_gene() {
        let segments = segment("ACGTacgtGGCC").unwrap();
        assert_eq!(segments, vec![exon(1, 3), intron(4, 8), exon(9, 11)]);
    }

    #[test]
    fn runs_partition_the_sequence() {
        let seqs = ["a", "A", "aA", "ACGTacgtGGCC", "ttTTttTTtaAAcCgG", "gcaugCAUGcaugc"];
        for seq in seqs {
            let segments = segment(seq).unwrap();
            let mut next_start = 0;
            for (index, segment) in segments.iter().enumerate() {
                let run = segment.run();
                assert_eq!(run.start, next_start);
                let expected_kind = if seq.as_bytes()[run.start].is_ascii_uppercase() {
                    SegmentKind::Exon
                } else {
                    SegmentKind::Intron
                };
                assert_eq!(segment.kind, expected_kind);
                if index > 0 {
                    assert_ne!(segments[index - 1].kind, segment.kind);
                }
                next_start = run.end;
            }
            assert_eq!(next_start, seq.len());
        }
    }

    #[test]
    fn single_base_exon_round_trips_through_run() {
        let segments = segment("A").unwrap();
        assert_eq!(segments, vec![exon(1, 0)]);
        assert_eq!(segments[0].run(), 0..1);
        assert!(segments[0].contains(0));
        assert!(!segments[0].contains(1));
    }

    #[test]
    fn caseless_characters_break_runs() {
        let segments = segment("AC--gt").unwrap();
        assert_eq!(segments, vec![exon(1, 1), intron(4, 6)]);

        let segments = segment("ac-gt").unwrap();
        assert_eq!(segments, vec![intron(0, 2), intron(3, 5)]);

        assert!(segment("---").unwrap().is_empty());
    }

    #[test]
    fn empty_sequence_is_rejected() {
        assert_eq!(segment(""), Err("Sequence is empty".to_string()));
    }
}
