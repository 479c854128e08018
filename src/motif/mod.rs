mod iupac;
mod matcher;
mod pattern;

pub use iupac::{is_iupac_symbol, BaseClass};
pub use matcher::find_all;
pub use pattern::{compile, CompiledPattern};

use crate::utils::Result;
use std::collections::HashSet;

/// A query motif with its compiled pattern and legend color slot
#[derive(Debug, Clone, PartialEq)]
pub struct Motif {
    pub text: String,
    pub pattern: CompiledPattern,
    pub color_index: usize,
}

impl Motif {
    pub fn new(text: &str, ordinal: usize, palette_size: usize) -> Self {
        Motif {
            text: text.to_string(),
            pattern: compile(text),
            color_index: color_index(ordinal, palette_size),
        }
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn find_in(&self, seq: &str) -> Vec<usize> {
        find_all(&self.pattern, seq)
    }
}

/// Palette slot of the motif at 0-based `ordinal`; wraps around past the last color
pub fn color_index(ordinal: usize, palette_size: usize) -> usize {
    ordinal % palette_size
}

/// Builds the motif set in input order, keeping the first of any case-insensitive duplicates
pub fn load_motifs(lines: &[String], palette_size: usize) -> Result<Vec<Motif>> {
    let mut seen = HashSet::new();
    let mut motifs = Vec::new();
    for line in lines {
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if !seen.insert(text.to_uppercase()) {
            log::warn!("Skipping duplicate motif {}", text);
            continue;
        }
        if !text.bytes().all(is_iupac_symbol) {
            log::warn!("Motif {} contains non-IUPAC symbols, matching them literally", text);
        }
        let motif = Motif::new(text, motifs.len(), palette_size);
        log::debug!("Motif {} compiled to {}", motif.text, motif.pattern.to_regex());
        motifs.push(motif);
    }

    if motifs.is_empty() {
        return Err("No motifs provided".to_string());
    }
    Ok(motifs)
}
