use super::iupac::BaseClass;
use itertools::Itertools;

/// Motif compiled into one base class per position
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledPattern {
    classes: Vec<BaseClass>,
}

impl CompiledPattern {
    pub fn new(motif: &str) -> Self {
        let classes = motif.bytes().map(BaseClass::from_symbol).collect();
        CompiledPattern { classes }
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn classes(&self) -> &[BaseClass] {
        &self.classes
    }

    /// Returns true if the window of `seq` starting at `offset` matches every position
    #[inline]
    pub fn matches_at(&self, seq: &[u8], offset: usize) -> bool {
        match seq.get(offset..offset + self.classes.len()) {
            Some(window) => self
                .classes
                .iter()
                .zip(window)
                .all(|(class, base)| class.contains(*base)),
            None => false,
        }
    }

    /// Equivalent regular expression, e.g. "[CTU]GC[CTU]" for YGCY
    pub fn to_regex(&self) -> String {
        self.classes
            .iter()
            .map(|class| match class {
                BaseClass::Bases(_) => {
                    let bases = class.bases();
                    if bases.len() == 1 {
                        (bases[0] as char).to_string()
                    } else {
                        format!("[{}]", bases.iter().map(|b| *b as char).join(""))
                    }
                }
                BaseClass::Literal(symbol) if symbol.is_ascii_alphanumeric() => {
                    (*symbol as char).to_string()
                }
                BaseClass::Literal(symbol) => format!("\\{}", *symbol as char),
            })
            .join("")
    }
}

pub fn compile(motif: &str) -> CompiledPattern {
    CompiledPattern::new(motif)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compiles_each_position() {
        let pattern = compile("ygcy");
        assert_eq!(pattern.len(), 4);
        assert_eq!(pattern.classes()[1], BaseClass::from_symbol(b'G'));
        assert_eq!(pattern.to_regex(), "[CTU]GC[CTU]");
    }

    #[test]
    fn matches_window_case_insensitively() {
        let pattern = compile("YGCY");
        assert!(pattern.matches_at(b"aaTGCCaa", 2));
        assert!(pattern.matches_at(b"aatgccaa", 2));
        assert!(pattern.matches_at(b"aaugcuaa", 2));
        assert!(!pattern.matches_at(b"aatgcaaa", 2));
    }

    #[test]
    fn window_past_end_does_not_match() {
        let pattern = compile("ACGT");
        assert!(!pattern.matches_at(b"ACG", 0));
        assert!(!pattern.matches_at(b"AACGT", 2));
    }

    #[test]
    fn unknown_symbols_pass_through() {
        let pattern = compile("A-C");
        assert_eq!(pattern.to_regex(), "A\\-C");
        assert!(pattern.matches_at(b"a-c", 0));
        assert!(!pattern.matches_at(b"aGc", 0));
    }
}
