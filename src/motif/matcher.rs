use super::pattern::CompiledPattern;

/// Every offset at which `pattern` matches `seq`, including overlapping ones.
///
/// Offsets are ascending and distinct. An empty pattern, or one longer than the
/// sequence, has no matches.
pub fn find_all(pattern: &CompiledPattern, seq: &str) -> Vec<usize> {
    let seq = seq.as_bytes();
    if pattern.is_empty() || pattern.len() > seq.len() {
        return Vec::new();
    }

    (0..=seq.len() - pattern.len())
        .filter(|&offset| pattern.matches_at(seq, offset))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motif::pattern::compile;

    const IUPAC_CODES: &[(&str, &str)] = &[
        ("A", "A"),
        ("C", "C"),
        ("G", "G"),
        ("T", "TU"),
        ("U", "UT"),
        ("W", "ATU"),
        ("S", "CG"),
        ("M", "AC"),
        ("K", "GTU"),
        ("R", "AG"),
        ("Y", "CTU"),
        ("B", "CGTU"),
        ("D", "AGTU"),
        ("H", "ACTU"),
        ("V", "ACG"),
        ("N", "ACGTU"),
    ];

    #[test]
    fn ambiguity_codes_match_exactly_their_bases() {
        for (code, bases) in IUPAC_CODES {
            let pattern = compile(code);
            for base in ["A", "C", "G", "T", "U"] {
                let expected = if bases.contains(base) { vec![0] } else { vec![] };
                assert_eq!(find_all(&pattern, base), expected, "{code} vs {base}");
                let lower = base.to_lowercase();
                assert_eq!(find_all(&pattern, &lower), expected, "{code} vs {lower}");
            }
        }
    }

    #[test]
    fn t_matches_u_and_u_matches_t() {
        assert_eq!(find_all(&compile("T"), "U"), vec![0]);
        assert_eq!(find_all(&compile("t"), "u"), vec![0]);
        assert_eq!(find_all(&compile("U"), "T"), vec![0]);
        assert_eq!(find_all(&compile("u"), "t"), vec![0]);
    }

    #[test]
    fn overlapping_matches_are_reported() {
        assert_eq!(find_all(&compile("AA"), "AAA"), vec![0, 1]);
        assert_eq!(find_all(&compile("ANA"), "AAAAA"), vec![0, 1, 2]);
    }

    #[test]
    fn matching_ignores_case_marking() {
        let pattern = compile("acgt");
        assert_eq!(find_all(&pattern, "ACGT"), vec![0]);
        assert_eq!(find_all(&pattern, "acgt"), vec![0]);
        assert_eq!(find_all(&pattern, "ttACgtAcGTtt"), vec![2, 6]);
    }

    #[test]
    fn long_pattern_yields_nothing() {
        assert!(find_all(&compile("ACGTACGT"), "ACGT").is_empty());
        assert_eq!(find_all(&compile("CGT"), "ACGTACG"), vec![1]);
    }

    #[test]
    fn empty_inputs_yield_nothing() {
        assert!(find_all(&compile(""), "ACGT").is_empty());
        assert!(find_all(&compile("A"), "").is_empty());
    }

    #[test]
    fn ygcy_in_intron_region() {
        let pattern = compile("YGCY");
        assert_eq!(find_all(&pattern, "ttgcttgcuatgcc"), vec![1, 5, 10]);
    }
}
