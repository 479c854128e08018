//! IUPAC nucleotide codes resolved to sets of concrete bases.
//!
//! T and U share one bit, so a class that admits one of them admits both.

const BASE_A: u8 = 1;
const BASE_C: u8 = 2;
const BASE_G: u8 = 4;
const BASE_TU: u8 = 8;
const BASE_ANY: u8 = BASE_A | BASE_C | BASE_G | BASE_TU;

/// Set of bases allowed at one motif position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaseClass {
    Bases(u8),
    /// Unrecognized symbol, matched as itself (uppercased)
    Literal(u8),
}

impl BaseClass {
    pub fn from_symbol(symbol: u8) -> Self {
        let mask = match symbol.to_ascii_uppercase() {
            b'A' => BASE_A,
            b'C' => BASE_C,
            b'G' => BASE_G,
            b'T' | b'U' => BASE_TU,
            b'W' => BASE_A | BASE_TU,
            b'S' => BASE_C | BASE_G,
            b'M' => BASE_A | BASE_C,
            b'K' => BASE_G | BASE_TU,
            b'R' => BASE_A | BASE_G,
            b'Y' => BASE_C | BASE_TU,
            b'B' => BASE_C | BASE_G | BASE_TU,
            b'D' => BASE_A | BASE_G | BASE_TU,
            b'H' => BASE_A | BASE_C | BASE_TU,
            b'V' => BASE_A | BASE_C | BASE_G,
            b'N' => BASE_ANY,
            other => return BaseClass::Literal(other),
        };
        BaseClass::Bases(mask)
    }

    #[inline(always)]
    pub fn contains(&self, base: u8) -> bool {
        match *self {
            BaseClass::Bases(mask) => mask & base_bit(base) != 0,
            BaseClass::Literal(symbol) => base.to_ascii_uppercase() == symbol,
        }
    }

    /// Concrete uppercase bases in the class, in ACGTU order
    pub fn bases(&self) -> Vec<u8> {
        match *self {
            BaseClass::Bases(mask) => {
                let mut bases = Vec::with_capacity(5);
                if mask & BASE_A != 0 {
                    bases.push(b'A');
                }
                if mask & BASE_C != 0 {
                    bases.push(b'C');
                }
                if mask & BASE_G != 0 {
                    bases.push(b'G');
                }
                if mask & BASE_TU != 0 {
                    bases.push(b'T');
                    bases.push(b'U');
                }
                bases
            }
            BaseClass::Literal(symbol) => vec![symbol],
        }
    }
}

#[inline(always)]
fn base_bit(base: u8) -> u8 {
    match base.to_ascii_uppercase() {
        b'A' => BASE_A,
        b'C' => BASE_C,
        b'G' => BASE_G,
        b'T' | b'U' => BASE_TU,
        _ => 0,
    }
}

/// Returns true if `symbol` is a nucleotide or IUPAC ambiguity code (either case)
pub fn is_iupac_symbol(symbol: u8) -> bool {
    !matches!(BaseClass::from_symbol(symbol), BaseClass::Literal(_))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_ambiguity_codes() {
        let expected: [(u8, &str); 16] = [
            (b'A', "A"),
            (b'C', "C"),
            (b'G', "G"),
            (b'T', "TU"),
            (b'U', "TU"),
            (b'W', "ATU"),
            (b'S', "CG"),
            (b'M', "AC"),
            (b'K', "GTU"),
            (b'R', "AG"),
            (b'Y', "CTU"),
            (b'B', "CGTU"),
            (b'D', "AGTU"),
            (b'H', "ACTU"),
            (b'V', "ACG"),
            (b'N', "ACGTU"),
        ];
        for (symbol, bases) in expected {
            assert_eq!(BaseClass::from_symbol(symbol).bases(), bases.as_bytes().to_vec());
            assert_eq!(
                BaseClass::from_symbol(symbol.to_ascii_lowercase()).bases(),
                bases.as_bytes().to_vec()
            );
        }
    }

    #[test]
    fn t_and_u_are_interchangeable() {
        for query in [b'T', b't', b'U', b'u'] {
            let class = BaseClass::from_symbol(query);
            for target in [b'T', b't', b'U', b'u'] {
                assert!(class.contains(target));
            }
        }
    }

    #[test]
    fn unknown_symbol_is_literal() {
        let class = BaseClass::from_symbol(b'x');
        assert_eq!(class, BaseClass::Literal(b'X'));
        assert!(class.contains(b'x'));
        assert!(class.contains(b'X'));
        assert!(!class.contains(b'A'));
    }

    #[test]
    fn n_in_target_is_not_a_concrete_base() {
        assert!(!BaseClass::from_symbol(b'N').contains(b'N'));
    }

    #[test]
    fn iupac_symbols_are_recognized() {
        assert!(is_iupac_symbol(b'y'));
        assert!(is_iupac_symbol(b'U'));
        assert!(!is_iupac_symbol(b'-'));
        assert!(!is_iupac_symbol(b'X'));
    }
}
