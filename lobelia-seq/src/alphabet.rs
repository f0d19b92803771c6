//! Runtime alphabet values for record validation.
//!
//! An [`Alphabet`] is the set of symbols a record's payload may draw from.
//! It is ordinary data rather than a type parameter: every record carries
//! its alphabet with it, and validation runs against that value. Presets
//! cover the common biological symbol sets.

use std::collections::BTreeSet;
use std::fmt;

use lobelia_core::{LobeliaError, Result};

/// A named set of valid symbols.
///
/// Symbols are stored uppercase in sorted order, so two alphabets built
/// from the same symbols in different input order compare equal and render
/// identically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    name: String,
    symbols: BTreeSet<u8>,
}

impl Alphabet {
    /// Create an alphabet from a name and its valid symbols.
    ///
    /// Input symbols are uppercased and deduplicated. Returns an error if
    /// the symbol set is empty or contains a non-printable byte.
    pub fn new(name: impl Into<String>, symbols: impl AsRef<[u8]>) -> Result<Self> {
        let symbols: BTreeSet<u8> = symbols
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        if symbols.is_empty() {
            return Err(LobeliaError::InvalidInput(
                "alphabet must contain at least one symbol".into(),
            ));
        }
        if let Some(&b) = symbols.iter().find(|b| !b.is_ascii_graphic()) {
            return Err(LobeliaError::InvalidInput(format!(
                "alphabet symbol 0x{:02X} is not printable",
                b
            )));
        }
        Ok(Self {
            name: name.into(),
            symbols,
        })
    }

    /// Unambiguous DNA bases: `ACGT`.
    pub fn dna() -> Self {
        Self::preset("DNA", b"ACGT")
    }

    /// IUPAC DNA with ambiguity codes: `ACGTNRYSWKMBDHV`.
    pub fn iupac_dna() -> Self {
        Self::preset("DNA", b"ACGTNRYSWKMBDHV")
    }

    /// Unambiguous RNA bases: `ACGU`.
    pub fn rna() -> Self {
        Self::preset("RNA", b"ACGU")
    }

    /// The 20 standard amino acids plus the stop symbol `*`.
    pub fn protein() -> Self {
        Self::preset("Protein", b"ACDEFGHIKLMNPQRSTVWY*")
    }

    // Preset symbol sets are static, uppercase, and non-empty.
    fn preset(name: &str, symbols: &[u8]) -> Self {
        Self {
            name: name.to_string(),
            symbols: symbols.iter().copied().collect(),
        }
    }

    /// Human-readable alphabet name (e.g. "DNA").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether a symbol (assumed already uppercased) is valid.
    pub fn contains(&self, symbol: u8) -> bool {
        self.symbols.contains(&symbol)
    }

    /// Iterate over the symbols in sorted order.
    pub fn symbols(&self) -> impl Iterator<Item = u8> + '_ {
        self.symbols.iter().copied()
    }

    /// Validate a run of symbols against this alphabet.
    ///
    /// Reports the first offending symbol with its hex value and position.
    pub fn validate(&self, symbols: &[u8]) -> Result<()> {
        for (i, &b) in symbols.iter().enumerate() {
            if !self.contains(b) {
                return Err(LobeliaError::Validation(format!(
                    "invalid {} symbol '{}' (0x{:02X}) at position {}",
                    self.name, b as char, b, i
                )));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Alphabet {
    /// Space-joined symbols in sorted order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &b) in self.symbols.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::Alphabet;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct RawAlphabet {
        name: String,
        symbols: String,
    }

    impl Serialize for Alphabet {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let raw = RawAlphabet {
                name: self.name.clone(),
                symbols: self.symbols().map(|b| b as char).collect(),
            };
            raw.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Alphabet {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawAlphabet::deserialize(deserializer)?;
            Alphabet::new(raw.name, raw.symbols.as_bytes()).map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_accepts_all_bases() {
        let dna = Alphabet::dna();
        for &b in b"ACGT" {
            assert!(dna.contains(b), "DNA should accept {}", b as char);
        }
    }

    #[test]
    fn dna_rejects_u() {
        assert!(!Alphabet::dna().contains(b'U'));
    }

    #[test]
    fn iupac_dna_accepts_ambiguity_codes() {
        let dna = Alphabet::iupac_dna();
        for &b in b"ACGTNRYSWKMBDHV" {
            assert!(dna.contains(b), "IUPAC DNA should accept {}", b as char);
        }
    }

    #[test]
    fn rna_rejects_t() {
        assert!(!Alphabet::rna().contains(b'T'));
    }

    #[test]
    fn custom_alphabet_uppercases_and_dedups() {
        let ab = Alphabet::new("binary", b"abba").unwrap();
        assert_eq!(ab.len(), 2);
        assert!(ab.contains(b'A'));
        assert!(ab.contains(b'B'));
        assert!(!ab.contains(b'a'));
    }

    #[test]
    fn empty_alphabet_rejected() {
        let result = Alphabet::new("empty", b"");
        assert!(matches!(result, Err(LobeliaError::InvalidInput(_))));
    }

    #[test]
    fn non_printable_symbol_rejected() {
        let result = Alphabet::new("bad", b"A\x01");
        assert!(matches!(result, Err(LobeliaError::InvalidInput(_))));
    }

    #[test]
    fn validate_reports_symbol_and_position() {
        let err = Alphabet::new("AT", b"AT")
            .unwrap()
            .validate(b"ATX")
            .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'X'"), "message should name the symbol: {}", msg);
        assert!(msg.contains("position 2"), "message should give the position: {}", msg);
    }

    #[test]
    fn display_is_space_joined_and_sorted() {
        let ab = Alphabet::new("AT", b"TA").unwrap();
        assert_eq!(ab.to_string(), "A T");
    }

    #[test]
    fn input_order_does_not_matter() {
        let a = Alphabet::new("x", b"ACGT").unwrap();
        let b = Alphabet::new("x", b"TGCA").unwrap();
        assert_eq!(a, b);
    }
}
