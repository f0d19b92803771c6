//! The generic validated record.
//!
//! [`SeqRecord`] holds a name, an [`Alphabet`], and a run of symbols drawn
//! from that alphabet. Construction uppercases and validates every symbol.
//! Field updates go through `with_*` methods that build and validate a
//! fresh record, so a caller always holds either the old valid record or
//! the new one, never a half-updated state.

use std::fmt;

use lobelia_core::{ContentAddressable, Named, Render, Result, Summarizable, Symbols};

use crate::alphabet::Alphabet;
use crate::ops::{check_range, SeqOps};

/// A named, validated run of symbols over a runtime alphabet.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SeqRecord {
    name: String,
    alphabet: Alphabet,
    symbols: Vec<u8>,
}

impl SeqRecord {
    /// Create a new validated record.
    ///
    /// Input symbols are uppercased, then every symbol is checked against
    /// the alphabet. Returns [`lobelia_core::LobeliaError::Validation`]
    /// naming the first offending symbol and its position.
    pub fn new(
        name: impl Into<String>,
        alphabet: Alphabet,
        symbols: impl AsRef<[u8]>,
    ) -> Result<Self> {
        let symbols: Vec<u8> = symbols
            .as_ref()
            .iter()
            .map(|b| b.to_ascii_uppercase())
            .collect();
        alphabet.validate(&symbols)?;
        Ok(Self {
            name: name.into(),
            alphabet,
            symbols,
        })
    }

    /// Build a record from symbols already validated against `alphabet`.
    ///
    /// Caller must guarantee every symbol is an uppercase member of the
    /// alphabet.
    fn from_validated(name: String, alphabet: Alphabet, symbols: Vec<u8>) -> Self {
        Self {
            name,
            alphabet,
            symbols,
        }
    }

    /// The record's alphabet.
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Replace the symbols, re-validating against the current alphabet.
    ///
    /// On failure the receiver is untouched and still valid.
    pub fn with_symbols(&self, symbols: impl AsRef<[u8]>) -> Result<Self> {
        Self::new(self.name.clone(), self.alphabet.clone(), symbols)
    }

    /// Replace the name. Names carry no invariant, so this cannot fail.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::from_validated(name.into(), self.alphabet.clone(), self.symbols.clone())
    }

    /// Replace the alphabet, re-validating the existing symbols against it.
    pub fn with_alphabet(&self, alphabet: Alphabet) -> Result<Self> {
        alphabet.validate(&self.symbols)?;
        Ok(Self::from_validated(
            self.name.clone(),
            alphabet,
            self.symbols.clone(),
        ))
    }

    /// Count of each alphabet symbol in the payload.
    ///
    /// Returns `(symbol, count)` pairs in alphabet order, including symbols
    /// that never occur.
    pub fn symbol_counts(&self) -> Vec<(u8, usize)> {
        self.alphabet
            .symbols()
            .map(|s| (s, self.symbols.iter().filter(|&&b| b == s).count()))
            .collect()
    }

    /// Consume the record and return the symbol bytes.
    pub fn into_symbols(self) -> Vec<u8> {
        self.symbols
    }
}

impl Symbols for SeqRecord {
    fn as_symbols(&self) -> &[u8] {
        &self.symbols
    }
}

impl Named for SeqRecord {
    fn name(&self) -> &str {
        &self.name
    }
}

impl SeqOps for SeqRecord {
    fn reverse(&self) -> Result<Self> {
        let reversed: Vec<u8> = self.symbols.iter().rev().copied().collect();
        Self::new(
            format!("{}--reversed", self.name),
            self.alphabet.clone(),
            reversed,
        )
    }

    fn subseq(&self, range: std::ops::Range<usize>) -> Result<Self> {
        check_range(&range, self.symbols.len())?;
        Ok(Self::from_validated(
            self.name.clone(),
            self.alphabet.clone(),
            self.symbols[range].to_vec(),
        ))
    }
}

impl Render for SeqRecord {
    /// Four labeled lines: `Name`, `Length`, `Alphabet`, `Sequence`.
    fn render(&self) -> String {
        format!(
            "Name: {}\nLength: {}\nAlphabet: {}\nSequence: {}",
            self.name,
            self.symbols.len(),
            self.alphabet,
            std::str::from_utf8(&self.symbols).unwrap_or("???"),
        )
    }
}

impl Summarizable for SeqRecord {
    fn summary(&self) -> String {
        let preview_len = self.symbols.len().min(20);
        let preview = std::str::from_utf8(&self.symbols[..preview_len]).unwrap_or("???");
        if self.symbols.len() > 20 {
            format!(
                "{} record '{}' ({} symbols): {}...",
                self.alphabet.name(),
                self.name,
                self.symbols.len(),
                preview
            )
        } else {
            format!(
                "{} record '{}' ({} symbols): {}",
                self.alphabet.name(),
                self.name,
                self.symbols.len(),
                preview
            )
        }
    }
}

impl ContentAddressable for SeqRecord {
    fn content_hash(&self) -> String {
        lobelia_core::hash::sha256(&self.symbols)
    }
}

impl fmt::Debug for SeqRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.symbols).unwrap_or("???");
        write!(f, "{}(\"{}\", \"{}\")", self.alphabet.name(), self.name, s)
    }
}

impl fmt::Display for SeqRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = std::str::from_utf8(&self.symbols).unwrap_or("???");
        f.write_str(s)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::{Alphabet, SeqRecord};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct RawRecord {
        name: String,
        alphabet: Alphabet,
        symbols: String,
    }

    impl Serialize for SeqRecord {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let raw = RawRecord {
                name: self.name.clone(),
                alphabet: self.alphabet.clone(),
                symbols: String::from_utf8_lossy(&self.symbols).into_owned(),
            };
            raw.serialize(serializer)
        }
    }

    // Deserialization goes through the validating constructor.
    impl<'de> Deserialize<'de> for SeqRecord {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawRecord::deserialize(deserializer)?;
            SeqRecord::new(raw.name, raw.alphabet, raw.symbols.as_bytes())
                .map_err(serde::de::Error::custom)
        }
    }
}
