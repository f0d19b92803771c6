//! DNA record variant.
//!
//! [`DnaRecord`] composes a [`SeqRecord`] over the DNA alphabet with the
//! adapter used during library prep. Operations it does not override
//! delegate to the embedded record; transforms return a `DnaRecord` so the
//! adapter travels with the payload.

use std::fmt;
use std::ops::Range;

use lobelia_core::{
    ContentAddressable, LobeliaError, Named, Render, Result, Summarizable, Symbols,
};

use crate::alphabet::Alphabet;
use crate::ops::SeqOps;
use crate::record::SeqRecord;

/// A validated DNA record with an adapter.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DnaRecord {
    inner: SeqRecord,
    adapter: Vec<u8>,
}

impl DnaRecord {
    /// Create a new DNA record.
    ///
    /// Symbols and adapter are both uppercased and validated against the
    /// DNA alphabet (`ACGT`). A bad payload symbol is reported as
    /// [`LobeliaError::Validation`], a bad adapter as
    /// [`LobeliaError::InvalidInput`].
    pub fn new(
        name: impl Into<String>,
        symbols: impl AsRef<[u8]>,
        adapter: impl AsRef<[u8]>,
    ) -> Result<Self> {
        let inner = SeqRecord::new(name, Alphabet::dna(), symbols)?;
        let adapter = validate_adapter(inner.alphabet(), adapter.as_ref())?;
        Ok(Self { inner, adapter })
    }

    /// The adapter bytes.
    pub fn adapter(&self) -> &[u8] {
        &self.adapter
    }

    /// Replace the adapter, re-validating it.
    pub fn with_adapter(&self, adapter: impl AsRef<[u8]>) -> Result<Self> {
        let adapter = validate_adapter(self.inner.alphabet(), adapter.as_ref())?;
        Ok(Self {
            inner: self.inner.clone(),
            adapter,
        })
    }

    /// Replace the symbols, re-validating against the DNA alphabet.
    pub fn with_symbols(&self, symbols: impl AsRef<[u8]>) -> Result<Self> {
        Ok(Self {
            inner: self.inner.with_symbols(symbols)?,
            adapter: self.adapter.clone(),
        })
    }

    /// The embedded generic record.
    pub fn as_record(&self) -> &SeqRecord {
        &self.inner
    }
}

fn validate_adapter(alphabet: &Alphabet, adapter: &[u8]) -> Result<Vec<u8>> {
    let adapter: Vec<u8> = adapter.iter().map(|b| b.to_ascii_uppercase()).collect();
    alphabet
        .validate(&adapter)
        .map_err(|e| LobeliaError::InvalidInput(format!("adapter: {}", e)))?;
    Ok(adapter)
}

impl Symbols for DnaRecord {
    fn as_symbols(&self) -> &[u8] {
        self.inner.as_symbols()
    }
}

impl Named for DnaRecord {
    fn name(&self) -> &str {
        self.inner.name()
    }
}

impl SeqOps for DnaRecord {
    fn reverse(&self) -> Result<Self> {
        Ok(Self {
            inner: self.inner.reverse()?,
            adapter: self.adapter.clone(),
        })
    }

    fn subseq(&self, range: Range<usize>) -> Result<Self> {
        Ok(Self {
            inner: self.inner.subseq(range)?,
            adapter: self.adapter.clone(),
        })
    }
}

impl Render for DnaRecord {
    /// The base four lines plus a fifth `Adapter` line.
    fn render(&self) -> String {
        format!(
            "{}\nAdapter: {}",
            self.inner.render(),
            std::str::from_utf8(&self.adapter).unwrap_or("???"),
        )
    }
}

impl Summarizable for DnaRecord {
    fn summary(&self) -> String {
        format!(
            "{} [adapter {}]",
            self.inner.summary(),
            std::str::from_utf8(&self.adapter).unwrap_or("???"),
        )
    }
}

impl ContentAddressable for DnaRecord {
    /// Hash covers payload and adapter; records differing only in adapter
    /// hash differently.
    fn content_hash(&self) -> String {
        let mut buf = self.inner.as_symbols().to_vec();
        buf.push(b'\n');
        buf.extend_from_slice(&self.adapter);
        lobelia_core::hash::sha256(&buf)
    }
}

impl fmt::Debug for DnaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let adapter = std::str::from_utf8(&self.adapter).unwrap_or("???");
        write!(f, "{:?} adapter=\"{}\"", self.inner, adapter)
    }
}

impl fmt::Display for DnaRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::DnaRecord;
    use lobelia_core::{Named, Symbols};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct RawDnaRecord {
        name: String,
        symbols: String,
        adapter: String,
    }

    impl Serialize for DnaRecord {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let raw = RawDnaRecord {
                name: self.name().to_string(),
                symbols: String::from_utf8_lossy(self.as_symbols()).into_owned(),
                adapter: String::from_utf8_lossy(&self.adapter).into_owned(),
            };
            raw.serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for DnaRecord {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let raw = RawDnaRecord::deserialize(deserializer)?;
            DnaRecord::new(raw.name, raw.symbols.as_bytes(), raw.adapter.as_bytes())
                .map_err(serde::de::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn construction_validates_both_fields() {
        assert!(DnaRecord::new("d1", b"ATTAAAGGG", b"ATGA").is_ok());

        let err = DnaRecord::new("d1", b"ATTX", b"ATGA").unwrap_err();
        assert!(matches!(err, LobeliaError::Validation(_)));

        let err = DnaRecord::new("d1", b"ATTA", b"ATGX").unwrap_err();
        assert!(matches!(err, LobeliaError::InvalidInput(_)));
    }

    #[test]
    fn adapter_is_uppercased() {
        let record = DnaRecord::new("d1", b"ATTA", b"atga").unwrap();
        assert_eq!(record.adapter(), b"ATGA");
    }

    #[test]
    fn length_matches_base_record_contract() {
        let record = DnaRecord::new("d1", b"ATTAAAGGG", b"ATGA").unwrap();
        assert_eq!(record.len(), 9);
        assert_eq!(record.len(), record.as_record().len());
    }

    #[test]
    fn reverse_keeps_variant_and_adapter() {
        let record = DnaRecord::new("d1", b"AACG", b"ATGA").unwrap();
        let reversed = record.reverse().unwrap();
        assert_eq!(reversed.as_symbols(), b"GCAA");
        assert_eq!(reversed.name(), "d1--reversed");
        assert_eq!(reversed.adapter(), b"ATGA");
    }

    #[test]
    fn subseq_keeps_variant_and_adapter() {
        let record = DnaRecord::new("d1", b"ATTAAAAAAAA", b"ATGA").unwrap();
        let head = record.subseq(0..3).unwrap();
        assert_eq!(head.as_symbols(), b"ATT");
        assert_eq!(head.adapter(), b"ATGA");
        assert_eq!(record.as_symbols(), b"ATTAAAAAAAA");
    }

    #[test]
    fn subseq_past_end_fails() {
        let record = DnaRecord::new("d1", b"ATT", b"ATGA").unwrap();
        let err = record.subseq(1..7).unwrap_err();
        assert!(matches!(err, LobeliaError::Index(_)));
    }

    #[test]
    fn with_adapter_rejects_bad_symbols() {
        let record = DnaRecord::new("d1", b"ATT", b"ATGA").unwrap();
        let err = record.with_adapter(b"QQ").unwrap_err();
        assert!(matches!(err, LobeliaError::InvalidInput(_)));
        assert_eq!(record.adapter(), b"ATGA");
    }

    #[test]
    fn render_appends_adapter_line() {
        let record = DnaRecord::new("d1", b"ATT", b"ATGA").unwrap();
        assert_eq!(
            record.render(),
            "Name: d1\nLength: 3\nAlphabet: A C G T\nSequence: ATT\nAdapter: ATGA"
        );
    }

    #[test]
    fn content_hash_depends_on_adapter() {
        let a = DnaRecord::new("d1", b"ATT", b"ATGA").unwrap();
        let b = a.with_adapter(b"ACCA").unwrap();
        assert_ne!(a.content_hash(), b.content_hash());
    }
}
