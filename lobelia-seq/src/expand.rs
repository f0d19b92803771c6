//! Open expansion dispatch.
//!
//! [`expand`] turns a value into the ordered series of elements it stands
//! for. Records expand to their symbol bytes. Plain integers keep their
//! long-standing meaning (the ascending run `1..=n` produced by
//! [`index_run`]), so callers that already expand counts observe identical
//! behavior after record types opt in.

use lobelia_core::Symbols;

use crate::dna::DnaRecord;
use crate::record::SeqRecord;

/// The ascending run `1..=n`. `index_run(0)` is empty.
pub fn index_run(n: usize) -> Vec<usize> {
    (1..=n).collect()
}

/// A value that expands to an ordered series of elements.
///
/// This is an open trait: downstream types implement it to join the
/// [`expand`] operation without touching existing implementations.
pub trait Expand {
    /// Element type the value expands to.
    type Item;

    /// The ordered series this value stands for.
    fn expand(&self) -> Vec<Self::Item>;
}

/// Free-function entry point for [`Expand`].
pub fn expand<T: Expand>(value: &T) -> Vec<T::Item> {
    value.expand()
}

impl Expand for SeqRecord {
    type Item = u8;

    fn expand(&self) -> Vec<u8> {
        self.as_symbols().to_vec()
    }
}

impl Expand for DnaRecord {
    type Item = u8;

    fn expand(&self) -> Vec<u8> {
        self.as_symbols().to_vec()
    }
}

// Integer inputs delegate to `index_run`, the behavior bound to expansion
// before record types existed.

impl Expand for usize {
    type Item = usize;

    fn expand(&self) -> Vec<usize> {
        index_run(*self)
    }
}

impl Expand for u32 {
    type Item = usize;

    fn expand(&self) -> Vec<usize> {
        index_run(*self as usize)
    }
}

impl Expand for u64 {
    type Item = usize;

    fn expand(&self) -> Vec<usize> {
        index_run(*self as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;

    #[test]
    fn records_expand_to_their_symbols() {
        let record = SeqRecord::new("r", Alphabet::dna(), b"ACGT").unwrap();
        assert_eq!(expand(&record), b"ACGT".to_vec());

        let dna = DnaRecord::new("d", b"ATTA", b"ATGA").unwrap();
        assert_eq!(expand(&dna), b"ATTA".to_vec());
    }

    #[test]
    fn numeric_expansion_matches_original_behavior() {
        assert_eq!(expand(&5usize), index_run(5));
        assert_eq!(expand(&5u32), vec![1, 2, 3, 4, 5]);
        assert_eq!(expand(&3u64), index_run(3));
    }

    #[test]
    fn zero_expands_to_empty_run() {
        assert_eq!(expand(&0usize), Vec::<usize>::new());
        assert!(index_run(0).is_empty());
    }
}
