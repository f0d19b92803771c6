//! The record capability set.
//!
//! [`SeqOps`] is the contract every record variant satisfies on top of the
//! core [`Symbols`]/[`Named`]/[`Render`] traits. Generic callers written
//! against `SeqOps` work with any variant; a variant that does not override
//! an operation delegates to its embedded base record.

use std::ops::Range;

use lobelia_core::{LobeliaError, Named, Render, Result, Symbols};

/// Transforming operations shared by all record variants.
///
/// `length` is [`Symbols::len`] and rendering is [`Render::render`]; the
/// methods here return a fresh record of the same variant and never modify
/// the receiver.
pub trait SeqOps: Symbols + Named + Render + Sized {
    /// Return the record with its symbols reversed and its name suffixed
    /// `--reversed`. The alphabet is preserved and the result re-validated.
    fn reverse(&self) -> Result<Self>;

    /// Return the record restricted to `range`.
    ///
    /// Ranges are zero-based and half-open: `0..3` selects the first three
    /// symbols. Fails with [`LobeliaError::Index`] when the range reaches
    /// past the payload, leaving the receiver untouched.
    fn subseq(&self, range: Range<usize>) -> Result<Self>;
}

/// Check a half-open range against a payload length.
pub(crate) fn check_range(range: &Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end {
        return Err(LobeliaError::Index(format!(
            "range start {} is past range end {}",
            range.start, range.end
        )));
    }
    if range.end > len {
        return Err(LobeliaError::Index(format!(
            "range end {} is past record length {}",
            range.end, len
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_bounds_ranges_accepted() {
        assert!(check_range(&(0..3), 5).is_ok());
        assert!(check_range(&(0..0), 0).is_ok());
        assert!(check_range(&(5..5), 5).is_ok());
    }

    #[test]
    fn end_past_length_rejected() {
        let err = check_range(&(0..6), 5).unwrap_err();
        assert!(matches!(err, LobeliaError::Index(_)));
    }

    #[test]
    fn inverted_range_rejected() {
        let err = check_range(&(3..1), 5).unwrap_err();
        assert!(matches!(err, LobeliaError::Index(_)));
    }
}
