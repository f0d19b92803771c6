//! Core trait definitions for the Lobelia toolkit.
//!
//! These traits split the record capability set into its contracts: payload
//! access, naming, rendering, summarizing, and content addressing. Record
//! types implement them individually; the transforming operations live in
//! the domain crate's `SeqOps` trait on top of these.

/// An ordered run of symbols (the payload of a record).
pub trait Symbols {
    /// The raw symbol bytes.
    fn as_symbols(&self) -> &[u8];

    /// Number of symbols.
    fn len(&self) -> usize {
        self.as_symbols().len()
    }

    /// Whether the payload is empty.
    fn is_empty(&self) -> bool {
        self.as_symbols().is_empty()
    }
}

/// A type that carries a human-readable name.
pub trait Named {
    /// The record's name.
    fn name(&self) -> &str;
}

/// A type that renders itself as a labeled multi-line report.
pub trait Render {
    /// One `Label: value` line per field, fixed order, no trailing newline.
    fn render(&self) -> String;
}

/// A type that can produce a summary of its contents.
pub trait Summarizable {
    /// A one-line summary suitable for display.
    fn summary(&self) -> String;
}

/// A type whose identity can be derived from its content via cryptographic hash.
pub trait ContentAddressable {
    /// Return the content hash as a hex string (e.g. SHA-256).
    fn content_hash(&self) -> String;
}
