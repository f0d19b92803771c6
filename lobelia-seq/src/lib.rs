//! Validated symbol records over runtime alphabets.
//!
//! Provides strongly-typed records whose payload is checked against a
//! per-record [`Alphabet`] at every construction and update:
//!
//! - **Alphabets** — [`Alphabet`] runtime values with DNA/RNA/protein presets
//! - **Records** — the smart-constructed [`SeqRecord`], and [`DnaRecord`]
//!   composing it with an adapter
//! - **Capabilities** — [`SeqOps`] (`reverse`, `subseq`) over the shared
//!   `Symbols`/`Named`/`Render` contracts
//! - **Expansion** — the open [`expand`] dispatch with the numeric
//!   [`index_run`] fallback
//!
//! # Example
//!
//! ```
//! use lobelia_core::{Named, Symbols};
//! use lobelia_seq::{Alphabet, SeqOps, SeqRecord};
//!
//! // Lowercased input is normalized, then validated against the alphabet
//! let record = SeqRecord::new("reads-1", Alphabet::dna(), b"attaaaggg").unwrap();
//! assert_eq!(record.as_symbols(), b"ATTAAAGGG");
//! assert_eq!(record.len(), 9);
//!
//! // Transforms return a fresh validated record
//! let reversed = record.reverse().unwrap();
//! assert_eq!(reversed.as_symbols(), b"GGGAAATTA");
//! assert_eq!(reversed.name(), "reads-1--reversed");
//!
//! let head = record.subseq(0..3).unwrap();
//! assert_eq!(head.as_symbols(), b"ATT");
//!
//! // A symbol outside the alphabet never constructs
//! assert!(SeqRecord::new("bad", Alphabet::dna(), b"ACGX").is_err());
//! ```

pub mod alphabet;
pub mod dna;
pub mod expand;
pub mod ops;
pub mod record;

// Re-export alphabet and record types
pub use alphabet::Alphabet;
pub use dna::DnaRecord;
pub use record::SeqRecord;

// Re-export the capability trait
pub use ops::SeqOps;

// Re-export expansion dispatch
pub use expand::{expand, index_run, Expand};
