//! Shared primitives and traits for the Lobelia record toolkit.
//!
//! `lobelia-core` provides the foundation the domain crates build on:
//!
//! - **Error types** — [`LobeliaError`] and [`Result`] for structured error handling
//! - **Traits** — The record capability contracts: [`Symbols`], [`Named`],
//!   [`Render`], [`Summarizable`], [`ContentAddressable`]
//! - **Hashing** — SHA-256 content addressing for record identity

pub mod error;
pub mod hash;
pub mod traits;

pub use error::{LobeliaError, Result};
pub use traits::*;
