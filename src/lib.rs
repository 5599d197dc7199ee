//! UAST ⇄ Indic-script transliteration engine.
//!
//! Converts between the UAST Latin-ASCII notation, IAST, SLP1, Devanagari
//! and six regional Indic scripts. Every conversion is a short chain of
//! pure per-scheme passes picked from a flat (from, to) routing table; the
//! engine holds no state beyond lazily built, read-only lookup tables and
//! is safe for unlimited concurrent callers.
//!
//! ```
//! use uast_engine::{convert, Scheme, Script};
//!
//! let deva = convert(Scheme::Uast, Scheme::Script(Script::Devanagari), "r/a/ma");
//! assert_eq!(deva, "राम");
//! ```

pub mod bridge;
mod cursor;
pub mod devanagari;
pub mod encode;
pub mod escape;
pub mod iast;
pub mod pipeline;
pub mod scheme;
pub mod slp;
pub mod tables;
pub mod trace_init;

pub use pipeline::{convert, convert_token, route, Pass};
pub use scheme::{Scheme, Script, UnknownScheme};
