//! Keymap-driven transliteration between Latin romanizations (ITRANS, RTS)
//! and Indic Unicode scripts, plus the inverse direction for `Unicode`
//! schemes.
//!
//! The engine is a greedy longest-match scanner over the input with a small
//! context-carrying state machine that governs matra selection and virama
//! insertion. Keymaps are declarative JSON data; a legacy textual dialect is
//! supported for import.

pub mod akt;
pub mod context;
pub mod defaults;
pub mod rules;
pub mod scheme;
pub mod store;
pub mod translit;
pub mod unicode;
pub mod virama;

pub use context::Context;
pub use rules::{ContextRule, Output, RhsForm};
pub use scheme::{Mapping, Metadata, Section, TransliterationScheme, ValidationError};
pub use store::{SchemeStore, StoreError};
pub use translit::{transliterate_with_direction, TranslitError, Transliterator};
pub use virama::{ViramaError, ViramaMode, ViramaPolicy};
