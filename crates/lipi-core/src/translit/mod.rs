//! Forward and inverse transliteration engines.
//!
//! `Transliterator` compiles a scheme once (precedence-ordered token tables,
//! parsed rule forms, output → category map) and then converts any number of
//! inputs. Each conversion resets the engine-owned [`Context`]; the scheme
//! itself is never mutated.

mod forward;
mod reverse;
mod table;

#[cfg(test)]
mod tests;

use crate::context::Context;
use crate::scheme::TransliterationScheme;
use crate::store::SchemeStore;
use crate::virama::{ViramaError, ViramaPolicy};

#[derive(Debug, thiserror::Error)]
pub enum TranslitError {
    #[error("unknown keymap: {0:?}")]
    UnknownScheme(String),
    #[error("reversliteration requires a Unicode scheme (got {0:?})")]
    UnsupportedDirection(String),
    #[error(transparent)]
    Virama(#[from] ViramaError),
}

/// A conversion engine bound to one scheme. Reusable across conversions;
/// not shareable across threads mid-conversion (each conversion owns its
/// context).
pub struct Transliterator<'s> {
    scheme: &'s TransliterationScheme,
    policy: ViramaPolicy,
    table: table::LookupTable,
    ctx: Context,
}

impl<'s> Transliterator<'s> {
    pub fn new(scheme: &'s TransliterationScheme) -> Result<Self, ViramaError> {
        let policy = ViramaPolicy::from_metadata(&scheme.metadata.virama)?;
        let table = table::LookupTable::compile(scheme);
        Ok(Transliterator {
            scheme,
            policy,
            table,
            ctx: Context::new(),
        })
    }

    pub fn scheme(&self) -> &TransliterationScheme {
        self.scheme
    }
}

/// Resolve `id` in the store and convert `input`, choosing forward or
/// inverse semantics from the scheme kind.
pub fn transliterate_with_direction(
    store: &SchemeStore,
    id: &str,
    input: &str,
) -> Result<String, TranslitError> {
    let scheme = store
        .get(id)
        .ok_or_else(|| TranslitError::UnknownScheme(id.to_string()))?;
    let mut engine = Transliterator::new(&scheme)?;
    if scheme.is_inverse() {
        engine.reversliterate(input)
    } else {
        Ok(engine.transliterate(input))
    }
}
