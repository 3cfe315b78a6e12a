//! Embedded sample schemes.
//!
//! The crate ships a small set of known-good keymaps so the engine is usable
//! without any external data directory. Each loader parses and validates the
//! embedded JSON.

use crate::scheme::TransliterationScheme;
use crate::store::{SchemeStore, StoreError};

pub const DEVANAGARI_ITRANS_JSON: &str = include_str!("../assets/devanagari.json");
pub const DEVANAGARI_INVERSE_JSON: &str = include_str!("../assets/rdevanagari.json");
pub const TELUGU_RTS_JSON: &str = include_str!("../assets/telugu_rts.json");
pub const TELUGU_INVERSE_JSON: &str = include_str!("../assets/rtelugu.json");

fn load(json: &str) -> Result<TransliterationScheme, StoreError> {
    let scheme: TransliterationScheme =
        serde_json::from_str(json).map_err(|source| StoreError::Parse {
            path: "<embedded>".to_string(),
            source,
        })?;
    scheme.validate().map_err(|source| StoreError::Validation {
        path: "<embedded>".to_string(),
        source,
    })?;
    Ok(scheme)
}

/// Devanagari forward scheme (ITRANS, smart virama).
pub fn devanagari_itrans() -> Result<TransliterationScheme, StoreError> {
    load(DEVANAGARI_ITRANS_JSON)
}

/// Devanagari inverse scheme (Unicode → ITRANS, smart mode).
pub fn devanagari_inverse() -> Result<TransliterationScheme, StoreError> {
    load(DEVANAGARI_INVERSE_JSON)
}

/// Telugu forward scheme (RTS, normal virama).
pub fn telugu_rts() -> Result<TransliterationScheme, StoreError> {
    load(TELUGU_RTS_JSON)
}

/// Telugu inverse scheme (Unicode → RTS, normal mode).
pub fn telugu_inverse() -> Result<TransliterationScheme, StoreError> {
    load(TELUGU_INVERSE_JSON)
}

/// Register every embedded scheme in `store`.
pub fn register_embedded(store: &SchemeStore) -> Result<(), StoreError> {
    store.register(devanagari_itrans()?);
    store.register(devanagari_inverse()?);
    store.register(telugu_rts()?);
    store.register(telugu_inverse()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::SUPPRESS_MARKER;

    #[test]
    fn embedded_schemes_validate() {
        assert!(devanagari_itrans().is_ok());
        assert!(devanagari_inverse().is_ok());
        assert!(telugu_rts().is_ok());
        assert!(telugu_inverse().is_ok());
    }

    #[test]
    fn suppress_marker_survives_json() {
        let scheme = devanagari_itrans().unwrap();
        let a = &scheme.categories["vowels"].mappings[0];
        assert_eq!(a.lhs, vec!["a"]);
        assert_eq!(a.rhs[1], SUPPRESS_MARKER);
    }

    #[test]
    fn register_embedded_exposes_all_ids() {
        let store = SchemeStore::new();
        register_embedded(&store).unwrap();
        assert_eq!(
            store.list_ids(),
            vec![
                "devanagari_itrans".to_string(),
                "devanagari_unicode".to_string(),
                "telugu_rts".to_string(),
                "telugu_unicode".to_string()
            ]
        );
    }
}
