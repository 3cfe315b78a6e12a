use super::{devanagari, forward, telugu};
use crate::scheme::{Mapping, Metadata, Section, TransliterationScheme};
use crate::store::SchemeStore;
use crate::translit::{transliterate_with_direction, TranslitError, Transliterator};

#[test]
fn namaste() {
    assert_eq!(forward(&devanagari(), "namaste"), "नमस्ते");
}

#[test]
fn smart_virama_joins_consonant_cluster() {
    assert_eq!(forward(&devanagari(), "kk"), "क्क");
}

#[test]
fn implicit_vowel_is_absorbed() {
    assert_eq!(forward(&devanagari(), "ka"), "क");
}

#[test]
fn digits_interleave_with_letters() {
    assert_eq!(forward(&devanagari(), "a1k"), "अ१क");
}

#[test]
fn empty_input() {
    assert_eq!(forward(&devanagari(), ""), "");
}

#[test]
fn sentence_with_anusvara_and_danda() {
    assert_eq!(
        forward(&devanagari(), "yah ek su.ndar din hai."),
        "यह एक सुंदर दिन है।"
    );
}

#[test]
fn matra_follows_consonant() {
    assert_eq!(forward(&devanagari(), "ki"), "कि");
    assert_eq!(forward(&devanagari(), "kaa"), "का");
    assert_eq!(forward(&devanagari(), "kii"), "की");
}

#[test]
fn full_vowel_at_word_start() {
    assert_eq!(forward(&devanagari(), "aaj"), "आज");
    assert_eq!(forward(&devanagari(), "i"), "इ");
}

#[test]
fn greedy_match_prefers_longest_token() {
    // "ai" must win over "a" + "i"
    assert_eq!(forward(&devanagari(), "hai"), "है");
    // "kh" must win over "k" + "h"
    assert_eq!(forward(&devanagari(), "kha"), "ख");
}

#[test]
fn conjunct_tokens_resolve() {
    assert_eq!(forward(&devanagari(), "ksha"), "क्ष");
    assert_eq!(forward(&devanagari(), "xa"), "क्ष");
}

#[test]
fn unmatched_characters_pass_through() {
    assert_eq!(forward(&devanagari(), "kzza"), "कzzअ");
    assert_eq!(forward(&devanagari(), "Зк"), "Зк");
}

#[test]
fn normal_mode_appends_trailing_virama() {
    assert_eq!(forward(&telugu(), "daas"), "దాస్");
}

#[test]
fn word_boundary_alternate_fires_at_end() {
    assert_eq!(forward(&telugu(), "jeevitam"), "జీవితం");
}

#[test]
fn word_boundary_alternate_fires_before_space() {
    assert_eq!(forward(&telugu(), "jeevitam kada"), "జీవితం కద");
}

#[test]
fn word_boundary_alternate_skipped_mid_word() {
    // The same "m" mid-word stays a plain consonant
    assert_eq!(forward(&telugu(), "amma"), "అమ్మ");
}

#[test]
fn normal_mode_virama_before_space() {
    assert_eq!(forward(&telugu(), "daas daas"), "దాస్ దాస్");
}

#[test]
fn engine_is_reusable_across_conversions() {
    let scheme = devanagari();
    let mut engine = Transliterator::new(&scheme).unwrap();
    assert_eq!(engine.transliterate("namaste"), "नमस्ते");
    // A second run must start from a clean context
    assert_eq!(engine.transliterate("ka"), "क");
    assert_eq!(engine.transliterate("a"), "अ");
}

#[test]
fn dispatch_by_scheme_kind() {
    let store = SchemeStore::new();
    crate::defaults::register_embedded(&store).unwrap();

    assert_eq!(
        transliterate_with_direction(&store, "devanagari_itrans", "namaste").unwrap(),
        "नमस्ते"
    );
    assert_eq!(
        transliterate_with_direction(&store, "devanagari_unicode", "नमस्ते").unwrap(),
        "namaste"
    );
    assert!(matches!(
        transliterate_with_direction(&store, "missing", "x"),
        Err(TranslitError::UnknownScheme(_))
    ));
}

fn tiny_scheme(virama: &str) -> TransliterationScheme {
    TransliterationScheme {
        id: "tiny".into(),
        name: "Tiny".into(),
        language: "Hindi".into(),
        scheme: "ITRANS".into(),
        metadata: Metadata {
            virama: virama.into(),
            ..Metadata::default()
        },
        categories: [
            (
                "consonants".to_string(),
                Section::from(vec![
                    Mapping::new(&["n"], &["न"]),
                    Mapping::new(&["m"], &["म"]),
                    Mapping::new(&["s"], &["स"]),
                    Mapping::new(&["t"], &["त"]),
                ]),
            ),
            (
                "vowels".to_string(),
                Section::from(vec![
                    Mapping::new(&["a"], &["अ", "\u{0}"]),
                    Mapping::new(&["e"], &["ए", "े"]),
                ]),
            ),
        ]
        .into(),
        ..TransliterationScheme::default()
    }
}

#[test]
fn minimal_inline_scheme_converts_namaste() {
    assert_eq!(forward(&tiny_scheme("0x094D, smart"), "namaste"), "नमस्ते");
}

#[test]
fn double_mode_only_joins_geminates() {
    let scheme = tiny_scheme("0x094D, double");
    assert_eq!(forward(&scheme, "nn"), "न्न");
    assert_eq!(forward(&scheme, "nm"), "नम");
}

#[test]
fn cross_category_lhs_resolved_by_precedence() {
    let mut scheme = tiny_scheme("0x094D, smart");
    // "n" also declared in a later category; consonants must win
    scheme.categories.insert(
        "others".to_string(),
        Section::from(vec![Mapping::new(&["n"], &["ं"])]),
    );
    assert_eq!(forward(&scheme, "n"), "न");
}
