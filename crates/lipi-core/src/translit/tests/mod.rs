mod forward;

use crate::defaults;
use crate::scheme::TransliterationScheme;
use crate::translit::Transliterator;

pub(crate) fn devanagari() -> TransliterationScheme {
    defaults::devanagari_itrans().expect("embedded scheme")
}

pub(crate) fn devanagari_inverse() -> TransliterationScheme {
    defaults::devanagari_inverse().expect("embedded scheme")
}

/// The inverse scheme with its mode switched to `normal`.
pub(crate) fn devanagari_inverse_normal() -> TransliterationScheme {
    let mut scheme = devanagari_inverse();
    scheme.metadata.virama = "a, normal".to_string();
    scheme
}

pub(crate) fn telugu() -> TransliterationScheme {
    defaults::telugu_rts().expect("embedded scheme")
}

pub(crate) fn telugu_inverse() -> TransliterationScheme {
    defaults::telugu_inverse().expect("embedded scheme")
}

pub(crate) fn forward(scheme: &TransliterationScheme, input: &str) -> String {
    let mut engine = Transliterator::new(scheme).expect("engine");
    engine.transliterate(input)
}

pub(crate) fn inverse(scheme: &TransliterationScheme, input: &str) -> String {
    let mut engine = Transliterator::new(scheme).expect("engine");
    engine.reversliterate(input).expect("inverse conversion")
}
