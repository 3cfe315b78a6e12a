//! Virama configuration and the insertion policy.
//!
//! A scheme's `metadata.virama` names the vowel-suppression character and a
//! mode (`"0x094D, smart"`). The policy answers the three questions the
//! forward engine asks: insert before the next emission? insert before a
//! space? insert at end-of-input?

use crate::context::Context;
use crate::scheme::CAT_CONSONANTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViramaMode {
    /// Insert after every consonant not followed by a vowel, including at
    /// end-of-input and before spaces.
    Normal,
    /// Insert only between adjacent consonants; omit at word boundaries.
    Smart,
    /// Insert only between identical consonants.
    Double,
    /// Alias of [`ViramaMode::Double`] kept for legacy keymaps.
    Repeat,
}

impl ViramaMode {
    fn parse(mode: &str) -> Option<Self> {
        match mode {
            "normal" => Some(ViramaMode::Normal),
            "smart" => Some(ViramaMode::Smart),
            "double" => Some(ViramaMode::Double),
            "repeat" => Some(ViramaMode::Repeat),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViramaError {
    #[error("invalid virama metadata (expected \"<char-or-0xHEX>,<mode>\"): {0:?}")]
    Malformed(String),
    #[error("invalid Unicode code point in virama metadata: {0:?}")]
    BadCodePoint(String),
    #[error("virama must be a single character: {0:?}")]
    NotSingleChar(String),
    #[error("unrecognized virama mode: {0:?}")]
    UnknownMode(String),
}

/// Parse a `"<char-or-0xHEX>,<mode>"` metadata value.
pub fn parse_virama(metadata: &str) -> Result<(char, ViramaMode), ViramaError> {
    let parts: Vec<&str> = metadata
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect();
    if parts.len() != 2 {
        return Err(ViramaError::Malformed(metadata.to_string()));
    }

    let mode =
        ViramaMode::parse(parts[1]).ok_or_else(|| ViramaError::UnknownMode(parts[1].to_string()))?;

    let virama = if let Some(hex) = parts[0].strip_prefix("0x") {
        u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| ViramaError::BadCodePoint(parts[0].to_string()))?
    } else {
        let mut chars = parts[0].chars();
        let first = chars
            .next()
            .ok_or_else(|| ViramaError::Malformed(metadata.to_string()))?;
        if chars.next().is_some() {
            return Err(ViramaError::NotSingleChar(parts[0].to_string()));
        }
        first
    };

    Ok((virama, mode))
}

/// Decision procedure for virama insertion, built once per conversion engine.
#[derive(Debug, Clone, Copy)]
pub struct ViramaPolicy {
    virama: char,
    mode: ViramaMode,
}

impl ViramaPolicy {
    pub fn from_metadata(metadata: &str) -> Result<Self, ViramaError> {
        let (virama, mode) = parse_virama(metadata)?;
        Ok(ViramaPolicy { virama, mode })
    }

    pub fn virama(&self) -> char {
        self.virama
    }

    pub fn mode(&self) -> ViramaMode {
        self.mode
    }

    /// Should a virama be written before the next emission? Only ever true
    /// when the previous emission was a consonant.
    pub fn should_insert_before(
        &self,
        ctx: &Context,
        next_output: &str,
        next_category: &str,
    ) -> bool {
        if ctx.latest.category != CAT_CONSONANTS {
            return false;
        }
        match self.mode {
            ViramaMode::Smart => next_category == CAT_CONSONANTS,
            ViramaMode::Normal => next_output == " " || next_category == CAT_CONSONANTS,
            // Gemination fallback
            ViramaMode::Double | ViramaMode::Repeat => ctx.latest.output == next_output,
        }
    }

    /// Handle a literal space: `(write_virama, write_space)`.
    pub fn on_space(&self, ctx: &Context) -> (bool, bool) {
        if self.mode == ViramaMode::Normal && ctx.latest.category == CAT_CONSONANTS {
            (true, true)
        } else {
            (false, true)
        }
    }

    /// Should a trailing virama be written once the input is consumed?
    pub fn on_end_of_input(&self, ctx: &Context) -> bool {
        self.mode == ViramaMode::Normal && ctx.latest.category == CAT_CONSONANTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::{CAT_OTHER, CAT_VOWELS};

    #[test]
    fn parse_hex_form() {
        assert_eq!(
            parse_virama("0x094D,smart"),
            Ok(('\u{094D}', ViramaMode::Smart))
        );
    }

    #[test]
    fn parse_literal_form() {
        assert_eq!(parse_virama("्,normal"), Ok(('्', ViramaMode::Normal)));
        assert_eq!(parse_virama("a, smart"), Ok(('a', ViramaMode::Smart)));
    }

    #[test]
    fn parse_trims_whitespace() {
        assert_eq!(
            parse_virama(" 0x0C4D , normal "),
            Ok(('\u{0C4D}', ViramaMode::Normal))
        );
    }

    #[test]
    fn reject_multi_char_literal() {
        assert!(matches!(
            parse_virama("abcd,smart"),
            Err(ViramaError::NotSingleChar(_))
        ));
    }

    #[test]
    fn reject_bad_hex() {
        assert!(matches!(
            parse_virama("0xZZZZ,smart"),
            Err(ViramaError::BadCodePoint(_))
        ));
        assert!(matches!(
            parse_virama("0x110000,smart"),
            Err(ViramaError::BadCodePoint(_))
        ));
    }

    #[test]
    fn reject_missing_mode() {
        assert!(matches!(
            parse_virama("no_comma"),
            Err(ViramaError::Malformed(_))
        ));
        assert!(matches!(parse_virama(""), Err(ViramaError::Malformed(_))));
    }

    #[test]
    fn reject_unknown_mode() {
        assert!(matches!(
            parse_virama("0x094D,clever"),
            Err(ViramaError::UnknownMode(_))
        ));
    }

    fn ctx_after(output: &str, category: &str) -> Context {
        let mut ctx = Context::new();
        ctx.reset("");
        ctx.note(output, category, 1);
        ctx
    }

    #[test]
    fn smart_inserts_only_between_consonants() {
        let policy = ViramaPolicy::from_metadata("0x094D,smart").unwrap();
        let after_k = ctx_after("क", CAT_CONSONANTS);
        assert!(policy.should_insert_before(&after_k, "क", CAT_CONSONANTS));
        assert!(!policy.should_insert_before(&after_k, " ", CAT_OTHER));
        assert!(!policy.should_insert_before(&after_k, "ा", CAT_VOWELS));

        let after_vowel = ctx_after("अ", CAT_VOWELS);
        assert!(!policy.should_insert_before(&after_vowel, "क", CAT_CONSONANTS));
    }

    #[test]
    fn normal_inserts_before_space_too() {
        let policy = ViramaPolicy::from_metadata("0x094D,normal").unwrap();
        let after_k = ctx_after("क", CAT_CONSONANTS);
        assert!(policy.should_insert_before(&after_k, " ", CAT_OTHER));
        assert!(policy.should_insert_before(&after_k, "क", CAT_CONSONANTS));
        assert_eq!(policy.on_space(&after_k), (true, true));
        assert!(policy.on_end_of_input(&after_k));
    }

    #[test]
    fn smart_space_and_end_are_bare() {
        let policy = ViramaPolicy::from_metadata("0x094D,smart").unwrap();
        let after_k = ctx_after("क", CAT_CONSONANTS);
        assert_eq!(policy.on_space(&after_k), (false, true));
        assert!(!policy.on_end_of_input(&after_k));
    }

    #[test]
    fn double_mode_requires_gemination() {
        let policy = ViramaPolicy::from_metadata("0x094D,double").unwrap();
        let after_k = ctx_after("क", CAT_CONSONANTS);
        assert!(policy.should_insert_before(&after_k, "क", CAT_CONSONANTS));
        assert!(!policy.should_insert_before(&after_k, "ग", CAT_CONSONANTS));
    }
}
