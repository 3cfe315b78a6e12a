//! The inverse (script → Latin) walker.

use crate::rules::Output;
use crate::scheme::{CAT_CONJUNCTS, CAT_CONSONANTS, CAT_MATRAS, CAT_OTHER};
use crate::virama::ViramaMode;

use super::{TranslitError, Transliterator};

impl Transliterator<'_> {
    /// Reconstruct romanization from Unicode text.
    ///
    /// Defined only for schemes whose kind is `Unicode`; anything else is an
    /// unsupported direction. Conjunct matches are attempted first, then
    /// single code points; unmatched code points pass through.
    pub fn reversliterate(&mut self, input: &str) -> Result<String, TranslitError> {
        if !self.scheme.is_inverse() {
            return Err(TranslitError::UnsupportedDirection(
                self.scheme.scheme.clone(),
            ));
        }

        self.ctx.reset(input);
        let mut out = String::with_capacity(input.len());
        let len = self.ctx.input_len();
        let mut i = 0;

        while i < len {
            self.ctx.position = i;
            let c = self.ctx.char_at(i);

            let hit = self
                .table
                .conjunct_match(self.ctx.input(), i)
                .or_else(|| self.table.single_match(c).map(|(cat, form)| (1, cat, form)));

            let Some((match_len, category, form)) = hit else {
                out.push(c);
                self.ctx.note(c.to_string(), CAT_OTHER, 1);
                i += 1;
                continue;
            };

            match category {
                CAT_CONSONANTS | CAT_CONJUNCTS => {
                    out.push_str(form.output.text());
                    let next_is_matra = i + match_len < len
                        && self.table.single_category(self.ctx.char_at(i + match_len))
                            == Some(CAT_MATRAS);
                    if !next_is_matra {
                        // Reinsert the implicit vowel: unconditionally in
                        // normal mode, word-internally in smart mode.
                        match self.policy.mode() {
                            ViramaMode::Normal => out.push(self.policy.virama()),
                            ViramaMode::Smart => {
                                if !self.ctx.is_separator(match_len) {
                                    out.push('a');
                                }
                            }
                            ViramaMode::Double | ViramaMode::Repeat => {}
                        }
                    }
                }
                CAT_MATRAS => {
                    if let Output::Emit(text) = &form.output {
                        out.push_str(text);
                    }
                }
                _ => out.push_str(form.output.text()),
            }

            self.ctx
                .note(form.output.text().to_string(), category.to_string(), match_len);
            i += match_len;
        }

        Ok(out)
    }
}
