//! The forward (Latin → script) scanner.

use crate::rules::Output;
use crate::scheme::{CAT_OTHER, CAT_WORD_BOUNDARY};

use super::Transliterator;

impl Transliterator<'_> {
    /// Convert romanized input to the scheme's script.
    ///
    /// Total over all inputs: characters matching no mapping are copied to
    /// the output verbatim, and the cursor advances by at least one code
    /// point per step.
    pub fn transliterate(&mut self, input: &str) -> String {
        self.ctx.reset(input);
        let mut out = String::with_capacity(input.len());
        let len = self.ctx.input_len();
        let mut i = 0;

        while i < len {
            self.ctx.position = i;
            let c = self.ctx.char_at(i);

            if c == ' ' {
                let (write_virama, write_space) = self.policy.on_space(&self.ctx);
                if write_virama {
                    out.push(self.policy.virama());
                }
                if write_space {
                    out.push(' ');
                }
                self.ctx.note(" ", CAT_OTHER, 1);
                i += 1;
                continue;
            }

            // Greedy longest match, bounded by the longest known token
            let mut advance = 0;
            let max_window = (len - i).min(self.table.max_token_chars);
            for window_len in (1..=max_window).rev() {
                let window = self.ctx.window(i, window_len);
                let Some(hit) = self.table.lookup(&self.ctx, &window, window_len) else {
                    continue;
                };

                match &hit.form.output {
                    Output::Suppress => {
                        // Emit nothing, but record the lookup so the virama
                        // policy sees the category change.
                        self.ctx.note("", hit.category, window_len);
                    }
                    Output::Emit(base) => {
                        if hit.category != CAT_WORD_BOUNDARY {
                            let next_category = self.table.category_of_output(base);
                            if self.policy.should_insert_before(&self.ctx, base, next_category) {
                                out.push(self.policy.virama());
                            }
                        }
                        out.push_str(base);
                        self.ctx.apply_rules(&hit.form.rules, window_len, &mut out);
                        self.ctx.note(base.clone(), hit.category, window_len);
                    }
                }
                advance = window_len;
                break;
            }

            if advance == 0 {
                // Passthrough for unmatched characters
                out.push(c);
                self.ctx.note(c.to_string(), CAT_OTHER, 1);
                advance = 1;
            }
            i += advance;
        }

        if self.policy.on_end_of_input(&self.ctx) {
            out.push(self.policy.virama());
        }
        out
    }
}
