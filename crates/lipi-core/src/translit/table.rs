//! Compiled lookup structures built once per engine.

use std::collections::HashMap;

use crate::context::Context;
use crate::rules::{self, Output, RhsForm};
use crate::scheme::{
    TransliterationScheme, CAT_CONJUNCTS, CAT_CONSONANTS, CAT_DIGITS, CAT_MATRAS, CAT_OTHER,
    CAT_OTHERS, CAT_VOWELS, CAT_WORD_BOUNDARY,
};

/// Single-code-point lookup order used by the inverse engine.
const INVERSE_SINGLE_ORDER: [&str; 5] = [
    CAT_CONSONANTS,
    CAT_OTHERS,
    CAT_VOWELS,
    CAT_MATRAS,
    CAT_DIGITS,
];

/// A mapping with its rhs slots parsed and the `(W)`-stripped alternate
/// precomputed.
pub(crate) struct CompiledMapping {
    pub forms: Vec<RhsForm>,
    pub boundary_alt: Option<RhsForm>,
}

struct CategoryTokens {
    name: String,
    /// lhs token → index into `LookupTable::mappings`; first declaration wins.
    tokens: HashMap<String, usize>,
}

/// A successful lookup: the winning category and the projected rhs form.
pub(crate) struct Hit<'t> {
    pub category: &'t str,
    pub form: &'t RhsForm,
}

pub(crate) struct LookupTable {
    /// Precedence-ordered category token maps.
    categories: Vec<CategoryTokens>,
    mappings: Vec<CompiledMapping>,
    /// Base output text → index into `categories`, resolved at compile time
    /// so the virama policy never sniffs raw rhs strings.
    rhs_category: HashMap<String, usize>,
    pub max_token_chars: usize,
}

impl LookupTable {
    pub fn compile(scheme: &TransliterationScheme) -> Self {
        let mut table = LookupTable {
            categories: Vec::new(),
            mappings: Vec::new(),
            rhs_category: HashMap::new(),
            max_token_chars: 0,
        };

        for name in scheme.ordered_categories() {
            let section = &scheme.categories[name];
            let cat_idx = table.categories.len();
            let mut tokens = HashMap::new();

            for mapping in &section.mappings {
                if mapping.lhs.is_empty() || mapping.rhs.is_empty() {
                    continue; // rejected by validation; never panic on data
                }
                let idx = table.mappings.len();
                let forms: Vec<RhsForm> = mapping.rhs.iter().map(|r| rules::parse_rhs(r)).collect();
                let boundary_alt = mapping
                    .rhs
                    .get(1)
                    .filter(|raw| raw.contains(rules::BOUNDARY_MARKER))
                    .map(|raw| rules::parse_rhs(&raw.replacen(rules::BOUNDARY_MARKER, "", 1)));

                for form in &forms {
                    if let Output::Emit(text) = &form.output {
                        if !text.is_empty() {
                            table.rhs_category.entry(text.clone()).or_insert(cat_idx);
                        }
                    }
                }
                for token in &mapping.lhs {
                    table.max_token_chars = table.max_token_chars.max(token.chars().count());
                    tokens.entry(token.clone()).or_insert(idx);
                }
                table.mappings.push(CompiledMapping {
                    forms,
                    boundary_alt,
                });
            }

            table.categories.push(CategoryTokens {
                name: name.to_string(),
                tokens,
            });
        }

        table
    }

    /// Forward lookup: first category in precedence order whose token table
    /// contains `window` wins; the rhs slot is projected from the context.
    pub fn lookup<'t>(&'t self, ctx: &Context, window: &str, match_len: usize) -> Option<Hit<'t>> {
        for category in &self.categories {
            let Some(&idx) = category.tokens.get(window) else {
                continue;
            };
            let mapping = &self.mappings[idx];

            if mapping.forms.len() > 1 {
                if let Some(alt) = &mapping.boundary_alt {
                    if ctx.is_separator(match_len) {
                        return Some(Hit {
                            category: CAT_WORD_BOUNDARY,
                            form: alt,
                        });
                    }
                } else if category.name == CAT_VOWELS && ctx.latest.category == CAT_CONSONANTS {
                    // Dependent (matra) form after a consonant
                    return Some(Hit {
                        category: category.name.as_str(),
                        form: &mapping.forms[1],
                    });
                }
            }

            return Some(Hit {
                category: category.name.as_str(),
                form: &mapping.forms[0],
            });
        }
        None
    }

    /// Category of an output string, for the virama policy's look-ahead.
    pub fn category_of_output(&self, output: &str) -> &str {
        self.rhs_category
            .get(output)
            .map(|&idx| self.categories[idx].name.as_str())
            .unwrap_or(CAT_OTHER)
    }

    /// Longest conjunct (multi-code-point) match at `chars[start..]`.
    pub fn conjunct_match<'t>(
        &'t self,
        chars: &[char],
        start: usize,
    ) -> Option<(usize, &'t str, &'t RhsForm)> {
        let category = self.categories.iter().find(|c| c.name == CAT_CONJUNCTS)?;
        let max_len = (chars.len() - start).min(self.max_token_chars);
        for len in (2..=max_len).rev() {
            let window: String = chars[start..start + len].iter().collect();
            if let Some(&idx) = category.tokens.get(&window) {
                return Some((len, category.name.as_str(), &self.mappings[idx].forms[0]));
            }
        }
        None
    }

    /// Single-code-point lookup in the inverse engine's category order.
    pub fn single_match<'t>(&'t self, c: char) -> Option<(&'t str, &'t RhsForm)> {
        let token = c.to_string();
        for name in INVERSE_SINGLE_ORDER {
            let Some(category) = self.categories.iter().find(|cat| cat.name == name) else {
                continue;
            };
            if let Some(&idx) = category.tokens.get(&token) {
                return Some((category.name.as_str(), &self.mappings[idx].forms[0]));
            }
        }
        None
    }

    /// Category of a single code point under the inverse lookup order, used
    /// for the "is the next code point a matra?" test.
    pub fn single_category(&self, c: char) -> Option<&str> {
        self.single_match(c).map(|(category, _)| category)
    }
}
