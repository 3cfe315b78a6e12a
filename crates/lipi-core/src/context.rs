//! Per-conversion mutable state.

use crate::rules::ContextRule;
use crate::unicode;

/// Record of the most recent successful emission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LookupRecord {
    pub output: String,
    pub category: String,
    pub match_len: usize,
}

/// Conversion-scoped state: the last emission, the user-level context tag
/// set by `(x)`-style rules, and the cursor into the input. Owned by a
/// single engine and reset at the start of every conversion.
#[derive(Debug, Default)]
pub struct Context {
    pub latest: LookupRecord,
    pub current_context: String,
    input: Vec<char>,
    pub position: usize,
}

impl Context {
    pub fn new() -> Self {
        Context::default()
    }

    /// Clear all state and adopt a new input.
    pub fn reset(&mut self, input: &str) {
        self.latest = LookupRecord::default();
        self.current_context.clear();
        self.input = input.chars().collect();
        self.position = 0;
    }

    pub fn input(&self) -> &[char] {
        &self.input
    }

    pub fn input_len(&self) -> usize {
        self.input.len()
    }

    pub fn char_at(&self, index: usize) -> char {
        self.input[index]
    }

    /// The input window of `len` code points starting at `start`.
    pub fn window(&self, start: usize, len: usize) -> String {
        self.input[start..start + len].iter().collect()
    }

    /// Record an emission so later lookups can see it.
    pub fn note(&mut self, output: impl Into<String>, category: impl Into<String>, match_len: usize) {
        self.latest = LookupRecord {
            output: output.into(),
            category: category.into(),
            match_len,
        };
    }

    /// Is the position immediately after the current match a separator
    /// (or end-of-input)?
    pub fn is_separator(&self, match_len: usize) -> bool {
        let next = self.position + match_len;
        next >= self.input.len() || unicode::is_separator(self.input[next])
    }

    /// Evaluate parsed rules against the output buffer. Rules whose
    /// preconditions fail are skipped; the rest run left-to-right.
    pub fn apply_rules(&mut self, rules: &[ContextRule], match_len: usize, out: &mut String) {
        for rule in rules {
            if rule.separator_required && !self.is_separator(match_len) {
                continue;
            }
            if let Some(required) = &rule.required_context {
                if self.current_context != *required {
                    continue;
                }
            }
            if rule.change_previous {
                out.pop();
                out.push_str(&rule.modification);
            } else if !rule.modification.is_empty() {
                out.push_str(&rule.modification);
            }
            if let Some(tag) = &rule.set_context {
                self.current_context = tag.clone();
            }
        }
    }
}
