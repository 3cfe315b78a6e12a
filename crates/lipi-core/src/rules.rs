//! Contextual-rule markup embedded in mapping outputs.
//!
//! A right-hand-side value may carry parenthesized tags that are not part of
//! the emitted text: `(c)` replaces the last output character, `(W)`
//! conditions the rule on a following separator, a single uppercase tag
//! requires the conversion context to equal that tag, and any other tag sets
//! the context. Bare text after a tag is that rule's modification payload.
//!
//! Values are parsed once at keymap compile time; the engines only ever see
//! the parsed form.

use tracing::warn;

/// The NUL sentinel used by keymap data for "record the lookup, emit nothing".
pub const SUPPRESS_MARKER: &str = "\u{0}";

/// Marker on a second rhs slot selecting the word-boundary alternate.
pub const BOUNDARY_MARKER: &str = "(W)";

/// What a mapping emits once its rule markup has been stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Output {
    Emit(String),
    /// The lookup is recorded (so virama logic sees it) but nothing is
    /// written to the output.
    Suppress,
}

impl Output {
    pub fn text(&self) -> &str {
        match self {
            Output::Emit(text) => text,
            Output::Suppress => "",
        }
    }

    pub fn is_suppress(&self) -> bool {
        matches!(self, Output::Suppress)
    }
}

/// One parsed rule atom plus its trailing modification text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextRule {
    /// `(c)`: replace the last character of the accumulated output with the
    /// modification.
    pub change_previous: bool,
    /// `(W)`: the rule applies only when the position after the current
    /// match is a separator or end-of-input.
    pub separator_required: bool,
    /// `(M)`-style single uppercase tag: the rule applies only while the
    /// conversion context equals this tag.
    pub required_context: Option<String>,
    /// Any other tag: set the conversion context after applying.
    pub set_context: Option<String>,
    /// Text appended (or substituted, for `change_previous`) when the rule
    /// applies.
    pub modification: String,
}

/// A single rhs slot: base output plus the rules that were embedded in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhsForm {
    pub output: Output,
    pub rules: Vec<ContextRule>,
}

fn rule_for_tag(tag: &str) -> Option<ContextRule> {
    let mut chars = tag.chars();
    let first = chars.next()?;
    let single = chars.next().is_none();
    if single && first == 'c' {
        return Some(ContextRule {
            change_previous: true,
            ..ContextRule::default()
        });
    }
    if single && first == 'W' {
        return Some(ContextRule {
            separator_required: true,
            ..ContextRule::default()
        });
    }
    if single && first.is_uppercase() {
        return Some(ContextRule {
            required_context: Some(tag.to_string()),
            ..ContextRule::default()
        });
    }
    Some(ContextRule {
        set_context: Some(tag.to_string()),
        ..ContextRule::default()
    })
}

/// Parse one rhs value into its base output and embedded rules.
///
/// Text before the first tag is the base output; text after a tag becomes
/// that rule's modification. A lone NUL value is the suppress sentinel.
/// Malformed markup (an unclosed parenthesis) is kept as literal text.
pub fn parse_rhs(raw: &str) -> RhsForm {
    if raw == SUPPRESS_MARKER {
        return RhsForm {
            output: Output::Suppress,
            rules: Vec::new(),
        };
    }

    let mut base = String::new();
    let mut rules: Vec<ContextRule> = Vec::new();
    let mut rest = raw;

    while let Some(open) = rest.find('(') {
        let (text, after_open) = (&rest[..open], &rest[open + 1..]);
        append_text(&mut base, &mut rules, text);

        let Some(close) = after_open.find(')') else {
            warn!(value = raw, "unclosed context tag in rhs value; kept literally");
            append_text(&mut base, &mut rules, &rest[open..]);
            rest = "";
            break;
        };
        if let Some(rule) = rule_for_tag(&after_open[..close]) {
            rules.push(rule);
        }
        rest = &after_open[close + 1..];
    }
    append_text(&mut base, &mut rules, rest);

    RhsForm {
        output: Output::Emit(base),
        rules,
    }
}

fn append_text(base: &mut String, rules: &mut [ContextRule], text: &str) {
    if text.is_empty() {
        return;
    }
    match rules.last_mut() {
        Some(rule) => rule.modification.push_str(text),
        None => base.push_str(text),
    }
}
