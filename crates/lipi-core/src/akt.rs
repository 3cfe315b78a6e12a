//! Import of the legacy line-oriented keymap format.
//!
//! The legacy dialect mixes metadata (`#key = value`), section headers
//! (`#Name#`), pseudo-sections (`// =*= Name =*=`), comments, and mapping
//! lines. Right-hand-side tokens may spell code points as `0xHEX` groups and
//! use square brackets for context markers; both are rewritten to the
//! canonical in-memory form at import time.

use tracing::debug;

use crate::scheme::{Section, TransliterationScheme};

/// End-of-file marker; optional and equivalent to end-of-input.
const END_MARKER: &str = "#end";

const DEFAULT_VERSION: &str = "2025.1";
const DEFAULT_LICENSE: &str = "AGPL-3.0-or-later";

/// Result of a legacy import. Missing mandatory fields are substituted with
/// placeholders *and* reported, so callers can surface them without losing
/// the parsed data.
#[derive(Debug)]
pub struct AktImport {
    pub scheme: TransliterationScheme,
    pub missing_fields: Vec<&'static str>,
}

#[derive(Debug, thiserror::Error)]
pub enum AktError {
    #[error("no categories found in legacy keymap")]
    NoCategories,
}

/// Parse legacy keymap text into a scheme.
pub fn parse_akt(source: &str) -> Result<AktImport, AktError> {
    let mut scheme = TransliterationScheme {
        version: DEFAULT_VERSION.to_string(),
        license: DEFAULT_LICENSE.to_string(),
        ..TransliterationScheme::default()
    };
    let mut current: Option<String> = None;

    for raw_line in source.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case(END_MARKER) {
            break;
        }

        if let Some(rest) = line.strip_prefix('#') {
            if let Some((key, value)) = rest.split_once('=') {
                apply_metadata(&mut scheme, key.trim(), value.trim());
            } else if let Some(name) = rest.strip_suffix('#').filter(|n| !n.is_empty()) {
                current = Some(name.to_string());
                scheme.categories.entry(name.to_string()).or_default();
            } else {
                debug!(line, "skipping unrecognized directive");
            }
            continue;
        }

        if let Some(rest) = line.strip_prefix("//") {
            let text = rest.trim();
            if let Some(name) = pseudo_section_name(text) {
                current = Some(name.clone());
                scheme.categories.entry(name).or_default();
            } else {
                match &current {
                    Some(category) => {
                        if let Some(section) = scheme.categories.get_mut(category) {
                            section.comments.push(text.to_string());
                        }
                    }
                    None => scheme.comments.push(text.to_string()),
                }
            }
            continue;
        }

        // Mapping line; lines outside any section are dropped.
        let Some(category) = &current else {
            debug!(line, "skipping mapping outside any section");
            continue;
        };
        let Some(section) = scheme.categories.get_mut(category) else {
            continue;
        };
        parse_mapping_line(line, section);
    }

    if scheme.categories.is_empty() {
        return Err(AktError::NoCategories);
    }

    let missing_fields = substitute_placeholders(&mut scheme);
    Ok(AktImport {
        scheme,
        missing_fields,
    })
}

/// `// =*= Name =*=` → pseudo-category `name` (first word, lower-cased).
fn pseudo_section_name(text: &str) -> Option<String> {
    let inner = text.strip_prefix("=*=")?.strip_suffix("=*=")?.trim();
    let first = inner.split_whitespace().next()?;
    Some(first.to_lowercase())
}

fn apply_metadata(scheme: &mut TransliterationScheme, key: &str, value: &str) {
    let value = value.trim_end_matches('#').trim();
    match key.to_lowercase().as_str() {
        "id" => scheme.id = value.to_string(),
        "name" => scheme.name = value.to_string(),
        "language" => scheme.language = value.to_string(),
        "scheme" => scheme.scheme = value.to_string(),
        "version" => scheme.version = value.to_string(),
        "license" => scheme.license = value.to_string(),
        "virama" => scheme.metadata.virama = value.to_string(),
        "font_name" => scheme.metadata.font_name = value.to_string(),
        "font_size" => {
            if let Ok(size) = value.parse() {
                scheme.metadata.font_size = size;
            }
        }
        "icon_enabled" => scheme.metadata.icon_enabled = value.to_string(),
        "icon_disabled" => scheme.metadata.icon_disabled = value.to_string(),
        other => debug!(key = other, "skipping unrecognized metadata key"),
    }
}

fn parse_mapping_line(line: &str, section: &mut Section) {
    let (body, comment) = match line.find("//") {
        Some(pos) => (line[..pos].trim(), line[pos + 2..].trim()),
        None => (line, ""),
    };

    let mut fields = body.split_whitespace();
    let Some(lhs) = fields.next() else {
        return;
    };
    let rhs: Vec<String> = fields.map(transform_token).collect();

    if rhs.is_empty() {
        // Standalone token: an alternate spelling for the previous mapping
        section.append_lhs_to_last(transform_token(lhs));
        return;
    }
    section.add_mapping(
        vec![transform_token(lhs)],
        rhs,
        normalize_comment(comment),
    );
}

fn normalize_comment(comment: &str) -> String {
    let comment = comment.trim();
    comment
        .strip_prefix("=*=")
        .and_then(|c| c.strip_suffix("=*="))
        .unwrap_or(comment)
        .trim()
        .to_string()
}

fn transform_token(token: &str) -> String {
    expand_unicode(&rewrite_brackets(token))
}

/// Rewrite legacy context markers `[`/`]` to parentheses, preserving the
/// escape sequences `\[`, `\]`, `\{`, `\}` and `\\` verbatim.
fn rewrite_brackets(token: &str) -> String {
    let mut out = String::with_capacity(token.len());
    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                out.push('\\');
                if let Some(&next) = chars.peek() {
                    if matches!(next, '[' | ']' | '{' | '}' | '\\') {
                        out.push(next);
                        chars.next();
                    }
                }
            }
            '[' => out.push('('),
            ']' => out.push(')'),
            _ => out.push(c),
        }
    }
    out
}

/// Expand `0xHEX[,0xHEX]*` groups to their code points. Parenthesized
/// context markers around the group are preserved; tokens without any hex
/// group pass through unchanged.
fn expand_unicode(token: &str) -> String {
    let mut prefix_end = 0;
    while token[prefix_end..].starts_with('(') {
        match token[prefix_end..].find(')') {
            Some(close) => prefix_end += close + 1,
            None => return token.to_string(),
        }
    }
    let mut suffix_start = token.len();
    while suffix_start > prefix_end && token[..suffix_start].ends_with(')') {
        match token[..suffix_start].rfind('(') {
            Some(open) if open >= prefix_end => suffix_start = open,
            _ => return token.to_string(),
        }
    }

    let middle = &token[prefix_end..suffix_start];
    if middle.contains('(') || middle.contains(')') || !middle.contains("0x") {
        return token.to_string();
    }

    let mut expanded = String::new();
    for part in middle.split(',') {
        let part = part.trim();
        if let Some(code) = part
            .strip_prefix("0x")
            .and_then(|hex| u32::from_str_radix(hex, 16).ok())
            .and_then(char::from_u32)
        {
            expanded.push(code);
        } else {
            expanded.push_str(part);
        }
    }
    format!(
        "{}{}{}",
        &token[..prefix_end],
        expanded,
        &token[suffix_start..]
    )
}

/// Fill empty mandatory fields with placeholders and report which were
/// missing.
fn substitute_placeholders(scheme: &mut TransliterationScheme) -> Vec<&'static str> {
    let mut missing = Vec::new();
    if scheme.id.is_empty() {
        missing.push("id");
        scheme.id = "unknown_id".to_string();
    }
    if scheme.name.is_empty() {
        missing.push("name");
        scheme.name = "Unnamed Transliteration".to_string();
    }
    if scheme.language.is_empty() {
        missing.push("language");
        scheme.language = "unknown_language".to_string();
    }
    if scheme.scheme.is_empty() {
        missing.push("scheme");
        scheme.scheme = "unknown_scheme".to_string();
    }
    missing
}
