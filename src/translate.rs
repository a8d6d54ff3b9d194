//! The flattened-style to CSS translation pass.
//!
//! One call walks the dump once: locate every `book.stylesheet.style`
//! record, treat the records between two successive style positions as one
//! style block, and convert each block that describes a paragraph or
//! graphic element into a CSS rule. Styles the vocabulary doesn't cover
//! degrade to "skip the declaration" or "skip the block"; the pass itself
//! never fails.

use std::fmt;
use std::path::Path;

use crate::css::{CssValue, RuleBody};
use crate::flatdoc::FlatDoc;
use crate::tables;
use crate::util::decode_text;

// Recognized tagpaths, pre-split so lookups compare segments directly.
const STYLE: &[&str] = &["book", "stylesheet", "style"];
const STYLE_TAG: &[&str] = &["style", "_tag"];
const STYLE_TYPE: &[&str] = &["style", "type"];
const STYLE_CLASS: &[&str] = &["style", "class"];
const STYLE_AFTER_CLASS: &[&str] = &["style", "_after_class"];
const RULE_ATTR: &[&str] = &["style", "rule", "attr"];
const RULE_VALUE: &[&str] = &["style", "rule", "value"];

/// A problem encountered while translating one style block.
///
/// Diagnostics never abort the pass: a malformed value fails only its own
/// block, a dangling attr only its own rule pair. Line numbers are
/// 1-based positions in the input dump.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(tag = "kind", rename_all = "snake_case"))]
pub enum Diagnostic {
    /// A `style.rule.value` that does not parse as an integer; the whole
    /// style block was skipped.
    MalformedValue {
        line: usize,
        attr: String,
        value: String,
    },
    /// A `style.rule.attr` with no matching `style.rule.value` in the
    /// block; the pair was skipped.
    MissingValue { line: usize, attr: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::MalformedValue { line, attr, value } => write!(
                f,
                "line {line}: attribute '{attr}' has non-numeric value '{value}', style skipped"
            ),
            Diagnostic::MissingValue { line, attr } => write!(
                f,
                "line {line}: attribute '{attr}' has no value record, pair skipped"
            ),
        }
    }
}

/// Result of a translation pass: the stylesheet plus any diagnostics.
#[derive(Debug, Clone, Default)]
pub struct Translation {
    /// The generated CSS, one rule per line.
    pub css: String,
    /// Problems from skipped blocks and pairs, in input order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Translate a flattened Topaz style dump into CSS text.
pub fn translate(flat: &str) -> String {
    translate_with_diagnostics(flat).css
}

/// Translate a flattened Topaz style dump, also reporting what was skipped.
pub fn translate_with_diagnostics(flat: &str) -> Translation {
    let doc = FlatDoc::parse(flat);
    let mut out = Translation::default();

    let starts = doc.find_all(STYLE);
    for (i, &start) in starts.iter().enumerate() {
        let end = starts.get(i + 1).copied().unwrap_or(doc.len());
        translate_block(&doc, start, end, &mut out);
    }
    out
}

/// Read a flattened style dump from disk and translate it.
///
/// Bytes are decoded as UTF-8 with a Windows-1252 fallback before the pass
/// runs; the only failure mode is I/O.
pub fn translate_file(path: impl AsRef<Path>) -> crate::Result<Translation> {
    let bytes = std::fs::read(path)?;
    Ok(translate_with_diagnostics(&decode_text(&bytes)))
}

/// Translate one style block spanning records `start..end`.
fn translate_block(doc: &FlatDoc<'_>, start: usize, end: usize, out: &mut Translation) {
    let tag = doc
        .find(STYLE_TAG, start, end)
        .or_else(|| doc.find(STYLE_TYPE, start, end))
        .map(|(_, tag)| tag);
    let Some(selector) = tag.and_then(tables::element_selector) else {
        return;
    };

    let mut class_name = match doc.find(STYLE_CLASS, start, end) {
        Some((_, class)) => format!(".cl_{}", class.to_lowercase()),
        None => String::new(),
    };
    let after_class = doc.find(STYLE_AFTER_CLASS, start, end).is_some();

    let mut body = RuleBody::new();
    let mut cursor = start;
    while let Some((attr_pos, attr)) = doc.find(RULE_ATTR, cursor, end) {
        let Some((value_pos, value)) = doc.find(RULE_VALUE, attr_pos + 1, end) else {
            out.diagnostics.push(Diagnostic::MissingValue {
                line: attr_pos + 1,
                attr: attr.to_string(),
            });
            cursor = attr_pos + 1;
            continue;
        };
        cursor = value_pos + 1;

        if matches!(attr, "display" | "pos" | "align") {
            let compound = format!("{attr}-{value}");
            if let Some(css) = tables::literal_css(&compound) {
                body.set(&compound, CssValue::Literal(css));
            }
        } else if let Some(entry) = tables::numeric_attr(attr) {
            let Ok(raw) = value.trim().parse::<i64>() else {
                out.diagnostics.push(Diagnostic::MalformedValue {
                    line: value_pos + 1,
                    attr: attr.to_string(),
                    value: value.to_string(),
                });
                return;
            };
            // a zero hang is no hanging indent at all
            if attr == "hang" && raw == 0 {
                continue;
            }
            body.set(
                attr,
                CssValue::Ems {
                    property: entry.property,
                    ems: raw as f64 / entry.scale,
                },
            );
        }
        // anything else is outside the recognized vocabulary, dropped
    }

    // after-class variants are not representable yet; suppress entirely
    if after_class {
        return;
    }

    // normalize variant class names: drop everything after "reclustered"
    if let Some(pos) = class_name.find("reclustered") {
        class_name.truncate(pos + "reclustered".len());
    }

    // readers choke on sub-single line heights
    if let Some(ems) = body.ems("line-space") {
        if ems < 1.0 {
            body.set_ems("line-space", 1.0);
        }
    }

    // a hanging indent renders as a negative text-indent pulled back out
    // with margin-left; it also supersedes any plain indent
    if let Some(hang) = body.ems("hang") {
        body.set_ems("hang", -hang);
        body.add_ems("margin-left", "margin-left", hang);
        body.remove("indent");
    }

    let block = body.block_text(&class_name);

    // paragraph classes reused inside chapter and section headings get a
    // second rule under the heading element
    if let Some(marker) = class_name.get(4..7) {
        if let Some(heading) = tables::heading_selector(marker) {
            out.css.push_str(heading);
            out.css.push_str(&block);
            out.css.push('\n');
        }
    }

    out.css.push_str(selector);
    out.css.push_str(&block);
    out.css.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_styles_yields_empty_output() {
        assert_eq!(translate(""), "");
        assert_eq!(translate("book.metadata.title=Foo"), "");
    }

    #[test]
    fn test_last_block_extends_to_document_end() {
        let flat = "book.stylesheet.style\n\
                    book.stylesheet.style._tag=paragraph\n\
                    book.stylesheet.style.class=Last\n\
                    book.stylesheet.style.rule.attr=margin-top\n\
                    book.stylesheet.style.rule.value=135";
        assert_eq!(translate(flat), "p.cl_last { margin-top: 1.0em; }\n");
    }

    #[test]
    fn test_style_on_final_line() {
        // a style record with nothing after it is an empty block
        assert_eq!(translate("book.stylesheet.style"), "");
    }

    #[test]
    fn test_diagnostic_display() {
        let malformed = Diagnostic::MalformedValue {
            line: 7,
            attr: "margin-top".to_string(),
            value: "wide".to_string(),
        };
        assert_eq!(
            malformed.to_string(),
            "line 7: attribute 'margin-top' has non-numeric value 'wide', style skipped"
        );

        let missing = Diagnostic::MissingValue {
            line: 3,
            attr: "hang".to_string(),
        };
        assert_eq!(
            missing.to_string(),
            "line 3: attribute 'hang' has no value record, pair skipped"
        );
    }
}
