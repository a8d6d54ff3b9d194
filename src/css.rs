//! Accumulation and serialization of per-style CSS declarations.
//!
//! Each convertible style block builds one [`RuleBody`]: an
//! insertion-ordered set of declarations keyed by the source attribute
//! name (or compound `attr-value` name). Keys are unique per block and
//! first-insertion order is the emission order.

use std::fmt::Write;

use indexmap::IndexMap;
use indexmap::map::Entry;

/// One stored declaration value.
#[derive(Debug, Clone, PartialEq)]
pub enum CssValue {
    /// Verbatim CSS text emitted as-is (compound attrs like `align-center`).
    Literal(&'static str),
    /// An em-valued property, e.g. `text-indent: -2.0em;`.
    Ems { property: &'static str, ems: f64 },
}

/// The insertion-ordered declaration set for one style block.
#[derive(Debug, Clone, Default)]
pub struct RuleBody {
    decls: IndexMap<String, CssValue>,
}

impl RuleBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Insert or overwrite the declaration under `key`. An overwritten key
    /// keeps its original position in the emission order.
    pub fn set(&mut self, key: &str, value: CssValue) {
        self.decls.insert(key.to_string(), value);
    }

    /// The em magnitude stored under `key`, if any.
    pub fn ems(&self, key: &str) -> Option<f64> {
        match self.decls.get(key) {
            Some(CssValue::Ems { ems, .. }) => Some(*ems),
            _ => None,
        }
    }

    /// Replace the em magnitude under `key` in place; no-op when `key` is
    /// absent or holds a literal.
    pub fn set_ems(&mut self, key: &str, ems: f64) {
        if let Some(CssValue::Ems { ems: stored, .. }) = self.decls.get_mut(key) {
            *stored = ems;
        }
    }

    /// Add `delta` to the em magnitude under `key`, creating the entry (at
    /// the end of the emission order) with the given property when absent.
    pub fn add_ems(&mut self, key: &str, property: &'static str, delta: f64) {
        match self.decls.entry(key.to_string()) {
            Entry::Occupied(mut entry) => {
                if let CssValue::Ems { ems, .. } = entry.get_mut() {
                    *ems += delta;
                }
            }
            Entry::Vacant(entry) => {
                entry.insert(CssValue::Ems {
                    property,
                    ems: delta,
                });
            }
        }
    }

    /// Remove the declaration under `key`, preserving the order of the
    /// remaining declarations.
    pub fn remove(&mut self, key: &str) {
        self.decls.shift_remove(key);
    }

    /// Serialize as `<class_name> { <decl> <decl> }`, each declaration
    /// followed by a single space. Em magnitudes print to one decimal.
    pub fn block_text(&self, class_name: &str) -> String {
        let mut text = String::from(class_name);
        text.push_str(" { ");
        for value in self.decls.values() {
            match value {
                CssValue::Literal(css) => {
                    text.push_str(css);
                    text.push(' ');
                }
                CssValue::Ems { property, ems } => {
                    let _ = write!(text, "{property}: {ems:.1}em; ");
                }
            }
        }
        text.push('}');
        text
    }
}
