//! # topazcss
//!
//! Converts the flattened style sheet of a Topaz (legacy Kindle) book into
//! a CSS stylesheet for e-reader rendering pipelines.
//!
//! A Topaz container stores its style sheet as a nested tree; upstream
//! tooling dumps that tree as one line per node, `dotted.path=value` or a
//! bare `dotted.path`. This crate performs the single translation pass
//! from that dump to CSS: it recognizes paragraph and graphic style
//! blocks, maps the fixed attribute vocabulary to CSS declarations, and
//! applies the Topaz-specific corrections (hanging indents, minimum line
//! height, heading-class aliasing). Unrecognized attributes are dropped
//! silently.
//!
//! ## Quick Start
//!
//! ```
//! let flat = "\
//! book.stylesheet.style
//! book.stylesheet.style._tag=paragraph
//! book.stylesheet.style.class=calibre1
//! book.stylesheet.style.rule.attr=indent
//! book.stylesheet.style.rule.value=270";
//!
//! let css = topazcss::translate(flat);
//! assert_eq!(css, "p.cl_calibre1 { text-indent: 2.0em; }\n");
//! ```
//!
//! ## Diagnostics
//!
//! A malformed style block is skipped rather than failing the whole
//! translation; [`translate_with_diagnostics`] reports what was skipped:
//!
//! ```
//! let result = topazcss::translate_with_diagnostics(
//!     "book.stylesheet.style\n\
//!      book.stylesheet.style._tag=paragraph\n\
//!      book.stylesheet.style.rule.attr=margin-top\n\
//!      book.stylesheet.style.rule.value=wide",
//! );
//! assert!(result.css.is_empty());
//! for diagnostic in &result.diagnostics {
//!     eprintln!("warning: {diagnostic}");
//! }
//! ```

pub mod css;
pub mod error;
pub mod flatdoc;
pub mod tables;
pub mod translate;
pub(crate) mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::{Error, Result};
pub use translate::{
    Diagnostic, Translation, translate, translate_file, translate_with_diagnostics,
};
