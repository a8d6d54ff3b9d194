//! Error types for topazcss operations.

use thiserror::Error;

/// Errors that can occur while loading a style dump.
///
/// The translation pass itself never fails; only the file-reading entry
/// points produce errors. Skipped blocks surface as
/// [`Diagnostic`](crate::Diagnostic)s instead.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
