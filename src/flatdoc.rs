//! Flattened style-document parsing and lookup.
//!
//! A Topaz style sheet arrives as a line-oriented dump of a nested style
//! tree: each line carries a dotted path and an optional `=value`, e.g.
//! `book.stylesheet.style.rule.attr=indent`. This module parses the dump
//! once into an indexed record sequence and provides the range-scoped
//! suffix lookups the translator is built on.

use memchr::memchr;

/// One parsed line of a flattened style dump.
#[derive(Debug, Clone)]
pub struct FlatRecord<'a> {
    /// The full dotted path (text before the first `=`).
    pub path: &'a str,
    /// Text after the first `=`, or `None` for a bare-path line.
    pub value: Option<&'a str>,
    /// The path split at `.`, stored once so lookups never re-split.
    segments: Vec<&'a str>,
}

impl<'a> FlatRecord<'a> {
    fn parse(line: &'a str) -> Self {
        let (path, value) = match memchr(b'=', line.as_bytes()) {
            Some(eq) => (&line[..eq], Some(&line[eq + 1..])),
            None => (line, None),
        };
        FlatRecord {
            path,
            value,
            segments: path.split('.').collect(),
        }
    }

    /// Dotted-path suffix match: the record's trailing path segments equal
    /// `tagpath`. `style.class` matches `book.stylesheet.style.class` but
    /// not `book.mystyle.class`.
    fn matches(&self, tagpath: &[&str]) -> bool {
        self.segments.len() >= tagpath.len()
            && self
                .segments
                .iter()
                .rev()
                .zip(tagpath.iter().rev())
                .all(|(a, b)| a == b)
    }
}

/// A fully parsed flattened style dump, indexable by line number.
#[derive(Debug)]
pub struct FlatDoc<'a> {
    records: Vec<FlatRecord<'a>>,
}

impl<'a> FlatDoc<'a> {
    /// Parse a dump into records, one per line. Blank lines are kept so
    /// record indices stay equal to zero-based line numbers.
    pub fn parse(text: &'a str) -> Self {
        FlatDoc {
            records: text.lines().map(FlatRecord::parse).collect(),
        }
    }

    /// Number of records (lines) in the document.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The record at `index`, if in bounds.
    pub fn record(&self, index: usize) -> Option<&FlatRecord<'a>> {
        self.records.get(index)
    }

    /// Find the first record in `start..end` whose path ends with
    /// `tagpath`, returned as `(index, value)`.
    ///
    /// `end` is clamped to the document length. The value is the empty
    /// string for a bare-path record. Repeated calls with `start` advanced
    /// past the previous hit enumerate every occurrence in the range.
    pub fn find(&self, tagpath: &[&str], start: usize, end: usize) -> Option<(usize, &'a str)> {
        let end = end.min(self.records.len());
        for (index, record) in self.records.iter().enumerate().take(end).skip(start) {
            if record.matches(tagpath) {
                return Some((index, record.value.unwrap_or("")));
            }
        }
        None
    }

    /// All match positions for `tagpath`, in document order.
    pub fn find_all(&self, tagpath: &[&str]) -> Vec<usize> {
        let mut positions = Vec::new();
        let mut start = 0;
        while let Some((pos, _)) = self.find(tagpath, start, self.records.len()) {
            positions.push(pos);
            start = pos + 1;
        }
        positions
    }
}
