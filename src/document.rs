//! The line-indexed document filters operate on.
//!
//! A [`Document`] is a sparse mapping from original line number to
//! [`Line`].  Filters rewrite lines in place through their [`Gist`] and
//! collapse runs of lines into rendered blocks with [`Document::splice`], so
//! neighbouring indices are not guaranteed to exist.

use smallvec::SmallVec;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;
use std::ops::RangeInclusive;

use crate::strings;

/// The effective content of a line once a filter has rewritten it.
///
/// The override text replaces the raw text when set.  Wraps accumulate in
/// layers: every [`prepend`](Gist::prepend) ends up outside the ones before
/// it, and likewise for [`append`](Gist::append).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gist {
    text: Option<String>,
    leading: SmallVec<[Cow<'static, str>; 2]>,
    trailing: SmallVec<[Cow<'static, str>; 2]>,
}

impl Gist {
    /// Whether nothing has been rewritten yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.leading.is_empty() && self.trailing.is_empty()
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn set_text<S: Into<String>>(&mut self, text: S) {
        self.text = Some(text.into());
    }

    pub fn prepend<S: Into<Cow<'static, str>>>(&mut self, markup: S) {
        self.leading.push(markup.into());
    }

    pub fn append<S: Into<Cow<'static, str>>>(&mut self, markup: S) {
        self.trailing.push(markup.into());
    }

    /// Computes the final text, falling back to `raw` for the content.
    pub fn render(&self, raw: &str) -> String {
        let content = self.text.as_deref().unwrap_or(raw);
        let mut s = String::with_capacity(
            content.len()
                + self.leading.iter().map(|m| m.len()).sum::<usize>()
                + self.trailing.iter().map(|m| m.len()).sum::<usize>(),
        );
        for markup in self.leading.iter().rev() {
            s.push_str(markup);
        }
        s.push_str(content);
        for markup in &self.trailing {
            s.push_str(markup);
        }
        s
    }
}

/// A single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    index: usize,
    raw: String,
    gist: Gist,
    crlf: bool,
}

impl Line {
    pub fn new<S: Into<String>>(index: usize, raw: S) -> Self {
        Line {
            index,
            raw: raw.into(),
            gist: Gist::default(),
            crlf: false,
        }
    }

    /// Marks the line as terminated by `\r\n` rather than `\n`.
    pub fn with_crlf(mut self, crlf: bool) -> Self {
        self.crlf = crlf;
        self
    }

    /// Whether the line was terminated by `\r\n`.
    pub fn is_crlf(&self) -> bool {
        self.crlf
    }

    /// The original line number.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The line as it appeared in the source.  All classification is done
    /// against this, never against the gist.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn gist(&self) -> &Gist {
        &self.gist
    }

    pub fn gist_mut(&mut self) -> &mut Gist {
        &mut self.gist
    }

    /// The line's effective text: the rendered gist, or the raw text if
    /// nothing was rewritten.
    pub fn text(&self) -> Cow<'_, str> {
        if self.gist.is_empty() {
            Cow::Borrowed(&self.raw)
        } else {
            Cow::Owned(self.gist.render(&self.raw))
        }
    }

    pub fn is_blank(&self) -> bool {
        strings::is_blank(&self.raw)
    }

    pub fn is_indented(&self) -> bool {
        strings::is_indented(&self.raw)
    }
}

/// An ordered, index-addressable collection of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    lines: BTreeMap<usize, Line>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Splits `text` into lines numbered from zero.  A `\r` before a `\n`
    /// is kept out of the line's text and restored when rendering.
    pub fn parse(text: &str) -> Self {
        let mut lines = text.split('\n').enumerate().peekable();
        let mut document = Document::new();
        while let Some((ix, raw)) = lines.next() {
            let line = match raw.strip_suffix('\r') {
                Some(stripped) if lines.peek().is_some() => {
                    Line::new(ix, stripped).with_crlf(true)
                }
                _ => Line::new(ix, raw),
            };
            document.insert(line);
        }
        document
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.lines.contains_key(&index)
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Line> {
        self.lines.get_mut(&index)
    }

    /// The line directly before `index`, if it still exists.
    pub fn prev(&self, index: usize) -> Option<&Line> {
        index.checked_sub(1).and_then(|ix| self.get(ix))
    }

    /// The line directly after `index`, if it still exists.
    pub fn next(&self, index: usize) -> Option<&Line> {
        index.checked_add(1).and_then(|ix| self.get(ix))
    }

    /// Indices of all lines currently present, in order.
    pub fn indices(&self) -> Vec<usize> {
        self.lines.keys().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Inserts `line` at its own index, replacing any line already there.
    pub fn insert(&mut self, line: Line) -> Option<Line> {
        self.lines.insert(line.index, line)
    }

    /// Replaces every line in `range` with one line holding `block`, placed at
    /// the first index of the range.  The block keeps the line ending of the
    /// last line it replaces.  Returns the number of lines removed.
    pub fn splice<S: Into<String>>(&mut self, range: RangeInclusive<usize>, block: S) -> usize {
        let start = *range.start();
        let doomed: Vec<usize> = self.lines.range(range).map(|(&ix, _)| ix).collect();
        let mut crlf = false;
        for ix in &doomed {
            if let Some(line) = self.lines.remove(ix) {
                crlf = line.crlf;
            }
        }
        self.lines.insert(start, Line::new(start, block).with_crlf(crlf));
        doomed.len()
    }
}

impl FromIterator<Line> for Document {
    fn from_iter<I: IntoIterator<Item = Line>>(iter: I) -> Self {
        Document {
            lines: iter.into_iter().map(|line| (line.index, line)).collect(),
        }
    }
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut lines = self.lines.values().peekable();
        while let Some(line) = lines.next() {
            f.write_str(&line.text())?;
            if lines.peek().is_some() {
                f.write_str(if line.crlf { "\r\n" } else { "\n" })?;
            }
        }
        Ok(())
    }
}
