//! List recognition.
//!
//! [`Lists`] makes one pass over a [`Document`], groups runs of list lines
//! into items on a [`ListStack`] and replaces each finished run with rendered
//! markup.  Marker syntax comes from a [`ListFlavor`]; the scan itself does
//! not care whether it is looking for bullets or numbers.

mod stack;

pub use stack::{ListItem, ListStack};

use crate::document::{Document, Gist, Line};
use crate::html::{self, escape_code, ListTag};
use crate::strings;

/// Markers may be indented by at most this many spaces.
const MAX_MARKER_INDENT: usize = 3;

/// Numbered markers longer than this are not markers.
const MAX_MARKER_DIGITS: usize = 9;

/// Implement this to teach [`Lists`] a new kind of list.
pub trait ListFlavor {
    /// The element wrapping lists of this flavor.
    fn tag(&self) -> ListTag;

    /// Matches a list marker at the very start of `line`.
    ///
    /// Returns the matched prefix, including any indentation before the
    /// marker and the whitespace after it.  The prefix must be non-empty, and
    /// an indented continuation line must never match.
    fn match_marker<'l>(&self, line: &'l str) -> Option<&'l str>;
}

/// `*`, `+` or `-` list items, rendered as `<ul>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bulleted;

impl ListFlavor for Bulleted {
    fn tag(&self) -> ListTag {
        ListTag::Unordered
    }

    fn match_marker<'l>(&self, line: &'l str) -> Option<&'l str> {
        let bytes = line.as_bytes();
        let pos = strings::marker_indent(line, MAX_MARKER_INDENT)?;
        if !matches!(bytes.get(pos), Some(b'*') | Some(b'+') | Some(b'-')) {
            return None;
        }
        let end = marker_padding(bytes, pos + 1)?;
        Some(&line[..end])
    }
}

/// `1.` style list items, rendered as `<ol>`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Numbered;

impl ListFlavor for Numbered {
    fn tag(&self) -> ListTag {
        ListTag::Ordered
    }

    fn match_marker<'l>(&self, line: &'l str) -> Option<&'l str> {
        let bytes = line.as_bytes();
        let start = strings::marker_indent(line, MAX_MARKER_INDENT)?;
        let digits = bytes[start..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if digits == 0 || digits > MAX_MARKER_DIGITS {
            return None;
        }
        let pos = start + digits;
        if bytes.get(pos) != Some(&b'.') {
            return None;
        }
        let end = marker_padding(bytes, pos + 1)?;
        Some(&line[..end])
    }
}

// Position after the spaces and tabs following a marker; a marker needs at
// least one.
fn marker_padding(bytes: &[u8], pos: usize) -> Option<usize> {
    let n = bytes
        .get(pos..)?
        .iter()
        .take_while(|&&b| strings::is_space_or_tab(b))
        .count();
    if n == 0 {
        None
    } else {
        Some(pos + n)
    }
}

/// What the scanner does with one line.
#[derive(Debug)]
enum Action {
    /// Leave the line untouched.
    Skip,
    /// Start a new item, marking the whole list loose if asked to.
    OpenItem { content: String, loosen: bool },
    /// Close the open list; the line itself stays untouched.
    Finalize,
    /// Rewrite the line and add it to the current item.
    Append(Gist),
}

/// The list filter for one flavor.
#[derive(Debug, Clone, Default)]
pub struct Lists<F> {
    flavor: F,
}

impl<F: ListFlavor> Lists<F> {
    pub fn new(flavor: F) -> Self {
        Lists { flavor }
    }

    pub fn flavor(&self) -> &F {
        &self.flavor
    }

    /// Recognizes every list of this flavor in `document` and replaces each
    /// with its rendered markup.  Lines outside lists are not touched.
    pub fn scan(&self, mut document: Document) -> Document {
        let tag = self.flavor.tag();
        let mut stack = ListStack::new();

        for ix in document.indices() {
            let action = match document.get(ix) {
                Some(line) => self.classify(&document, line, !stack.is_empty()),
                None => continue,
            };
            log::trace!("<{}> line {}: {:?}", tag, ix + 1, action);

            match action {
                Action::Skip => {}
                Action::Finalize => stack.apply(&mut document, tag),
                Action::OpenItem { content, loosen } => {
                    if stack.is_empty() {
                        log::debug!("Opening <{}> at line {}", tag, ix + 1);
                    }
                    if let Some(line) = document.get_mut(ix) {
                        line.gist_mut().set_text(content.as_str());
                    }
                    stack.add_item(ix, content);
                    // The item that revealed the gap is loose along with
                    // everything before it, so `- a\n\n- b` wraps both items
                    // in paragraphs.  Items opened later start tight again.
                    if loosen {
                        log::debug!("Marking <{}> loose at line {}", tag, ix + 1);
                        stack.paragraphize();
                    }
                }
                Action::Append(gist) => {
                    if let Some(line) = document.get_mut(ix) {
                        *line.gist_mut() = gist;
                        stack.append_line(ix, line.text().into_owned());
                    }
                }
            }
        }

        if !stack.is_empty() {
            stack.apply(&mut document, tag);
        }

        document
    }

    fn classify(&self, document: &Document, line: &Line, list_open: bool) -> Action {
        let ix = line.index();
        let raw = line.raw();
        let prev = document.prev(ix);
        let next = document.next(ix);
        let prev_blank = prev.map_or(false, Line::is_blank);

        if let Some(marker) = self.flavor.match_marker(raw) {
            assert!(
                !marker.is_empty() && raw.starts_with(marker),
                "list flavor returned an invalid marker {:?} for {:?}",
                marker,
                raw
            );
            // A second marker after a blank gap makes the list loose, unless
            // more item text follows directly.
            let loosen = list_open && prev_blank && next.map_or(true, Line::is_blank);
            return Action::OpenItem {
                content: raw[marker.len()..].to_owned(),
                loosen,
            };
        }

        if !list_open {
            return Action::Skip;
        }

        if line.is_blank() {
            return if prev_blank {
                Action::Finalize
            } else {
                Action::Skip
            };
        }

        let follows_text = prev.map_or(false, |p| !p.is_blank());
        let mut gist = Gist::default();

        if !line.is_indented() {
            if !follows_text {
                return Action::Finalize;
            }
            // lazy continuation
            gist.set_text(strings::ltrim(raw));
            return Action::Append(gist);
        }

        if strings::is_blockquote_line(raw) {
            gist.set_text(strings::strip_blockquote_marker(raw));
            if !prev.map_or(false, |p| strings::is_blockquote_line(p.raw())) {
                gist.prepend(html::BLOCKQUOTE_OPEN);
            }
            if !next.map_or(false, |n| strings::is_blockquote_line(n.raw())) {
                gist.append(html::BLOCKQUOTE_CLOSE);
            }
        } else if strings::is_code_line(raw) {
            gist.set_text(strings::ltrim(&escape_code(raw)));
            if !prev.map_or(false, |p| strings::is_code_line(p.raw())) {
                gist.prepend(html::CODE_OPEN);
            }
            if !next.map_or(false, |n| strings::is_code_line(n.raw())) {
                gist.append(html::CODE_CLOSE);
            }
        } else if follows_text {
            gist.set_text(strings::ltrim(raw));
        } else {
            gist.set_text(format!("{}{}", html::PARAGRAPH_BREAK, strings::ltrim(raw)));
        }

        Action::Append(gist)
    }
}
