//! Markup emitted for finalized lists.

use std::fmt::{self, Display, Formatter};

pub const ITEM_OPEN: &str = "<li>";
pub const ITEM_CLOSE: &str = "</li>";
pub const PARAGRAPH_OPEN: &str = "<p>";
pub const PARAGRAPH_CLOSE: &str = "</p>";
pub const BLOCKQUOTE_OPEN: &str = "<blockquote>";
pub const BLOCKQUOTE_CLOSE: &str = "</blockquote>";
pub const CODE_OPEN: &str = "<pre><code>";
pub const CODE_CLOSE: &str = "</code></pre>";

/// Separates two paragraphs inside a single list item.
pub const PARAGRAPH_BREAK: &str = "</p><p>";

/// The outer element wrapping a whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListTag {
    /// `<ul>`
    Unordered,
    /// `<ol>`
    Ordered,
}

impl ListTag {
    pub fn name(self) -> &'static str {
        match self {
            ListTag::Unordered => "ul",
            ListTag::Ordered => "ol",
        }
    }

    pub fn open(self) -> &'static str {
        match self {
            ListTag::Unordered => "<ul>",
            ListTag::Ordered => "<ol>",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            ListTag::Unordered => "</ul>",
            ListTag::Ordered => "</ol>",
        }
    }
}

impl Display for ListTag {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const CODE_UNSAFE: [bool; 256] = {
    let mut a = [false; 256];
    a[b'&' as usize] = true;
    a[b'<' as usize] = true;
    a[b'>' as usize] = true;
    a
};

/// Escapes text for inclusion in a code block.  Only `&`, `<` and `>` are
/// touched; quotes pass through.
pub fn escape_code(buffer: &str) -> String {
    let bytes = buffer.as_bytes();
    let mut output = String::with_capacity(buffer.len());
    let mut offset = 0;

    for (i, &byte) in bytes.iter().enumerate() {
        if CODE_UNSAFE[byte as usize] {
            let esc = match byte {
                b'&' => "&amp;",
                b'<' => "&lt;",
                _ => "&gt;",
            };
            output.push_str(&buffer[offset..i]);
            output.push_str(esc);
            offset = i + 1;
        }
    }

    output.push_str(&buffer[offset..]);
    output
}
