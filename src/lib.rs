//! A list-block recognizer for a line-filter Markdown to HTML converter.
//!
//! The converter splits its input into indexed lines and runs a sequence of
//! filters over them.  This crate provides the list filters: they find runs
//! of bulleted or numbered list lines, group them into items (which may hold
//! further paragraphs, blockquotes and code blocks), and replace each run with
//! rendered HTML.  Inline markup is left as-is.
//!
//! ```
//! use listmark::{lists_to_html, Options};
//!
//! assert_eq!(lists_to_html("- Hello.\n- Hi.", &Options::default()),
//!            "<ul>\n<li>Hello.</li>\n<li>Hi.</li>\n</ul>");
//! ```
//!
//! Filters can also be driven directly over a [`Document`]:
//!
//! ```
//! use listmark::{Document, Lists, Numbered};
//!
//! let doc = Lists::new(Numbered).scan(Document::parse("1. one\n\n2. two"));
//! assert_eq!(doc.to_string(),
//!            "<ol>\n<li><p>one</p></li>\n<li><p>two</p></li>\n</ol>");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]

pub mod document;
pub mod filter;
pub mod html;
pub mod lists;
mod options;
mod strings;

pub use document::{Document, Gist, Line};
pub use filter::{Filter, Pipeline};
pub use html::ListTag;
pub use lists::{Bulleted, ListFlavor, ListItem, ListStack, Lists, Numbered};
pub use options::{ListOptions, Options};

/// Render the lists in `md` to HTML, leaving all other lines untouched.
pub fn lists_to_html(md: &str, options: &Options) -> String {
    let document = Document::parse(md);
    Pipeline::from_options(options).run(document).to_string()
}
