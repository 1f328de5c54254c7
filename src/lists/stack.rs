//! Open list items accumulated while scanning, and their rendering.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;

use crate::document::Document;
use crate::html::{self, ListTag};

/// One list item: the lines it retained, keyed by their original index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListItem {
    lines: BTreeMap<usize, String>,
    loose: bool,
}

impl ListItem {
    pub fn new<S: Into<String>>(index: usize, content: S) -> Self {
        let mut lines = BTreeMap::new();
        lines.insert(index, content.into());
        ListItem {
            lines,
            loose: false,
        }
    }

    pub fn push<S: Into<String>>(&mut self, index: usize, content: S) {
        self.lines.insert(index, content.into());
    }

    /// Whether the item renders its content inside a paragraph.
    pub fn is_loose(&self) -> bool {
        self.loose
    }

    pub fn set_loose(&mut self, loose: bool) {
        self.loose = loose;
    }

    pub fn first_index(&self) -> Option<usize> {
        self.lines.keys().next().copied()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.lines.keys().next_back().copied()
    }

    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> {
        self.lines.iter().map(|(&ix, s)| (ix, s.as_str()))
    }

    /// Renders the item as `<li>…</li>`.
    pub fn render(&self) -> String {
        let body = self
            .lines
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n");

        let mut s = String::with_capacity(body.len() + 16);
        s.push_str(html::ITEM_OPEN);
        if self.loose {
            s.push_str(html::PARAGRAPH_OPEN);
            s.push_str(&body);
            s.push_str(html::PARAGRAPH_CLOSE);
        } else {
            s.push_str(&body);
        }
        s.push_str(html::ITEM_CLOSE);
        s
    }
}

/// The items of the list currently open in a scan.
#[derive(Debug, Default)]
pub struct ListStack {
    items: Vec<ListItem>,
}

impl ListStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    /// Opens a new item seeded with one line.
    pub fn add_item<S: Into<String>>(&mut self, index: usize, content: S) {
        self.items.push(ListItem::new(index, content));
    }

    /// Adds a line to the last open item.  Does nothing when no item is open.
    pub fn append_line<S: Into<String>>(&mut self, index: usize, content: S) {
        if let Some(item) = self.items.last_mut() {
            item.push(index, content);
        }
    }

    /// Marks every item opened so far as loose.
    pub fn paragraphize(&mut self) {
        // Loose items always form a prefix of the stack.
        for item in self.items.iter_mut().rev().take_while(|item| !item.loose) {
            item.loose = true;
        }
    }

    /// The line range from the first item's first line through the last
    /// item's last line.
    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        let start = self.items.first()?.first_index()?;
        let end = self.items.last()?.last_index()?;
        Some(start..=end)
    }

    /// Renders all items inside the list element for `tag`.
    pub fn render(&self, tag: ListTag) -> String {
        let mut s = String::new();
        s.push_str(tag.open());
        s.push('\n');
        for item in &self.items {
            s.push_str(&item.render());
            s.push('\n');
        }
        s.push_str(tag.close());
        s
    }

    /// Renders the stack, splices the result over the list's lines in
    /// `document` and empties the stack.  An empty stack is left alone.
    pub fn apply(&mut self, document: &mut Document, tag: ListTag) {
        let Some(range) = self.range() else {
            self.items.clear();
            return;
        };

        let block = self.render(tag);
        log::debug!(
            "Finalized <{}> with {} item(s) over lines {}-{}",
            tag,
            self.items.len(),
            range.start() + 1,
            range.end() + 1
        );
        document.splice(range, block);
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tight_item_renders_inline() {
        let mut item = ListItem::new(0, "a");
        item.push(1, "b");
        assert_eq!(item.render(), "<li>a\nb</li>");
    }

    #[test]
    fn loose_item_renders_paragraph() {
        let mut item = ListItem::new(3, "a");
        item.set_loose(true);
        assert_eq!(item.render(), "<li><p>a</p></li>");
    }

    #[test]
    fn paragraphize_marks_existing_items_only() {
        let mut stack = ListStack::new();
        stack.add_item(0, "a");
        stack.add_item(1, "b");
        stack.paragraphize();
        stack.add_item(2, "c");

        let loose: Vec<bool> = stack.items().iter().map(ListItem::is_loose).collect();
        assert_eq!(loose, vec![true, true, false]);
    }

    #[test]
    fn range_spans_first_to_last_retained_line() {
        let mut stack = ListStack::new();
        assert_eq!(stack.range(), None);
        stack.add_item(2, "a");
        stack.add_item(5, "b");
        stack.append_line(6, "c");
        assert_eq!(stack.range(), Some(2..=6));
    }

    #[test]
    fn apply_splices_and_resets() {
        let mut doc = Document::parse("x\n- a\n- b\ny");
        let mut stack = ListStack::new();
        stack.add_item(1, "a");
        stack.add_item(2, "b");
        stack.apply(&mut doc, ListTag::Unordered);

        assert!(stack.is_empty());
        assert_eq!(doc.to_string(), "x\n<ul>\n<li>a</li>\n<li>b</li>\n</ul>\ny");
    }

    #[test]
    fn apply_on_empty_stack_is_a_no_op() {
        let mut doc = Document::parse("x\ny");
        let mut stack = ListStack::new();
        stack.apply(&mut doc, ListTag::Ordered);
        assert_eq!(doc.to_string(), "x\ny");
    }

    #[test]
    fn append_without_open_item_is_ignored() {
        let mut stack = ListStack::new();
        stack.append_line(0, "stray");
        assert!(stack.is_empty());
        assert_eq!(stack.range(), None);
    }

    #[test]
    fn item_lines_keep_source_order() {
        let mut item = ListItem::new(4, "a");
        item.push(7, "c");
        item.push(5, "b");
        let lines: Vec<(usize, &str)> = item.lines().collect();
        assert_eq!(lines, vec![(4, "a"), (5, "b"), (7, "c")]);
    }
}
