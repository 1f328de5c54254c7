use super::*;
use pretty_assertions::assert_eq;
use crate::{Bulleted, Numbered};

#[test]
fn double_blank_ends_list() {
    html(
        concat!("- a\n", "\n", "\n", "text"),
        concat!("<ul>\n", "<li>a</li>\n", "</ul>\n", "\n", "\n", "text"),
    );
}

#[test]
fn double_blank_then_new_list() {
    html(
        concat!("- a\n", "\n", "\n", "- b"),
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "</ul>\n",
            "\n",
            "\n",
            "<ul>\n",
            "<li>b</li>\n",
            "</ul>"
        ),
    );
}

#[test]
fn unindented_text_after_blank_ends_list() {
    html(
        concat!("- a\n", "- b\n", "\n", "text\n", "more"),
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "<li>b</li>\n",
            "</ul>\n",
            "\n",
            "text\n",
            "more"
        ),
    );
}

#[test]
fn terminating_line_is_not_consumed() {
    // The line ending a list may start a list of another flavor.
    assert_eq!(
        scan(Bulleted, concat!("- a\n", "\n", "1. b")),
        concat!("<ul>\n", "<li>a</li>\n", "</ul>\n", "\n", "1. b")
    );
}

#[test]
fn blank_lines_after_last_item_are_kept() {
    assert_eq!(
        scan(Numbered, concat!("1. a\n", "\n")),
        concat!("<ol>\n", "<li>a</li>\n", "</ol>\n", "\n")
    );
}

#[test]
fn list_open_at_end_is_flushed() {
    assert_eq!(
        scan(Numbered, concat!("text\n", "\n", "1. a\n", "    b")),
        concat!("text\n", "\n", "<ol>\n", "<li>a\n", "b</li>\n", "</ol>")
    );
}

#[test]
fn several_lists_in_one_pass() {
    assert_eq!(
        scan(
            Bulleted,
            concat!("- a\n", "\n", "para\n", "\n", "- b\n", "- c\n", "\n", "\n", "end")
        ),
        concat!(
            "<ul>\n",
            "<li>a</li>\n",
            "</ul>\n",
            "\n",
            "para\n",
            "\n",
            "<ul>\n",
            "<li>b</li>\n",
            "<li>c</li>\n",
            "</ul>\n",
            "\n",
            "\n",
            "end"
        )
    );
}
