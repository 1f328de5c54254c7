use super::*;
use pretty_assertions::assert_eq;
use ntest::timeout;

#[test]
#[timeout(4000)]
fn pathological_tight_items() {
    let n = 100_000;
    let input = "- x\n".repeat(n);
    let output = lists_to_html(&input, &Options::default());

    assert!(output.starts_with("<ul>\n<li>x</li>\n"));
    assert!(output.ends_with("<li>x</li>\n</ul>\n"));
    assert_eq!(output.matches("<li>").count(), n);
}

// Every marker after the first re-marks the list loose.
#[test]
#[timeout(4000)]
fn pathological_loose_items() {
    let n = 50_000;
    let input = "- x\n\n".repeat(n);
    let output = lists_to_html(&input, &Options::default());

    assert_eq!(output.matches("<li><p>x</p></li>").count(), n);
}

#[test]
#[timeout(4000)]
fn pathological_many_lists() {
    let n = 50_000;
    let input = "- x\n\n\n".repeat(n);
    let output = lists_to_html(&input, &Options::default());

    assert_eq!(output.matches("<ul>").count(), n);
}

#[test]
#[timeout(4000)]
fn pathological_long_code_block() {
    let n = 100_000;
    let input = format!("- x\n{}", "        <code>\n".repeat(n));
    let output = lists_to_html(&input, &Options::default());

    assert_eq!(output.matches("<pre><code>").count(), 1);
    assert_eq!(output.matches("&lt;code&gt;").count(), n);
}
