//! Configuration for the list filters.

#[cfg(feature = "bon")]
use bon::Builder;

#[derive(Default, Debug, Clone)]
/// Umbrella options struct.
pub struct Options {
    /// Configure which lists are recognized.
    pub lists: ListOptions,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "bon", derive(Builder))]
/// Options to select list flavors.
pub struct ListOptions {
    /// Recognize `*`, `+` and `-` lists as `<ul>`.
    ///
    /// ```rust
    /// # use listmark::{lists_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(lists_to_html("- a\n- b", &options),
    ///            "<ul>\n<li>a</li>\n<li>b</li>\n</ul>");
    ///
    /// options.lists.bulleted = false;
    /// assert_eq!(lists_to_html("- a\n- b", &options), "- a\n- b");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub bulleted: bool,

    /// Recognize `1.` lists as `<ol>`.
    ///
    /// ```rust
    /// # use listmark::{lists_to_html, Options};
    /// let mut options = Options::default();
    /// assert_eq!(lists_to_html("1. a\n2. b", &options),
    ///            "<ol>\n<li>a</li>\n<li>b</li>\n</ol>");
    ///
    /// options.lists.numbered = false;
    /// assert_eq!(lists_to_html("1. a\n2. b", &options), "1. a\n2. b");
    /// ```
    #[cfg_attr(feature = "bon", builder(default = true))]
    pub numbered: bool,

    /// Run the numbered filter before the bulleted one.  Whichever runs
    /// first claims lines the other would also have matched.
    #[cfg_attr(feature = "bon", builder(default))]
    pub numbered_first: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        ListOptions {
            bulleted: true,
            numbered: true,
            numbered_first: false,
        }
    }
}
