/// Tags whose clicks keep their native behavior during a presentation.
pub const INTERACTIVE_TAGS: &[&str] = &["a", "button", "input"];

#[inline]
pub fn is_interactive_tag(tag: &str) -> bool {
    INTERACTIVE_TAGS.iter().any(|t| t.eq_ignore_ascii_case(tag))
}

/// Whether a page click should advance the presentation.
///
/// `ancestry` lists tag names from the click target up towards the root; any
/// interactive control on that path keeps the click for itself.
pub fn click_advances<I>(presenting: bool, ancestry: I) -> bool
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    presenting && !ancestry.into_iter().any(|tag| is_interactive_tag(tag.as_ref()))
}
