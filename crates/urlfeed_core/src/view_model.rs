use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub feed: Vec<String>,
    pub favorites: Vec<String>,
    pub trace: bool,
    pub dirty: bool,
}

/// Renders any ordered sequence as a numbered listing under `label`.
///
/// The first line is blank so the listing stands apart from the menu.
/// Numbering starts at 1. An empty sequence renders the
/// `"<label> empty, try adding a URL"` hint instead of entries.
pub fn render_listing<I>(label: &str, items: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut lines = vec![String::new(), format!("=== {label} ===")];
    let header_len = lines.len();
    lines.extend(
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| format!("{}. {}", i + 1, item)),
    );
    if lines.len() == header_len {
        lines.push(format!("{label} empty, try adding a URL"));
    }
    lines
}
