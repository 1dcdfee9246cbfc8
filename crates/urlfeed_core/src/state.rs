use std::collections::VecDeque;

use thiserror::Error;

use crate::view_model::AppViewModel;

/// Why a favorite selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectionError {
    #[error("selection {0:?} is not a number")]
    NotANumber(String),
    #[error("selection {index} is outside 1..={len}")]
    OutOfRange { index: i64, len: usize },
    #[error("feed is empty")]
    EmptyFeed,
}

/// Session state: the feed queue, the favorites stack and the trace flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    feed: VecDeque<String>,
    favorites: Vec<String>,
    trace: bool,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            feed: self.feed.iter().cloned().collect(),
            favorites: self.favorites.clone(),
            trace: self.trace,
            dirty: self.dirty,
        }
    }

    pub fn feed(&self) -> &VecDeque<String> {
        &self.feed
    }

    pub fn favorites(&self) -> &[String] {
        &self.favorites
    }

    pub fn trace_enabled(&self) -> bool {
        self.trace
    }

    /// Appends to the rear of the feed and returns the new feed length.
    pub fn enqueue(&mut self, url: String) -> usize {
        self.feed.push_back(url);
        self.mark_dirty();
        self.feed.len()
    }

    pub fn dequeue_front(&mut self) -> Option<String> {
        let removed = self.feed.pop_front();
        if removed.is_some() {
            self.mark_dirty();
        }
        removed
    }

    /// Copies the feed entry picked by a 1-based selection onto the top of
    /// the favorites stack. The feed is left untouched.
    pub fn push_selected(&mut self, raw: &str) -> Result<&str, SelectionError> {
        let slot = parse_selection(raw, self.feed.len())?;
        let url = self.feed[slot].clone();
        self.favorites.push(url);
        self.mark_dirty();
        Ok(&self.favorites[self.favorites.len() - 1])
    }

    pub fn pop_last(&mut self) -> Option<String> {
        let removed = self.favorites.pop();
        if removed.is_some() {
            self.mark_dirty();
        }
        removed
    }

    /// Flips the trace flag and returns the new value.
    pub fn toggle_trace(&mut self) -> bool {
        self.trace = !self.trace;
        self.mark_dirty();
        self.trace
    }

    /// Starts a session with tracing already on.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Returns whether state changed since the last call, and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}

/// Converts a 1-based user selection into a 0-based feed index.
fn parse_selection(raw: &str, len: usize) -> Result<usize, SelectionError> {
    if len == 0 {
        return Err(SelectionError::EmptyFeed);
    }
    let index: i64 = raw
        .trim()
        .parse()
        .map_err(|_| SelectionError::NotANumber(raw.to_string()))?;
    match usize::try_from(index) {
        Ok(n) if (1..=len).contains(&n) => Ok(n - 1),
        _ => Err(SelectionError::OutOfRange { index, len }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_bounds_are_one_based() {
        assert_eq!(parse_selection("1", 3), Ok(0));
        assert_eq!(parse_selection(" 3 ", 3), Ok(2));
        assert_eq!(
            parse_selection("0", 3),
            Err(SelectionError::OutOfRange { index: 0, len: 3 })
        );
        assert_eq!(
            parse_selection("4", 3),
            Err(SelectionError::OutOfRange { index: 4, len: 3 })
        );
        assert_eq!(
            parse_selection("-1", 3),
            Err(SelectionError::OutOfRange { index: -1, len: 3 })
        );
    }

    #[test]
    fn selection_rejects_non_numbers() {
        assert_eq!(
            parse_selection("abc", 1),
            Err(SelectionError::NotANumber("abc".to_string()))
        );
        assert_eq!(
            parse_selection("", 1),
            Err(SelectionError::NotANumber(String::new()))
        );
        assert_eq!(parse_selection("1", 0), Err(SelectionError::EmptyFeed));
    }

    #[test]
    fn consume_dirty_clears_flag() {
        let mut state = AppState::new();
        assert!(!state.consume_dirty());
        state.enqueue("https://a.example.com".to_string());
        assert!(state.consume_dirty());
        assert!(!state.consume_dirty());
        assert_eq!(state.dequeue_front().as_deref(), Some("https://a.example.com"));
        assert_eq!(state.dequeue_front(), None);
        assert!(state.consume_dirty());
    }
}
