use std::collections::HashMap;

/// Every action reachable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    Shutdown,
    AddPost,
    SkipPost,
    AddFavorite,
    RemoveLastFavorite,
    ViewFeed,
    ViewFavorites,
    ShowMenu,
    ToggleTrace,
}

impl MenuAction {
    /// Handler name shown in trace output.
    pub fn name(self) -> &'static str {
        match self {
            MenuAction::Shutdown => "shutdown",
            MenuAction::AddPost => "add_post",
            MenuAction::SkipPost => "skip_post",
            MenuAction::AddFavorite => "add_favorite",
            MenuAction::RemoveLastFavorite => "remove_last_favorite",
            MenuAction::ViewFeed => "view_feed",
            MenuAction::ViewFavorites => "view_favorites",
            MenuAction::ShowMenu => "print_menu",
            MenuAction::ToggleTrace => "toggle_trace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub action: MenuAction,
}

const fn entry(key: &'static str, label: &'static str, action: MenuAction) -> MenuEntry {
    MenuEntry { key, label, action }
}

/// The menu in display order.
pub const MENU: [MenuEntry; 9] = [
    entry("0", "Shut down", MenuAction::Shutdown),
    entry("1", "Add post", MenuAction::AddPost),
    entry("2", "Skip post", MenuAction::SkipPost),
    entry("3", "Add favorites", MenuAction::AddFavorite),
    entry("4", "Remove last favorited", MenuAction::RemoveLastFavorite),
    entry("5", "View feed", MenuAction::ViewFeed),
    entry("6", "View Favorites", MenuAction::ViewFavorites),
    entry("7", "Show menu", MenuAction::ShowMenu),
    entry("8", "Toggle trace", MenuAction::ToggleTrace),
];

/// Key to action lookup built from a list of menu entries ([`MENU`] by default).
#[derive(Debug, Clone)]
pub struct DispatchTable {
    keys: Vec<&'static str>,
    actions: HashMap<&'static str, MenuAction>,
}

impl DispatchTable {
    pub fn new() -> Self {
        Self::from_entries(&MENU)
    }

    pub fn from_entries(entries: &[MenuEntry]) -> Self {
        let mut keys = Vec::with_capacity(entries.len());
        let mut actions = HashMap::with_capacity(entries.len());
        for entry in entries {
            if actions.insert(entry.key, entry.action).is_none() {
                keys.push(entry.key);
            }
        }
        Self { keys, actions }
    }

    /// Trims the raw input line and looks it up.
    pub fn lookup(&self, raw: &str) -> Option<MenuAction> {
        self.actions.get(raw.trim()).copied()
    }

    /// Keys in the order of the entries the table was built from.
    pub fn keys(&self) -> &[&'static str] {
        &self.keys
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}

pub fn menu_lines() -> Vec<String> {
    let mut lines = Vec::with_capacity(MENU.len() + 2);
    lines.push("=== Menu ===".to_string());
    lines.extend(
        MENU.iter()
            .map(|entry| format!("[{}] {}", entry.key, entry.label)),
    );
    lines.push("=== Select an action ===".to_string());
    lines
}
