use std::sync::OnceLock;

use urlfeed_logging::{urlfeed_debug, urlfeed_warn};

use crate::{
    menu_lines, render_listing, AppState, DispatchTable, Effect, MenuAction, Msg, Outbox,
    Prompt, SelectionError,
};

const FEED_LABEL: &str = "Feed";
const FAVORITES_LABEL: &str = "Favorites";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let mut out = Outbox::new(state.trace_enabled());
    match msg {
        Msg::Started => {
            show_menu(&mut out);
            out.trace(format!(
                "Dispatch table keys: {:?}",
                dispatch_table().keys()
            ));
        }
        Msg::MenuInput(raw) => {
            let choice = raw.trim();
            out.trace(format!("User choice: '{choice}'"));
            match dispatch_table().lookup(choice) {
                Some(action) => {
                    out.trace(format!("Dispatching to: {}", action.name()));
                    urlfeed_debug!("Dispatching {:?}", action);
                    run_action(&mut state, action, &mut out);
                }
                None => out.print("Invalid choice."),
            }
        }
        Msg::UrlEntered(url) => {
            out.trace(format!("User entered URL: '{url}'"));
            let len = state.enqueue(url.clone());
            out.trace(format!("Feed now has {len} items"));
            out.print(format!("{url}, added to feed."));
        }
        Msg::SelectionEntered(raw) => {
            out.trace(format!("User selected: '{raw}'"));
            match state.push_selected(&raw) {
                Ok(url) => out.print(format!("{url} added successfully.")),
                Err(SelectionError::EmptyFeed) => out.print(empty_hint(FEED_LABEL)),
                Err(err) => {
                    urlfeed_warn!("Rejected favorite selection: {}", err);
                    out.print("Invalid selection.");
                }
            }
        }
        Msg::NoOp => {}
    }

    (state, out.into_effects())
}

fn dispatch_table() -> &'static DispatchTable {
    static TABLE: OnceLock<DispatchTable> = OnceLock::new();
    TABLE.get_or_init(DispatchTable::new)
}

fn run_action(state: &mut AppState, action: MenuAction, out: &mut Outbox) {
    match action {
        MenuAction::Shutdown => {
            out.trace("shutdown() called");
            out.print("Shutting Down...");
            out.stop();
        }
        MenuAction::AddPost => out.prompt(Prompt::Url),
        MenuAction::SkipPost => {
            out.trace("skip_post() called");
            match state.dequeue_front() {
                Some(url) => out.print(format!("{url} removed from feed.")),
                None => out.print(empty_hint(FEED_LABEL)),
            }
        }
        MenuAction::AddFavorite => {
            out.trace("add_favorite() called");
            if state.feed().is_empty() {
                out.print(empty_hint(FEED_LABEL));
            } else {
                view_listing(out, FEED_LABEL, state.feed());
                out.prompt(Prompt::FavoriteSelection);
            }
        }
        MenuAction::RemoveLastFavorite => {
            out.trace("remove_last_favorite() called");
            match state.pop_last() {
                Some(url) => out.print(format!("{url} removed from favorites.")),
                None => out.print(empty_hint(FAVORITES_LABEL)),
            }
        }
        MenuAction::ViewFeed => view_listing(out, FEED_LABEL, state.feed()),
        MenuAction::ViewFavorites => view_listing(out, FAVORITES_LABEL, state.favorites()),
        MenuAction::ShowMenu => show_menu(out),
        MenuAction::ToggleTrace => {
            let label = if state.toggle_trace() { "ON" } else { "OFF" };
            out.print(format!("Trace mode is now {label}."));
        }
    }
}

fn view_listing<'a, I>(out: &mut Outbox, label: &str, items: I)
where
    I: IntoIterator<Item = &'a String>,
    I::IntoIter: ExactSizeIterator,
{
    let items = items.into_iter();
    out.trace(format!(
        "view_data() called with label='{label}', size={}",
        items.len()
    ));
    out.print_all(render_listing(label, items));
}

fn show_menu(out: &mut Outbox) {
    out.trace("print_menu() called");
    out.print_all(menu_lines());
}

fn empty_hint(label: &str) -> String {
    format!("{label} empty, try adding a URL")
}
