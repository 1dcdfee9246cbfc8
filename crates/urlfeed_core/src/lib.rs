//! Urlfeed core: pure state machine for the feed/favorites menu.
mod effect;
mod menu;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, LoopControl, Outbox, Prompt, TRACE_PREFIX};
pub use menu::{menu_lines, DispatchTable, MenuAction, MenuEntry, MENU};
pub use msg::Msg;
pub use state::{AppState, SelectionError};
pub use update::update;
pub use view_model::{render_listing, AppViewModel};
