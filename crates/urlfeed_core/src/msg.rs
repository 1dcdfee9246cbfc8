#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// The menu loop is starting; shows the menu once.
    Started,
    /// Raw line read at the main menu prompt.
    MenuInput(String),
    /// Answer to the "Enter the URL" prompt.
    UrlEntered(String),
    /// Answer to the favorite selection prompt.
    SelectionEntered(String),
    /// Identity message: leaves state untouched and produces no effects.
    NoOp,
}
