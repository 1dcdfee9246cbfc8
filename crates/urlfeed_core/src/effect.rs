use crate::Msg;

/// Prefix that marks a diagnostic line in the output stream.
pub const TRACE_PREFIX: &str = "[TRACE] ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// One line of normal output.
    Print(String),
    /// One diagnostic line, written with [`TRACE_PREFIX`].
    Trace(String),
    /// Read one more line and feed it back through [`Prompt::answer`].
    Prompt(Prompt),
    /// Leave the menu loop.
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    Url,
    FavoriteSelection,
}

impl Prompt {
    pub fn text(self) -> &'static str {
        match self {
            Prompt::Url => "Enter the URL: ",
            Prompt::FavoriteSelection => "Select which option to add as favorite (ex: 2): ",
        }
    }

    pub fn answer(self, line: String) -> Msg {
        match self {
            Prompt::Url => Msg::UrlEntered(line),
            Prompt::FavoriteSelection => Msg::SelectionEntered(line),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

impl LoopControl {
    pub fn from_effects(effects: &[Effect]) -> Self {
        if effects.contains(&Effect::Stop) {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    }
}

/// Collects the effects of a single message.
///
/// Carries the trace setting that was in force when the message arrived, so
/// handlers never read it from anywhere else. Trace lines are dropped while
/// tracing is off.
#[derive(Debug)]
pub struct Outbox {
    trace: bool,
    effects: Vec<Effect>,
}

impl Outbox {
    pub fn new(trace: bool) -> Self {
        Self {
            trace,
            effects: Vec::new(),
        }
    }

    pub fn print(&mut self, line: impl Into<String>) {
        self.effects.push(Effect::Print(line.into()));
    }

    pub fn print_all(&mut self, lines: impl IntoIterator<Item = String>) {
        self.effects.extend(lines.into_iter().map(Effect::Print));
    }

    pub fn trace(&mut self, line: impl Into<String>) {
        if self.trace {
            self.effects.push(Effect::Trace(line.into()));
        }
    }

    pub fn prompt(&mut self, prompt: Prompt) {
        self.effects.push(Effect::Prompt(prompt));
    }

    pub fn stop(&mut self) {
        self.effects.push(Effect::Stop);
    }

    pub fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}
