use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use urlfeed_core::{update, AppState, LoopControl, Msg};
use urlfeed_logging::{urlfeed_debug, urlfeed_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::logging;

pub fn run_app() -> Result<()> {
    let config = AppConfig::default();
    logging::initialize(&config);
    urlfeed_info!("urlfeed starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());
    session.run()?;

    urlfeed_info!("urlfeed exiting");
    Ok(())
}

/// One interactive run: owns the state and both ends of the terminal.
pub struct Session<R, W> {
    input: R,
    runner: EffectRunner<W>,
    state: AppState,
    lines_read: u64,
    input_closed: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_state(input, output, AppState::new())
    }

    pub fn with_state(input: R, output: W, state: AppState) -> Self {
        Self {
            input,
            runner: EffectRunner::new(output),
            state,
            lines_read: 0,
            input_closed: false,
        }
    }

    /// Runs the menu loop until shutdown is chosen or input ends.
    pub fn run(&mut self) -> Result<()> {
        let mut control = self.dispatch(Msg::Started)?;
        while control == LoopControl::Continue {
            let Some(line) = self.read_line()? else {
                urlfeed_info!("Input closed after {} lines; leaving menu loop", self.lines_read);
                break;
            };
            control = self.dispatch(Msg::MenuInput(line))?;
            if control == LoopControl::Stop {
                self.trace("Shutdown signal received; exiting main loop")?;
            }
        }
        self.trace("Program exiting main()")?;
        Ok(())
    }

    /// Applies a message, writes its effects and answers any prompt it raised.
    fn dispatch(&mut self, msg: Msg) -> Result<LoopControl> {
        let mut pending = Some(msg);
        let mut control = LoopControl::Continue;
        while let Some(msg) = pending.take() {
            let state = std::mem::take(&mut self.state);
            let (mut state, effects) = update(state, msg);
            if state.consume_dirty() {
                urlfeed_debug!(
                    "State changed: feed={} favorites={} trace={}",
                    state.feed().len(),
                    state.favorites().len(),
                    state.trace_enabled()
                );
            }
            self.state = state;

            let outcome = self
                .runner
                .run(effects)
                .context("failed to write to output")?;
            control = outcome.control;
            if let Some(prompt) = outcome.prompt {
                pending = self.read_line()?.map(|line| prompt.answer(line));
            }
        }
        Ok(control)
    }

    /// Reads one line without its line terminator. `None` once input ends.
    fn read_line(&mut self) -> Result<Option<String>> {
        if self.input_closed {
            return Ok(None);
        }
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from input")?;
        if read == 0 {
            self.input_closed = true;
            return Ok(None);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        self.lines_read += 1;
        Ok(Some(line))
    }

    fn trace(&mut self, line: &str) -> Result<()> {
        if self.state.trace_enabled() {
            self.runner
                .trace(line)
                .context("failed to write to output")?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn state(&self) -> &AppState {
        &self.state
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.runner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn run_script(script: &str) -> (AppState, String) {
        urlfeed_logging::initialize_for_tests();
        let mut session = Session::new(Cursor::new(script.to_string()), Vec::new());
        session.run().unwrap();
        let state = session.state().clone();
        let output = String::from_utf8(session.into_output()).unwrap();
        (state, output)
    }

    #[test]
    fn menu_shown_on_start() {
        let (_state, output) = run_script("0\n");

        assert!(output.starts_with("=== Menu ===\n[0] Shut down\n"));
        assert!(output.contains("=== Select an action ===\n"));
        assert!(output.ends_with("Shutting Down...\n"));
    }

    #[test]
    fn added_posts_listed_in_order() {
        let (state, output) = run_script("1\na\n1\nb\n1\nc\n5\n0\n");

        assert!(output.contains("Enter the URL: a, added to feed.\n"));
        assert!(output.contains("\n=== Feed ===\n1. a\n2. b\n3. c\n"));
        assert_eq!(state.view().feed, vec!["a", "b", "c"]);
    }

    #[test]
    fn favorite_selection_reads_prompt_answer() {
        let (state, output) = run_script("1\na\n1\nb\n3\n2\n0\n");

        assert!(output.contains("Select which option to add as favorite (ex: 2): b added successfully.\n"));
        assert_eq!(state.view().favorites, vec!["b"]);
        assert_eq!(state.view().feed, vec!["a", "b"]);
    }

    #[test]
    fn invalid_selection_keeps_favorites() {
        let (state, output) = run_script("1\na\n3\n5\n0\n");

        assert!(output.contains("Invalid selection.\n"));
        assert!(state.favorites().is_empty());
    }

    #[test]
    fn invalid_choice_keeps_looping() {
        let (state, output) = run_script("9\n6\n0\n");

        assert!(output.contains("Invalid choice.\n"));
        assert!(output.contains("Favorites empty, try adding a URL\n"));
        assert!(output.ends_with("Shutting Down...\n"));
        assert_eq!(state, AppState::new());
    }

    #[test]
    fn urls_keep_inner_whitespace_and_may_be_empty() {
        let (state, _output) = run_script("1\n  spaced url \r\n1\n\n0\n");

        assert_eq!(state.view().feed, vec!["  spaced url ", ""]);
    }

    #[test]
    fn trace_lines_tagged_when_on() {
        let (_state, output) = run_script("8\n2\n0\n");

        assert!(output.contains("Trace mode is now ON.\n"));
        assert!(output.contains("[TRACE] User choice: '2'\n"));
        assert!(output.contains("[TRACE] skip_post() called\nFeed empty, try adding a URL\n"));
        assert!(output.contains("[TRACE] Shutdown signal received; exiting main loop\n"));
        assert!(output.ends_with("[TRACE] Program exiting main()\n"));
    }

    #[test]
    fn trace_off_writes_no_trace_lines() {
        let (_state, output) = run_script("8\n8\n2\n0\n");

        assert!(output.contains("Trace mode is now OFF.\n"));
        assert!(!output.contains("[TRACE] skip_post"));
        assert!(!output.contains("Program exiting"));
    }

    #[test]
    fn prompt_answers_count_as_read_lines() {
        urlfeed_logging::initialize_for_tests();
        let mut session = Session::new(Cursor::new("1\na\n3\n1\n".to_string()), Vec::new());
        session.run().unwrap();

        assert_eq!(session.lines_read, 4);
        assert!(session.input_closed);
        assert_eq!(session.state().view().favorites, vec!["a"]);
    }

    #[test]
    fn end_of_input_ends_loop() {
        let (state, output) = run_script("1\nhttps://a.example.com\n");

        assert!(!output.contains("Shutting Down..."));
        assert_eq!(state.view().feed, vec!["https://a.example.com"]);
    }

    #[test]
    fn end_of_input_at_prompt_ends_loop() {
        let (state, output) = run_script("1\n");

        assert!(output.ends_with("Enter the URL: "));
        assert!(state.feed().is_empty());
    }
}
