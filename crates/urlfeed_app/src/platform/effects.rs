use std::io::{self, Write};

use urlfeed_core::{Effect, LoopControl, Prompt, TRACE_PREFIX};
use urlfeed_logging::urlfeed_trace;

/// What the loop has to do once a batch of effects has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunOutcome {
    pub control: LoopControl,
    pub prompt: Option<Prompt>,
}

/// Writes effects to the user's output stream.
pub struct EffectRunner<W> {
    out: W,
}

impl<W: Write> EffectRunner<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn run(&mut self, effects: Vec<Effect>) -> io::Result<RunOutcome> {
        let mut outcome = RunOutcome {
            control: LoopControl::from_effects(&effects),
            prompt: None,
        };
        for effect in effects {
            match effect {
                Effect::Print(line) => writeln!(self.out, "{line}")?,
                Effect::Trace(line) => self.trace(&line)?,
                Effect::Prompt(prompt) => {
                    urlfeed_trace!("Prompting for {:?}", prompt);
                    write!(self.out, "{}", prompt.text())?;
                    outcome.prompt = Some(prompt);
                }
                Effect::Stop => {}
            }
        }
        self.out.flush()?;
        Ok(outcome)
    }

    pub fn trace(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{TRACE_PREFIX}{line}")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
