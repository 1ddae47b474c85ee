//! Yes/no questions on the operator's terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, StdinLock, StdoutLock, Write};
use tracing::warn;

/// Asks the operator for a yes/no decision.
///
/// The rest of the program only ever sees the returned boolean, so
/// anything that can answer a question can stand in for the terminal.
pub trait Confirm {
    fn ask(&mut self, prompt: &str) -> bool;
}

/// Line-based gate over any input/output stream pair.
///
/// An answer containing `n` is a no, an answer containing `y` or an
/// empty line is a yes, anything else asks again. Case-insensitive;
/// `n` wins over `y` ("ny" is a no). End of input counts as a no, a
/// run without a terminal cannot consent to anything.
pub struct LineGate<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LineGate<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Confirm for LineGate<R, W> {
    fn ask(&mut self, prompt: &str) -> bool {
        loop {
            let _ = write!(self.output, "{prompt} [Y/n] ");
            let _ = self.output.flush();

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) => {
                    warn!("input closed before a decisive answer, treating as no");
                    return false;
                }
                Ok(_) => {}
                Err(e) => {
                    warn!("reading answer failed ({e}), treating as no");
                    return false;
                }
            }

            let answer = line.trim_end_matches(['\r', '\n']).to_lowercase();
            if answer.contains('n') {
                return false;
            }
            if answer.contains('y') || answer.is_empty() {
                return true;
            }
        }
    }
}

/// Gate wired to the real terminal.
pub fn std_gate() -> LineGate<StdinLock<'static>, StdoutLock<'static>> {
    LineGate::new(io::stdin().lock(), io::stdout().lock())
}

/// Gate answering from a pre-recorded script, remembering every prompt
/// it was asked. Once the script runs out, everything is a no.
#[derive(Debug, Default)]
pub struct ScriptedGate {
    answers: VecDeque<bool>,
    prompts: Vec<String>,
}

impl ScriptedGate {
    pub fn new<I: IntoIterator<Item = bool>>(answers: I) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl Confirm for ScriptedGate {
    fn ask(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
