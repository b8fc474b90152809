//! The main REPL implementation.

use std::io::{self, Write};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;
use lectio_foundation::{Error, Result};

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (parser, output mode).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor or the English table fails to
    /// initialize.
    pub fn new() -> Result<Self> {
        Self::with_session(Session::new()?)
    }

    /// Creates a REPL around a configured session.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn with_session(session: Session) -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?, session))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor and session.
    pub fn with_editor(mut editor: E, session: Session) -> Self {
        editor.set_completions(session.completions());
        editor.set_matcher(session.parser().matcher().clone());
        Self {
            editor,
            session,
            show_banner: true,
            prompt: "lectio> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        while let Some(output) = self.step()? {
            match output {
                Ok(text) if text.is_empty() => {}
                Ok(text) => println!("{text}"),
                Err(e) => print_error(&e),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Reads and evaluates one line.
    ///
    /// Returns `Ok(None)` at end of input. Evaluation errors are returned
    /// inside, so the loop can report them and carry on.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the editor fails.
    pub fn step(&mut self) -> Result<Option<Result<String>>> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(Some(Ok(String::new()))),
            ReadResult::Eof => return Ok(None),
        };
        if line.trim().is_empty() {
            return Ok(Some(Ok(String::new())));
        }
        self.editor.add_history(&line);

        let language = self.session.parser().matcher().language().to_string();
        let output = self.session.eval(&line);
        if self.session.parser().matcher().language() != language {
            self.editor
                .set_matcher(self.session.parser().matcher().clone());
        }
        Ok(Some(output))
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36mLectio\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Type text to find citations, :help for commands. Use Ctrl+D to exit.\n"
        );
        let _ = io::stdout().flush();
    }
}

/// Prints an error to stderr.
fn print_error(error: &Error) {
    eprintln!("\x1b[31mError: {error}\x1b[0m");
}

#[cfg(test)]
mod tests {
    use super::*;
    use lectio_language::BookMatcher;
    use std::sync::Arc;

    /// A simple mock editor for testing.
    struct MockEditor {
        inputs: Vec<String>,
        index: usize,
        history: Vec<String>,
        matcher_language: Option<String>,
    }

    impl MockEditor {
        fn new(inputs: Vec<&str>) -> Self {
            Self {
                inputs: inputs.into_iter().map(String::from).collect(),
                index: 0,
                history: Vec::new(),
                matcher_language: None,
            }
        }
    }

    impl LineEditor for MockEditor {
        fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
            if self.index < self.inputs.len() {
                let line = self.inputs[self.index].clone();
                self.index += 1;
                if line == "^C" {
                    return Ok(ReadResult::Interrupted);
                }
                Ok(ReadResult::Line(line))
            } else {
                Ok(ReadResult::Eof)
            }
        }

        fn add_history(&mut self, line: &str) {
            self.history.push(line.to_string());
        }

        fn set_completions(&mut self, _words: Vec<String>) {}

        fn set_matcher(&mut self, matcher: Arc<dyn BookMatcher>) {
            self.matcher_language = Some(matcher.language().to_string());
        }
    }

    fn repl(inputs: Vec<&str>) -> Repl<MockEditor> {
        Repl::with_editor(MockEditor::new(inputs), Session::new().unwrap()).without_banner()
    }

    #[test]
    fn steps_through_lines() {
        let mut repl = repl(vec!["John 3:16", "", ":set nope 1", "^C"]);
        assert_eq!(repl.step().unwrap().unwrap().unwrap(), "John.3.16");
        assert_eq!(repl.step().unwrap().unwrap().unwrap(), "");
        assert!(repl.step().unwrap().unwrap().is_err());
        assert_eq!(repl.step().unwrap().unwrap().unwrap(), "");
        assert!(repl.step().unwrap().is_none());
        assert_eq!(repl.editor.history, vec!["John 3:16", ":set nope 1"]);
    }

    #[test]
    fn language_switch_reaches_the_editor() {
        let mut repl = repl(vec![":lang ja"]);
        assert_eq!(repl.editor.matcher_language.as_deref(), Some("en"));
        repl.step().unwrap();
        assert_eq!(repl.editor.matcher_language.as_deref(), Some("ja"));
    }

    #[test]
    fn run_ends_at_eof() {
        let mut repl = repl(vec!["Gen 1:1"]);
        repl.run().unwrap();
    }
}
