//! Session state for the REPL and CLI.
//!
//! A session owns one [`BcvParser`] and turns each input line into printable
//! output. Lines starting with `:` are commands; anything else is text to
//! search for citations.

use std::fmt::Write as _;
use std::path::PathBuf;

use lectio_foundation::{Error, ErrorKind, Result};
use lectio_parser::{BcvParser, ParseResult, ResolverConfig};
use tracing::debug;

use crate::serialize;

/// How parse results are printed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Comma-joined OSIS.
    #[default]
    Osis,
    /// One line per translation group: OSIS, tab, translations.
    Translations,
    /// One line per passage: span, OSIS, translations.
    Indices,
}

/// Every REPL command with its usage line.
pub const COMMANDS: &[(&str, &str)] = &[
    (":set", ":set NAME VALUE    change an option"),
    (":options", ":options           show every option"),
    (":ast", ":ast TEXT          show the grammar tree for TEXT"),
    (":lang", ":lang [CODE]       show or switch the book language"),
    (":mode", ":mode osis|translations|indices"),
    (":systems", ":systems           list loaded versification systems"),
    (":load-system", ":load-system PATH  load a saved versification system"),
    (":save-system", ":save-system NAME PATH"),
    (":help", ":help              show this list"),
];

/// Parser state for an interactive or batch session.
#[derive(Debug)]
pub struct Session {
    parser: BcvParser,
    mode: OutputMode,
    load_path: PathBuf,
}

impl Session {
    /// Creates an English session with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the English table is unavailable.
    pub fn new() -> Result<Self> {
        Self::for_language("en")
    }

    /// Creates a session for a built-in language.
    ///
    /// # Errors
    ///
    /// Returns an error if the language is unknown.
    pub fn for_language(code: &str) -> Result<Self> {
        Ok(Self::with_parser(BcvParser::for_language(code)?))
    }

    /// Creates a session around an existing parser.
    #[must_use]
    pub fn with_parser(parser: BcvParser) -> Self {
        Self {
            parser,
            mode: OutputMode::default(),
            load_path: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Returns the parser.
    #[must_use]
    pub const fn parser(&self) -> &BcvParser {
        &self.parser
    }

    /// Returns the parser for editing.
    pub fn parser_mut(&mut self) -> &mut BcvParser {
        &mut self.parser
    }

    /// Returns the output mode.
    #[must_use]
    pub const fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Sets the output mode.
    pub fn set_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    /// Sets the directory relative paths are resolved against.
    pub fn set_load_path(&mut self, path: PathBuf) {
        self.load_path = path;
    }

    /// Resolves a path relative to the load path.
    #[must_use]
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = PathBuf::from(path);
        if path.is_absolute() {
            path
        } else {
            self.load_path.join(path)
        }
    }

    /// Words worth completing in the REPL.
    #[must_use]
    pub fn completions(&self) -> Vec<String> {
        COMMANDS
            .iter()
            .map(|(name, _)| (*name).to_string())
            .chain(ResolverConfig::OPTIONS.iter().map(|o| (*o).to_string()))
            .chain(lectio_stdlib::languages().into_iter().map(String::from))
            .collect()
    }

    /// Handles one line, returning the text to print.
    ///
    /// # Errors
    ///
    /// Returns an error for a bad command or a failed parse.
    pub fn eval(&mut self, line: &str) -> Result<String> {
        let line = line.trim();
        if line.starts_with(':') {
            self.command(line)
        } else {
            let result = self.parser.parse(line)?;
            Ok(self.render(&result))
        }
    }

    /// Formats a parse result in the current output mode, warnings last.
    #[must_use]
    pub fn render(&self, result: &ParseResult) -> String {
        let mut out = match self.mode {
            OutputMode::Osis => result.osis(),
            OutputMode::Translations => result
                .osis_and_translations()
                .into_iter()
                .map(|(osis, translations)| format!("{osis}\t{translations}"))
                .collect::<Vec<_>>()
                .join("\n"),
            OutputMode::Indices => result
                .osis_and_indices()
                .into_iter()
                .map(|e| {
                    format!(
                        "{}..{}\t{}\t{}",
                        e.span.start,
                        e.span.end,
                        e.osis,
                        e.translations.join(",")
                    )
                })
                .collect::<Vec<_>>()
                .join("\n"),
        };
        for warning in result.warnings() {
            if !out.is_empty() {
                out.push('\n');
            }
            let _ = write!(out, "warning: {warning}");
        }
        out
    }

    fn command(&mut self, line: &str) -> Result<String> {
        let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        debug!(command = name, "session command");
        match name {
            ":set" => {
                let (option, value) = rest
                    .split_once(char::is_whitespace)
                    .or_else(|| rest.split_once('='))
                    .ok_or_else(|| usage(":set"))?;
                self.parser.set_option(option.trim(), value.trim())?;
                Ok(format!("{} = {}", option.trim(), value.trim()))
            }
            ":options" => Ok(self
                .parser
                .config()
                .options()
                .into_iter()
                .map(|(name, value)| format!("{name} = {value}"))
                .collect::<Vec<_>>()
                .join("\n")),
            ":ast" => {
                let (_, nodes) = self.parser.parse_ast(rest)?;
                Ok(nodes
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n"))
            }
            ":lang" if rest.is_empty() => Ok(self.parser.matcher().language().to_string()),
            ":lang" => {
                self.parser.set_matcher(lectio_stdlib::language(rest)?);
                Ok(format!("language = {}", self.parser.matcher().language()))
            }
            ":mode" => {
                self.mode = match rest {
                    "osis" => OutputMode::Osis,
                    "translations" => OutputMode::Translations,
                    "indices" => OutputMode::Indices,
                    _ => {
                        return Err(Error::invalid_option(
                            "mode",
                            rest,
                            "osis | translations | indices",
                        ));
                    }
                };
                Ok(format!("mode = {rest}"))
            }
            ":systems" => Ok(self.parser.store().system_names().join("\n")),
            ":load-system" => {
                if rest.is_empty() {
                    return Err(usage(":load-system"));
                }
                let system = serialize::load_from_file(self.resolve_path(rest))?;
                let name = system.name().to_string();
                self.parser.store_mut().add_system(system);
                Ok(format!("loaded system {name}"))
            }
            ":save-system" => {
                let (system, path) = rest
                    .split_once(char::is_whitespace)
                    .ok_or_else(|| usage(":save-system"))?;
                let system = self.parser.store().system(system)?;
                let path = self.resolve_path(path.trim());
                serialize::save_to_file(system, &path)?;
                Ok(format!("saved {} to {}", system.name(), path.display()))
            }
            ":help" => Ok(COMMANDS
                .iter()
                .map(|(_, usage)| *usage)
                .collect::<Vec<_>>()
                .join("\n")),
            _ => Err(Error::new(ErrorKind::Internal(format!(
                "unknown command {name}, try :help"
            )))),
        }
    }
}

fn usage(command: &str) -> Error {
    let text = COMMANDS
        .iter()
        .find(|(name, _)| *name == command)
        .map_or(command, |(_, usage)| *usage);
    Error::new(ErrorKind::Internal(format!("usage: {text}")))
}
