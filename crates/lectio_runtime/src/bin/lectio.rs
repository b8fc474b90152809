//! Lectio CLI entry point.

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;

use lectio_runtime::{OutputMode, Repl, Session, init_tracing};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    texts: Vec<String>,
    language: Option<String>,
    options: Vec<(String, String)>,
    mode: OutputMode,
    read_stdin: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-t" | "--translations" => config.mode = OutputMode::Translations,
            "-i" | "--indices" => config.mode = OutputMode::Indices,
            "-l" | "--lang" => {
                let code = args.next().ok_or("--lang requires a value")?;
                config.language = Some(code);
            }
            "-s" | "--set" => {
                let pair = args.next().ok_or("--set requires name=value")?;
                let (name, value) = pair
                    .split_once('=')
                    .ok_or_else(|| format!("invalid --set value: {pair}"))?;
                config.options.push((name.to_string(), value.to_string()));
            }
            "-" => config.read_stdin = true,
            flag if flag.starts_with('-') && flag.len() > 1 => {
                return Err(format!("unknown option: {flag}").into());
            }
            _ => config.texts.push(arg),
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("lectio {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut session = match &config.language {
        Some(code) => Session::for_language(code)?,
        None => Session::new()?,
    };
    for (name, value) in &config.options {
        session.parser_mut().set_option(name, value)?;
    }
    session.set_mode(config.mode);

    if config.read_stdin {
        for line in io::stdin().lock().lines() {
            print_parsed(&session, &line?)?;
        }
        return Ok(());
    }

    if !config.texts.is_empty() {
        for text in &config.texts {
            print_parsed(&session, text)?;
        }
        return Ok(());
    }

    Repl::with_session(session)?.run()?;
    Ok(())
}

fn print_parsed(session: &Session, text: &str) -> Result<(), Box<dyn std::error::Error>> {
    let result = session.parser().parse(text)?;
    println!("{}", session.render(&result));
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mLectio\x1b[0m - Scripture citation parser

\x1b[1mUSAGE:\x1b[0m
    lectio [OPTIONS] [TEXT...]

\x1b[1mARGUMENTS:\x1b[0m
    [TEXT...]    Text to search for citations; each prints one result
    -            Read text from stdin, one result per line

\x1b[1mOPTIONS:\x1b[0m
    -h, --help               Print help information
    -V, --version            Print version information
    -l, --lang CODE          Book language (en, ja)
    -s, --set NAME=VALUE     Set a parser option (repeatable)
    -t, --translations       Print OSIS grouped by translation
    -i, --indices            Print each passage with its byte span

\x1b[1mEXAMPLES:\x1b[0m
    lectio \"John 3:16, 18; 4:2\"
    lectio --set osis_compaction_strategy=bcv \"Gen 1\"
    lectio --lang ja \"ヨハネ 3:16\"
    cat sermon.txt | lectio -

With no text, starts an interactive session; type :help there for commands.
Set RUST_LOG=lectio_parser=debug to see each resolution step."
    );
}
